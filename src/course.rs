//! Templated course generation
//!
//! Returns fixed Somali lesson templates interpolated with the requested
//! topic and level. There is no model behind this; the shape is the contract:
//! three lessons, each with a single four-option quiz question.

use serde::{Deserialize, Serialize};

const DEFAULT_LANGUAGE: &str = "so";

#[derive(Debug, Deserialize)]
pub struct CourseReq {
  pub topic: String,
  pub level: String,
  #[serde(default)]
  pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Course {
  pub title: String,
  pub language: String,
  pub lessons: Vec<Lesson>,
}

#[derive(Debug, Serialize)]
pub struct Lesson {
  pub title: String,
  pub content: String,
  pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
  pub question: String,
  pub options: Vec<String>,
  pub correct: usize,
}

pub fn generate(topic: &str, level: &str, language: Option<&str>) -> Course {
  Course {
    title: format!("{topic} - {level}"),
    language: language.unwrap_or(DEFAULT_LANGUAGE).to_string(),
    lessons: vec![
      Lesson {
        title: format!("Cashar 1: Hordhac {topic}"),
        content: format!(
          "Waxaan ku soo dhawaynayaa casharkan ku saabsan {topic}. Heerkan waa {level}."
        ),
        quiz: vec![QuizQuestion {
          question: format!("Maxay tahay {topic}?"),
          options: options(&["Jawaab A", "Jawaab B", "Jawaab C", "Jawaab D"]),
          correct: 0,
        }],
      },
      Lesson {
        title: format!("Cashar 2: Faahfaahin {topic}"),
        content: format!("Casharkan waxaan si qoto dheer u baranayaa {topic}."),
        quiz: vec![QuizQuestion {
          question: format!("Sidee loo isticmaala {topic}?"),
          options: options(&["Hab A", "Hab B", "Hab C", "Hab D"]),
          correct: 1,
        }],
      },
      Lesson {
        title: format!("Cashar 3: Tusaalayaal {topic}"),
        content: format!("Halkan waxaan arki doonaa tusaalayaal {topic} ku saabsan."),
        quiz: vec![QuizQuestion {
          question: format!("Maxay ka mid yihiin faa'iidooyinka {topic}?"),
          options: options(&["Faa'iido A", "Faa'iido B", "Faa'iido C", "Faa'iido D"]),
          correct: 2,
        }],
      },
    ],
  }
}

fn options(texts: &[&str]) -> Vec<String> {
  texts.iter().map(|s| s.to_string()).collect()
}
