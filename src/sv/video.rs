use json::Value;

use crate::{
  entity::video::{self, CourseLevel, VideoSource},
  prelude::*,
};

pub struct NewVideo {
  pub id: String,
  pub title: String,
  pub description: String,
  pub duration: i64,
  pub thumbnail: Option<String>,
  pub source: VideoSource,
  pub source_id: String,
  pub level: CourseLevel,
  pub topic: String,
  pub transcript: Option<String>,
  pub captions: Option<Value>,
}

pub struct Video<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Video<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, new: NewVideo) -> Result<video::Model> {
    let video = video::ActiveModel {
      id: Set(new.id),
      title: Set(new.title),
      description: Set(new.description),
      duration: Set(new.duration),
      thumbnail: Set(new.thumbnail),
      source: Set(new.source),
      source_id: Set(new.source_id),
      level: Set(new.level),
      topic: Set(new.topic),
      transcript: Set(new.transcript),
      captions: Set(new.captions),
      uploaded_at: Set(Utc::now().naive_utc()),
    };

    Ok(video.insert(self.db).await?)
  }

  pub async fn by_id(&self, video_id: &str) -> Result<Option<video::Model>> {
    let video = video::Entity::find_by_id(video_id).one(self.db).await?;
    Ok(video)
  }

  pub async fn by_level(&self, level: CourseLevel) -> Result<Vec<video::Model>> {
    let videos = video::Entity::find()
      .filter(video::Column::Level.eq(level))
      .order_by_asc(video::Column::UploadedAt)
      .all(self.db)
      .await?;
    Ok(videos)
  }

  /// Inserts the built-in sample lessons when the catalogue is empty.
  /// Returns the number of videos inserted.
  pub async fn seed_samples(&self) -> Result<u64> {
    if video::Entity::find().count(self.db).await? > 0 {
      return Ok(0);
    }

    let samples = [
      NewVideo {
        id: "vid_1".into(),
        title: "Introduction to AI".into(),
        description: "Learn the fundamentals of AI".into(),
        duration: 600,
        thumbnail: None,
        source: VideoSource::Youtube,
        source_id: "dQw4w9WgXcQ".into(),
        level: CourseLevel::Beginner,
        topic: "AI Fundamentals".into(),
        transcript: None,
        captions: None,
      },
      NewVideo {
        id: "vid_2".into(),
        title: "ML Concepts".into(),
        description: "Understand ML concepts".into(),
        duration: 1200,
        thumbnail: None,
        source: VideoSource::Youtube,
        source_id: "ZzZ_nRKsCKE".into(),
        level: CourseLevel::Beginner,
        topic: "AI Fundamentals".into(),
        transcript: None,
        captions: None,
      },
      NewVideo {
        id: "vid_3".into(),
        title: "Neural Networks".into(),
        description: "Deep dive into neural networks".into(),
        duration: 1800,
        thumbnail: None,
        source: VideoSource::Youtube,
        source_id: "aircAruvnKk".into(),
        level: CourseLevel::Intermediate,
        topic: "Machine Learning".into(),
        transcript: None,
        captions: None,
      },
    ];

    let mut inserted = 0;
    for sample in samples {
      self.create(sample).await?;
      inserted += 1;
    }

    Ok(inserted)
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

  use super::*;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);

    let stmt = schema.create_table_from_entity(video::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  fn sample(id: &str, level: CourseLevel) -> NewVideo {
    NewVideo {
      id: id.into(),
      title: "Test video".into(),
      description: String::new(),
      duration: 600,
      thumbnail: None,
      source: VideoSource::Youtube,
      source_id: "dQw4w9WgXcQ".into(),
      level,
      topic: "AI Fundamentals".into(),
      transcript: None,
      captions: None,
    }
  }

  #[tokio::test]
  async fn test_create_and_load() {
    let db = setup_test_db().await;
    let sv = Video::new(&db);

    let created = sv.create(sample("vid_1", CourseLevel::Beginner)).await.unwrap();
    let loaded = sv.by_id("vid_1").await.unwrap().unwrap();

    assert_eq!(loaded, created);
    assert!(sv.by_id("vid_404").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_by_level_filters() {
    let db = setup_test_db().await;
    let sv = Video::new(&db);

    sv.create(sample("vid_1", CourseLevel::Beginner)).await.unwrap();
    sv.create(sample("vid_2", CourseLevel::Beginner)).await.unwrap();
    sv.create(sample("vid_3", CourseLevel::Advanced)).await.unwrap();

    let beginner = sv.by_level(CourseLevel::Beginner).await.unwrap();
    assert_eq!(beginner.len(), 2);

    let university = sv.by_level(CourseLevel::University).await.unwrap();
    assert!(university.is_empty());
  }

  #[tokio::test]
  async fn test_seed_samples_once() {
    let db = setup_test_db().await;
    let sv = Video::new(&db);

    assert_eq!(sv.seed_samples().await.unwrap(), 3);
    assert_eq!(sv.seed_samples().await.unwrap(), 0);

    let beginner = sv.by_level(CourseLevel::Beginner).await.unwrap();
    assert_eq!(beginner.len(), 2);

    let intermediate = sv.by_level(CourseLevel::Intermediate).await.unwrap();
    assert_eq!(intermediate.len(), 1);
    assert_eq!(intermediate[0].topic, "Machine Learning");
  }
}
