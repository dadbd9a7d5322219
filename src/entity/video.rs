//! Video entity - descriptive metadata for externally hosted lesson videos
//!
//! Playback itself is delegated to the embed host; we only render the embed
//! markup and pick a thumbnail.

use chrono::NaiveDateTime;
use json::Value;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
  Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
  #[sea_orm(string_value = "youtube")]
  Youtube,
  #[sea_orm(string_value = "vimeo")]
  Vimeo,
  #[sea_orm(string_value = "url")]
  Url,
  #[sea_orm(string_value = "hls")]
  Hls,
}

#[derive(
  Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
  #[sea_orm(string_value = "beginner")]
  Beginner,
  #[sea_orm(string_value = "intermediate")]
  Intermediate,
  #[sea_orm(string_value = "advanced")]
  Advanced,
  #[sea_orm(string_value = "university")]
  University,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "videos")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: String,
  pub title: String,
  pub description: String,
  /// Duration in seconds
  pub duration: i64,
  pub thumbnail: Option<String>,
  pub source: VideoSource,
  /// YouTube id, Vimeo id, or a direct URL depending on `source`
  pub source_id: String,
  pub level: CourseLevel,
  pub topic: String,
  pub transcript: Option<String>,
  /// json list of `{language, url}` caption tracks
  pub captions: Option<Value>,
  pub uploaded_at: NaiveDateTime,
}

impl Model {
  /// Embed markup for the player, per source kind.
  pub fn embed_code(&self) -> String {
    match self.source {
      VideoSource::Youtube => format!(
        r#"<iframe width="100%" height="600" src="https://www.youtube.com/embed/{}" frameborder="0" allowfullscreen></iframe>"#,
        self.source_id
      ),
      VideoSource::Vimeo => format!(
        r#"<iframe src="https://player.vimeo.com/video/{}" width="100%" height="600" frameborder="0" allow="autoplay; fullscreen; picture-in-picture" allowfullscreen></iframe>"#,
        self.source_id
      ),
      VideoSource::Url => format!(
        r#"<video width="100%" height="600" controls><source src="{}" type="video/mp4">Your browser does not support the video tag.</video>"#,
        self.source_id
      ),
      VideoSource::Hls => format!(
        r#"<video width="100%" height="600" controls><source src="{}" type="application/x-mpegURL">Your browser does not support the video tag.</video>"#,
        self.source_id
      ),
    }
  }

  /// Stored thumbnail if set, else a host-derived or placeholder image.
  pub fn thumbnail_url(&self) -> String {
    if let Some(thumbnail) = &self.thumbnail
      && !thumbnail.is_empty()
    {
      return thumbnail.clone();
    }

    match self.source {
      VideoSource::Youtube => {
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", self.source_id)
      }
      _ => "https://via.placeholder.com/640x360?text=Video+Thumbnail".into(),
    }
  }

  /// YouTube and Vimeo are optimized for fast streaming.
  pub fn fast_start(&self) -> bool {
    matches!(self.source, VideoSource::Youtube | VideoSource::Vimeo)
  }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
