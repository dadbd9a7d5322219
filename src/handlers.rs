use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
  course,
  entity::{subscription, transaction, user, video},
  plans::{PLANS, Plan},
  prelude::*,
  state::AppState,
  sv::video::NewVideo,
  utils,
};

pub async fn health() -> &'static str {
  "OK"
}

pub async fn list_plans() -> Json<&'static [Plan]> {
  Json(PLANS)
}

pub async fn get_plan(Path(id): Path<String>) -> Result<Json<&'static Plan>> {
  Plan::by_id(&id).map(Json).ok_or(Error::PlanNotFound)
}

#[derive(Debug, Deserialize)]
pub struct RegisterReq {
  pub user_id: Option<String>,
  pub email: Option<String>,
  pub name: Option<String>,
}

/// User profile together with the derived trial state.
#[derive(Debug, Serialize)]
pub struct TrialRes {
  #[serde(flatten)]
  pub user: user::Model,
  pub trial_active: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub remaining_trial_days: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subscription: Option<subscription::Model>,
}

impl TrialRes {
  fn new(user: user::Model, subscription: Option<subscription::Model>) -> Self {
    Self {
      trial_active: user.trial_active(),
      remaining_trial_days: user.remaining_trial_days(),
      subscription,
      user,
    }
  }
}

pub async fn register(
  State(app): State<Arc<AppState>>,
  Json(req): Json<RegisterReq>,
) -> Result<Json<TrialRes>> {
  let user = app.sv().user.register(req.user_id, req.email, req.name).await?;
  info!("Registered {} with trial until {}", user.user_id, user.trial_ends_at);
  Ok(Json(TrialRes::new(user, None)))
}

pub async fn get_user(
  State(app): State<Arc<AppState>>,
  Path(user_id): Path<String>,
) -> Result<Json<TrialRes>> {
  let sv = app.sv();
  let user = sv.user.get(&user_id).await?;
  let subscription = sv.user.subscription(&user_id).await?;
  Ok(Json(TrialRes::new(user, subscription)))
}

#[derive(Debug, Deserialize)]
pub struct PaymentReq {
  pub user_id: String,
  pub plan_id: String,
  pub payment_method: transaction::PaymentMethod,
}

pub async fn process_payment(
  State(app): State<Arc<AppState>>,
  Json(req): Json<PaymentReq>,
) -> Result<Json<transaction::Model>> {
  let txn = app
    .sv()
    .payment
    .process(&req.user_id, &req.plan_id, req.payment_method)
    .await?;
  info!("Processed {} for {} ({})", txn.id, txn.user_id, txn.plan_id);
  Ok(Json(txn))
}

pub async fn get_transaction(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<transaction::Model>> {
  let txn = app
    .sv()
    .payment
    .by_id(&id)
    .await?
    .ok_or(Error::TransactionNotFound)?;
  Ok(Json(txn))
}

#[derive(Debug, Serialize)]
pub struct VerifyRes {
  pub transaction_id: String,
  pub verified: bool,
}

pub async fn verify_payment(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<VerifyRes>> {
  let verified = app.sv().payment.verify(&id).await?;
  Ok(Json(VerifyRes { transaction_id: id, verified }))
}

pub async fn user_transactions(
  State(app): State<Arc<AppState>>,
  Path(user_id): Path<String>,
) -> Result<Json<Vec<transaction::Model>>> {
  let txns = app.sv().payment.by_user(&user_id).await?;
  Ok(Json(txns))
}

#[derive(Debug, Deserialize)]
pub struct VideoReq {
  pub id: String,
  pub title: String,
  pub description: String,
  pub duration: i64,
  pub thumbnail: Option<String>,
  pub source: video::VideoSource,
  pub source_id: String,
  pub level: video::CourseLevel,
  pub topic: String,
  pub transcript: Option<String>,
  pub captions: Option<json::Value>,
}

/// Video record enriched with the derived playback fields.
#[derive(Debug, Serialize)]
pub struct VideoRes {
  #[serde(flatten)]
  pub video: video::Model,
  pub embed_code: String,
  pub thumbnail_url: String,
  pub duration_display: String,
  pub fast_start: bool,
}

impl From<video::Model> for VideoRes {
  fn from(video: video::Model) -> Self {
    Self {
      embed_code: video.embed_code(),
      thumbnail_url: video.thumbnail_url(),
      duration_display: utils::format_duration(video.duration),
      fast_start: video.fast_start(),
      video,
    }
  }
}

pub async fn create_video(
  State(app): State<Arc<AppState>>,
  Json(req): Json<VideoReq>,
) -> Result<Json<VideoRes>> {
  let video = app
    .sv()
    .video
    .create(NewVideo {
      id: req.id,
      title: req.title,
      description: req.description,
      duration: req.duration,
      thumbnail: req.thumbnail,
      source: req.source,
      source_id: req.source_id,
      level: req.level,
      topic: req.topic,
      transcript: req.transcript,
      captions: req.captions,
    })
    .await?;
  Ok(Json(video.into()))
}

pub async fn get_video(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<VideoRes>> {
  let video =
    app.sv().video.by_id(&id).await?.ok_or(Error::VideoNotFound)?;
  Ok(Json(video.into()))
}

#[derive(Debug, Deserialize)]
pub struct VideosQuery {
  pub level: video::CourseLevel,
}

pub async fn list_videos(
  State(app): State<Arc<AppState>>,
  Query(query): Query<VideosQuery>,
) -> Result<Json<Vec<VideoRes>>> {
  let videos = app.sv().video.by_level(query.level).await?;
  Ok(Json(videos.into_iter().map(Into::into).collect()))
}

pub async fn generate_course(Json(req): Json<course::CourseReq>) -> Json<course::Course> {
  Json(course::generate(&req.topic, &req.level, req.language.as_deref()))
}

#[cfg(test)]
mod tests {
  use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::post,
  };
  use tower::ServiceExt;

  use super::*;

  fn course_router() -> Router {
    Router::new().route("/api/course", post(generate_course))
  }

  fn course_request(body: &str) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri("/api/course")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
  }

  #[tokio::test]
  async fn test_course_endpoint_shape() {
    let res = course_router()
      .oneshot(course_request(r#"{"topic": "AI", "level": "beginner"}"#))
      .await
      .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let course: json::Value = json::from_slice(&bytes).unwrap();

    assert_eq!(course["title"], "AI - beginner");
    assert_eq!(course["language"], "so");

    let lessons = course["lessons"].as_array().unwrap();
    assert_eq!(lessons.len(), 3);

    for lesson in lessons {
      let quiz = lesson["quiz"].as_array().unwrap();
      assert_eq!(quiz.len(), 1);
      assert_eq!(quiz[0]["options"].as_array().unwrap().len(), 4);
      let correct = quiz[0]["correct"].as_u64().unwrap();
      assert!(correct <= 3);
    }
  }

  #[tokio::test]
  async fn test_course_endpoint_rejects_other_methods() {
    let res = course_router()
      .oneshot(
        Request::builder()
          .method("GET")
          .uri("/api/course")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
  }
}
