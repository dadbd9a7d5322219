//! Error types for the academy server

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] sea_orm::DbErr),

  #[error("invalid payment plan")]
  PlanNotFound,

  #[error("user not found")]
  UserNotFound,

  #[error("user already registered")]
  UserExists,

  #[error("transaction not found")]
  TransactionNotFound,

  #[error("video not found")]
  VideoNotFound,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
      Error::PlanNotFound => (StatusCode::NOT_FOUND, "Invalid payment plan"),
      Error::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
      Error::UserExists => (StatusCode::CONFLICT, "User already registered"),
      Error::TransactionNotFound => (StatusCode::NOT_FOUND, "Transaction not found"),
      Error::VideoNotFound => (StatusCode::NOT_FOUND, "Video not found"),
    };

    let body = json::json!({
      "success": false,
      "error": message
    });

    (status, axum::Json(body)).into_response()
  }
}

pub type Result<T> = std::result::Result<T, Error>;
