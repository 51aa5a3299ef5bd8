//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The boundary mapping: `BadRequest` → 400, `NotFound` → 404, everything
//! else → 500 with a generic message — the underlying cause is logged
//! server-side, never returned to the caller.

use axum::{
  Json,
  extract::multipart::MultipartError,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("multipart error: {0}")]
  Multipart(#[from] MultipartError),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Multipart(e) => {
        tracing::error!(error = %e, "multipart decode failure");
        (StatusCode::BAD_REQUEST, "invalid multipart body".to_string())
      }
      ApiError::Io(e) => {
        tracing::error!(error = %e, "filesystem failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
