//! HTTP server assembly for Tapcard.
//!
//! Builds the full application router: the JSON card API from
//! [`tapcard_api`], static serving of uploaded photos under `/uploads`, and
//! request tracing.

use std::path::{Path, PathBuf};

use axum::Router;
use serde::Deserialize;
use tapcard_api::ApiState;
use tapcard_core::store::CardStore;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with
/// `TAPCARD_*` environment overrides.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  #[serde(default = "default_upload_dir")]
  pub upload_dir: PathBuf,
  #[serde(default = "default_upload_url_prefix")]
  pub upload_url_prefix: String,
}

fn default_upload_dir() -> PathBuf { PathBuf::from("public/uploads") }

fn default_upload_url_prefix() -> String { "/uploads".to_string() }

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router: card API + static `/uploads` + tracing.
///
/// Uploaded files are written by the API into `upload_dir` and served back
/// from the same directory, so a returned `{url}` is immediately fetchable.
pub fn router<S>(state: ApiState<S>, upload_dir: &Path) -> Router
where
  S: CardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .merge(tapcard_api::api_router(state))
    .nest_service("/uploads", ServeDir::new(upload_dir))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
