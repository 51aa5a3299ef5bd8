//! JSON REST API for Tapcard.
//!
//! Exposes an axum [`Router`] backed by any [`tapcard_core::store::CardStore`]
//! plus a filesystem [`UploadStore`] for profile photos. Auth, TLS, and
//! transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(tapcard_api::api_router(state))
//! ```

pub mod cards;
pub mod error;
pub mod upload;
pub mod uploads;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use tapcard_core::store::CardStore;

pub use error::ApiError;
pub use uploads::UploadStore;

/// Shared state threaded through all API handlers.
#[derive(Clone)]
pub struct ApiState<S> {
  pub store:   Arc<S>,
  pub uploads: Arc<UploadStore>,
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: CardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Cards
    .route("/cards", get(cards::list::<S>).post(cards::create::<S>))
    .route(
      "/cards/{id}",
      get(cards::get_one::<S>)
        .put(cards::replace::<S>)
        .delete(cards::delete_one::<S>),
    )
    // Photo attach
    .route("/cards/{id}/upload", post(upload::attach_photo::<S>))
    .with_state(state)
}
