//! Handlers for `/cards` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/cards` | `?ownerId=<id>`; empty/unknown owner → `[]` |
//! | `POST`   | `/cards` | Body: `{"ownerId":"..."}`; 400 if missing/empty |
//! | `GET`    | `/cards/:id` | 404 if not found |
//! | `PUT`    | `/cards/:id` | Body: all five sections; full overwrite |
//! | `DELETE` | `/cards/:id` | 204 whether or not the id existed |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tapcard_core::{
  card::{Card, CardSections},
  store::CardStore,
};
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub owner_id: Option<String>,
}

/// `GET /cards?ownerId=<id>`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Card>>, ApiError>
where
  S: CardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let owner_id = params.owner_id.unwrap_or_default();
  let cards = state
    .store
    .list_cards(&owner_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(cards))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  pub owner_id: Option<String>,
}

/// `POST /cards` — body: `{"ownerId":"user123"}`
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let owner_id = body
    .owner_id
    .as_deref()
    .map(str::trim)
    .filter(|o| !o.is_empty())
    .ok_or_else(|| ApiError::BadRequest("ownerId required".to_string()))?;

  let card = state
    .store
    .create_card(owner_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(card)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /cards/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Card>, ApiError>
where
  S: CardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let card = state
    .store
    .get_card(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("card {id} not found")))?;
  Ok(Json(card))
}

// ─── Replace ──────────────────────────────────────────────────────────────────

/// `PUT /cards/:id` — body carries all five sections; the stored sections
/// are overwritten unconditionally, no merge.
pub async fn replace<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
  Json(sections): Json<CardSections>,
) -> Result<Json<Card>, ApiError>
where
  S: CardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let card = state
    .store
    .replace_card(id, sections)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("card {id} not found")))?;
  Ok(Json(card))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /cards/:id` — idempotent; 204 even if the id never existed.
pub async fn delete_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  state
    .store
    .delete_card(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
