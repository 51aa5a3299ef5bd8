//! `POST /cards/:id/upload` — the photo-attach operation.
//!
//! Composes the [`UploadStore`](crate::UploadStore) with the card store:
//! save the uploaded file, then rewrite `profile.photo` to its URL. The two
//! steps are not atomic — if the profile write fails after the file is on
//! disk, the file stays behind as a dangling upload (logged, not rolled
//! back).

use axum::{
  Json,
  extract::{Multipart, Path, State},
};
use serde_json::json;
use tapcard_core::store::CardStore;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

/// `POST /cards/:id/upload` — multipart body with a single `file` field.
///
/// Responds `200 {"url": "/uploads/<name>"}`, 404 if the card does not
/// exist (checked before the file is written), 400 if no file was sent.
pub async fn attach_photo<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
  mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: CardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  // Resolve the card first so a bad id never leaves a file on disk.
  let card = state
    .store
    .get_card(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("card {id} not found")))?;

  let (original_name, bytes) = loop {
    let Some(field) = multipart.next_field().await? else {
      return Err(ApiError::BadRequest("no file uploaded".to_string()));
    };
    if field.name() != Some("file") {
      continue;
    }
    let original_name = field.file_name().unwrap_or("upload.bin").to_owned();
    let bytes = field.bytes().await?;
    break (original_name, bytes);
  };

  let file_url = state.uploads.save(&original_name, &bytes).await?;

  let mut profile = card.profile;
  profile.photo = file_url.clone();

  let updated = state
    .store
    .set_profile(id, profile)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if updated.is_none() {
    // Card vanished between the existence check and the write. The stored
    // file is left dangling; accepted failure mode.
    tracing::warn!(card_id = %id, url = %file_url, "card deleted mid-upload, file left behind");
    return Err(ApiError::NotFound(format!("card {id} not found")));
  }

  Ok(Json(json!({ "url": file_url })))
}
