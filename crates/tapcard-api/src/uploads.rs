//! [`UploadStore`] — filesystem storage for uploaded profile photos.
//!
//! Files land in a single flat directory served statically under a public
//! URL prefix. No type or size validation is performed; any payload is
//! stored as-is.

use std::{
  path::PathBuf,
  sync::atomic::{AtomicU64, Ordering},
};

use chrono::Utc;
use tokio::fs;

/// Filesystem store for uploaded files.
pub struct UploadStore {
  dir:        PathBuf,
  url_prefix: String,
  seq:        AtomicU64,
}

impl UploadStore {
  /// `dir` is created on demand at save time; `url_prefix` is the public
  /// mount point of the static file route (e.g. `/uploads`).
  pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
    Self {
      dir:        dir.into(),
      url_prefix: url_prefix.into(),
      seq:        AtomicU64::new(0),
    }
  }

  /// Write `bytes` under a collision-free name derived from `original_name`
  /// and return the public URL of the stored file.
  ///
  /// The stored name is `{unix_millis}-{seq}-{sanitised original}`. The
  /// process-wide sequence counter guarantees two saves in the same process
  /// never produce the same name, even within one millisecond.
  pub async fn save(
    &self,
    original_name: &str,
    bytes: &[u8],
  ) -> std::io::Result<String> {
    fs::create_dir_all(&self.dir).await?;

    let stored_name = format!(
      "{}-{}-{}",
      Utc::now().timestamp_millis(),
      self.seq.fetch_add(1, Ordering::Relaxed),
      sanitize_filename(original_name),
    );

    fs::write(self.dir.join(&stored_name), bytes).await?;

    Ok(format!(
      "{}/{stored_name}",
      self.url_prefix.trim_end_matches('/')
    ))
  }
}

/// Keep `[A-Za-z0-9._-]`, map everything else to `_`. Empty names fall back
/// to `upload.bin` so the stored name always has a basename.
fn sanitize_filename(name: &str) -> String {
  let cleaned: String = name
    .chars()
    .map(|c| {
      if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
        c
      } else {
        '_'
      }
    })
    .collect();

  if cleaned.trim_matches(|c| c == '.' || c == '_').is_empty() {
    "upload.bin".to_string()
  } else {
    cleaned
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_store() -> (UploadStore, PathBuf) {
    let dir = std::env::temp_dir().join(format!("tapcard-uploads-{}", uuid::Uuid::new_v4()));
    (UploadStore::new(&dir, "/uploads"), dir)
  }

  #[test]
  fn sanitize_keeps_safe_chars() {
    assert_eq!(sanitize_filename("avatar.png"), "avatar.png");
    assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
    assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
  }

  #[test]
  fn sanitize_empty_falls_back() {
    assert_eq!(sanitize_filename(""), "upload.bin");
    assert_eq!(sanitize_filename("..."), "upload.bin");
  }

  #[tokio::test]
  async fn save_returns_prefixed_url_and_writes_file() {
    let (store, dir) = temp_store();

    let url = store.save("avatar.png", b"png-bytes").await.unwrap();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with("-avatar.png"));

    let stored_name = url.strip_prefix("/uploads/").unwrap();
    let on_disk = tokio::fs::read(dir.join(stored_name)).await.unwrap();
    assert_eq!(on_disk, b"png-bytes");

    tokio::fs::remove_dir_all(&dir).await.ok();
  }

  #[tokio::test]
  async fn same_name_twice_stores_distinct_files() {
    let (store, dir) = temp_store();

    let a = store.save("avatar.png", b"one").await.unwrap();
    let b = store.save("avatar.png", b"two").await.unwrap();
    assert_ne!(a, b);

    tokio::fs::remove_dir_all(&dir).await.ok();
  }
}
