//! Error types for `tapcard-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("owner id must not be empty")]
  EmptyOwner,

  #[error("card not found: {0}")]
  CardNotFound(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
