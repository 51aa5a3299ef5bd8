//! The `CardStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tapcard-store-sqlite`).
//! Higher layers (`tapcard-api`, `tapcard-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::card::{Card, CardSections, Profile};

/// Abstraction over a Tapcard persistence backend.
///
/// Every read returns fully materialised cards: section columns that are
/// NULL in storage are substituted with their documented defaults before
/// being handed to the caller. Defaulting is a read-time rule only — a plain
/// read never writes defaults back.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create a card owned by `owner_id` with all five sections set to their
  /// defaults, and return the materialised card including store-assigned
  /// timestamps.
  ///
  /// Fails with the backend's wrapping of [`Error::EmptyOwner`] if
  /// `owner_id` is empty or whitespace.
  ///
  /// [`Error::EmptyOwner`]: crate::Error::EmptyOwner
  fn create_card<'a>(
    &'a self,
    owner_id: &'a str,
  ) -> impl Future<Output = Result<Card, Self::Error>> + Send + 'a;

  /// List all cards owned by `owner_id`, most recently created first.
  /// An unknown (or empty) owner yields an empty list.
  fn list_cards<'a>(
    &'a self,
    owner_id: &'a str,
  ) -> impl Future<Output = Result<Vec<Card>, Self::Error>> + Send + 'a;

  /// Retrieve a card by id. Returns `None` if not found.
  fn get_card(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Card>, Self::Error>> + Send + '_;

  /// Overwrite all five sections of the card in one row write and return
  /// the freshly read card. Returns `None` if `id` does not exist.
  fn replace_card(
    &self,
    id: Uuid,
    sections: CardSections,
  ) -> impl Future<Output = Result<Option<Card>, Self::Error>> + Send + '_;

  /// Rewrite only the `profile` section, leaving the other four columns
  /// untouched. Returns the freshly read card, or `None` if `id` does not
  /// exist. This is the only partial-section write the store exposes; it
  /// backs the photo-attach flow.
  fn set_profile(
    &self,
    id: Uuid,
    profile: Profile,
  ) -> impl Future<Output = Result<Option<Card>, Self::Error>> + Send + '_;

  /// Delete the card unconditionally. Deleting a nonexistent id is not an
  /// error (idempotent delete).
  fn delete_card(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
