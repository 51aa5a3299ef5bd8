//! Integration tests for `SqliteStore` against an in-memory database.

use std::time::Duration;

use tapcard_core::{
  card::{About, Business, CardSections, Cta, Profile, Social},
  store::CardStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn full_sections() -> CardSections {
  CardSections {
    profile: Profile {
      first_name:  "Ada".into(),
      last_name:   "Lovelace".into(),
      photo:       "".into(),
      designation: "Analyst".into(),
      phone:       "+44 20 0000 0000".into(),
      email:       "ada@example.com".into(),
    },
    business: Business {
      company:  "Analytical Engines Ltd".into(),
      role:     "Principal".into(),
      services: vec!["Consulting".into(), "Programming".into()],
    },
    social: Social {
      linkedin: "https://linkedin.com/in/ada".into(),
      ..Default::default()
    },
    about: About {
      bio:        "First programmer.".into(),
      experience: "Notes on the Analytical Engine.".into(),
    },
    cta: Cta {
      call:  "+44 20 0000 0000".into(),
      email: "ada@example.com".into(),
      ..Default::default()
    },
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_card_populates_all_default_sections() {
  let s = store().await;

  let card = s.create_card("user123").await.unwrap();
  assert_eq!(card.owner_id, "user123");
  assert_eq!(card.profile, Profile::default());
  assert_eq!(card.business, Business::default());
  assert!(card.business.services.is_empty());
  assert_eq!(card.social, Social::default());
  assert_eq!(card.about, About::default());
  assert_eq!(card.cta, Cta::default());
  assert_eq!(card.created_at, card.updated_at);
}

#[tokio::test]
async fn create_card_empty_owner_errors() {
  let s = store().await;

  let err = s.create_card("").await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tapcard_core::Error::EmptyOwner)
  ));

  let err = s.create_card("   ").await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tapcard_core::Error::EmptyOwner)
  ));
}

#[tokio::test]
async fn created_card_readable_by_id() {
  let s = store().await;

  let card = s.create_card("user123").await.unwrap();
  let fetched = s.get_card(card.id).await.unwrap().unwrap();
  assert_eq!(fetched, card);
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_card_missing_returns_none() {
  let s = store().await;
  let result = s.get_card(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_cards_newest_first() {
  let s = store().await;

  let first = s.create_card("user123").await.unwrap();
  tokio::time::sleep(Duration::from_millis(5)).await;
  let second = s.create_card("user123").await.unwrap();
  tokio::time::sleep(Duration::from_millis(5)).await;
  let third = s.create_card("user123").await.unwrap();

  let cards = s.list_cards("user123").await.unwrap();
  let ids: Vec<_> = cards.iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn list_cards_excludes_other_owners() {
  let s = store().await;

  s.create_card("alice").await.unwrap();
  s.create_card("bob").await.unwrap();
  s.create_card("alice").await.unwrap();

  let cards = s.list_cards("alice").await.unwrap();
  assert_eq!(cards.len(), 2);
  assert!(cards.iter().all(|c| c.owner_id == "alice"));

  assert!(s.list_cards("carol").await.unwrap().is_empty());
  assert!(s.list_cards("").await.unwrap().is_empty());
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_card_roundtrips_all_sections() {
  let s = store().await;

  let card = s.create_card("user123").await.unwrap();
  let sections = full_sections();

  let updated = s
    .replace_card(card.id, sections.clone())
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.id, card.id);
  assert_eq!(updated.owner_id, "user123");
  assert_eq!(updated.profile, sections.profile);
  assert_eq!(updated.business, sections.business);
  assert_eq!(updated.social, sections.social);
  assert_eq!(updated.about, sections.about);
  assert_eq!(updated.cta, sections.cta);

  // A fresh read returns exactly the sections just written.
  let fetched = s.get_card(card.id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn replace_card_touches_updated_at_only() {
  let s = store().await;

  let card = s.create_card("user123").await.unwrap();
  tokio::time::sleep(Duration::from_millis(5)).await;
  let updated = s
    .replace_card(card.id, full_sections())
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.created_at, card.created_at);
  assert!(updated.updated_at > card.updated_at);
}

#[tokio::test]
async fn replace_card_missing_returns_none() {
  let s = store().await;
  let result = s.replace_card(Uuid::new_v4(), full_sections()).await.unwrap();
  assert!(result.is_none());
}

// ─── Profile-only update ─────────────────────────────────────────────────────

#[tokio::test]
async fn set_profile_changes_only_the_profile_column() {
  let s = store().await;

  let card = s.create_card("user123").await.unwrap();
  let card = s
    .replace_card(card.id, full_sections())
    .await
    .unwrap()
    .unwrap();

  let mut profile = card.profile.clone();
  profile.photo = "/uploads/12345-0-avatar.png".into();

  let updated = s.set_profile(card.id, profile.clone()).await.unwrap().unwrap();

  assert_eq!(updated.profile, profile);
  assert_eq!(updated.profile.first_name, "Ada");
  assert_eq!(updated.business, card.business);
  assert_eq!(updated.social, card.social);
  assert_eq!(updated.about, card.about);
  assert_eq!(updated.cta, card.cta);
}

#[tokio::test]
async fn set_profile_missing_returns_none() {
  let s = store().await;
  let result = s
    .set_profile(Uuid::new_v4(), Profile::default())
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_returns_none() {
  let s = store().await;

  let card = s.create_card("user123").await.unwrap();
  s.delete_card(card.id).await.unwrap();

  assert!(s.get_card(card.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_nonexistent_is_idempotent() {
  let s = store().await;
  s.delete_card(Uuid::new_v4()).await.unwrap();

  let card = s.create_card("user123").await.unwrap();
  s.delete_card(card.id).await.unwrap();
  s.delete_card(card.id).await.unwrap();
}

// ─── Read-time defaulting ────────────────────────────────────────────────────

#[tokio::test]
async fn null_sections_default_on_read() {
  let s = store().await;

  // Simulate a legacy row persisted with NULL section columns.
  let id = Uuid::new_v4();
  let id_str = id.hyphenated().to_string();
  s.conn
    .call(move |conn| {
      conn.execute(
        "INSERT INTO cards (id, owner_id, created_at, updated_at)
         VALUES (?1, 'user123', '2024-01-01T00:00:00+00:00',
                 '2024-01-01T00:00:00+00:00')",
        rusqlite::params![id_str],
      )?;
      Ok(())
    })
    .await
    .unwrap();

  let card = s.get_card(id).await.unwrap().unwrap();
  assert_eq!(card.profile, Profile::default());
  assert_eq!(card.business, Business::default());
  assert_eq!(card.business.services, Vec::<String>::new());
  assert_eq!(card.social, Social::default());
  assert_eq!(card.about, About::default());
  assert_eq!(card.cta, Cta::default());

  // Defaulting is a read rule only: the stored columns stay NULL.
  let id_str = id.hyphenated().to_string();
  let profile_col: Option<String> = s
    .conn
    .call(move |conn| {
      Ok(conn.query_row(
        "SELECT profile FROM cards WHERE id = ?1",
        rusqlite::params![id_str],
        |row| row.get(0),
      )?)
    })
    .await
    .unwrap();
  assert!(profile_col.is_none());
}
