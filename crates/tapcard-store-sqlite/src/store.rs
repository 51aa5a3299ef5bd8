//! [`SqliteStore`] — the SQLite implementation of [`CardStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use tapcard_core::{
  card::{About, Business, Card, CardSections, Cta, Profile, Social},
  store::CardStore,
};

use crate::{
  Error, Result,
  encode::{RawCard, encode_dt, encode_section, encode_uuid},
  schema::SCHEMA,
};

const CARD_COLUMNS: &str =
  "id, owner_id, profile, business, social, about, cta, created_at, updated_at";

fn raw_card_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawCard> {
  Ok(RawCard {
    id:         row.get(0)?,
    owner_id:   row.get(1)?,
    profile:    row.get(2)?,
    business:   row.get(3)?,
    social:     row.get(4)?,
    about:      row.get(5)?,
    cta:        row.get(6)?,
    created_at: row.get(7)?,
    updated_at: row.get(8)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Tapcard store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Read one row by id and materialise it (section defaulting included).
  async fn read_card(&self, id: Uuid) -> Result<Option<Card>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawCard> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?1"),
              rusqlite::params![id_str],
              raw_card_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawCard::into_card).transpose()
  }
}

// ─── CardStore impl ──────────────────────────────────────────────────────────

impl CardStore for SqliteStore {
  type Error = Error;

  async fn create_card(&self, owner_id: &str) -> Result<Card> {
    if owner_id.trim().is_empty() {
      return Err(Error::Core(tapcard_core::Error::EmptyOwner));
    }

    let id = Uuid::new_v4();
    let now = Utc::now();

    let id_str       = encode_uuid(id);
    let owner        = owner_id.to_owned();
    let profile_str  = encode_section(&Profile::default())?;
    let business_str = encode_section(&Business::default())?;
    let social_str   = encode_section(&Social::default())?;
    let about_str    = encode_section(&About::default())?;
    let cta_str      = encode_section(&Cta::default())?;
    let at_str       = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO cards (
             id, owner_id, profile, business, social, about, cta,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
          rusqlite::params![
            id_str,
            owner,
            profile_str,
            business_str,
            social_str,
            about_str,
            cta_str,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    // Re-read so the caller gets exactly what any subsequent read would see.
    self
      .read_card(id)
      .await?
      .ok_or(Error::Core(tapcard_core::Error::CardNotFound(id)))
  }

  async fn list_cards(&self, owner_id: &str) -> Result<Vec<Card>> {
    let owner = owner_id.to_owned();

    let raws: Vec<RawCard> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CARD_COLUMNS} FROM cards
           WHERE owner_id = ?1
           ORDER BY created_at DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![owner], raw_card_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCard::into_card).collect()
  }

  async fn get_card(&self, id: Uuid) -> Result<Option<Card>> {
    self.read_card(id).await
  }

  async fn replace_card(
    &self,
    id: Uuid,
    sections: CardSections,
  ) -> Result<Option<Card>> {
    let id_str       = encode_uuid(id);
    let profile_str  = encode_section(&sections.profile)?;
    let business_str = encode_section(&sections.business)?;
    let social_str   = encode_section(&sections.social)?;
    let about_str    = encode_section(&sections.about)?;
    let cta_str      = encode_section(&sections.cta)?;
    let at_str       = encode_dt(Utc::now());

    let updated: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE cards
           SET profile = ?1, business = ?2, social = ?3, about = ?4,
               cta = ?5, updated_at = ?6
           WHERE id = ?7",
          rusqlite::params![
            profile_str,
            business_str,
            social_str,
            about_str,
            cta_str,
            at_str,
            id_str,
          ],
        )?)
      })
      .await?;

    if updated == 0 {
      return Ok(None);
    }
    self.read_card(id).await
  }

  async fn set_profile(&self, id: Uuid, profile: Profile) -> Result<Option<Card>> {
    let id_str      = encode_uuid(id);
    let profile_str = encode_section(&profile)?;
    let at_str      = encode_dt(Utc::now());

    let updated: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE cards SET profile = ?1, updated_at = ?2 WHERE id = ?3",
          rusqlite::params![profile_str, at_str, id_str],
        )?)
      })
      .await?;

    if updated == 0 {
      return Ok(None);
    }
    self.read_card(id).await
  }

  async fn delete_card(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    // Unconditional: deleting an id that no longer exists is a success.
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM cards WHERE id = ?1", rusqlite::params![id_str])?;
        Ok(())
      })
      .await?;

    Ok(())
  }
}
