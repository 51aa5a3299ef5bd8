//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Sections are stored as
//! compact JSON objects. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tapcard_core::card::Card;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Sections ────────────────────────────────────────────────────────────────

pub fn encode_section<T: Serialize>(section: &T) -> Result<String> {
  Ok(serde_json::to_string(section)?)
}

/// Decode a section column, substituting the section default for NULL.
///
/// This is the read-time defaulting rule: whatever is physically stored,
/// callers always see a complete section object.
pub fn decode_section<T: DeserializeOwned + Default>(
  col: Option<&str>,
) -> Result<T> {
  match col {
    Some(json) => Ok(serde_json::from_str(json)?),
    None => Ok(T::default()),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `cards` row.
pub struct RawCard {
  pub id:         String,
  pub owner_id:   String,
  pub profile:    Option<String>,
  pub business:   Option<String>,
  pub social:     Option<String>,
  pub about:      Option<String>,
  pub cta:        Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawCard {
  pub fn into_card(self) -> Result<Card> {
    Ok(Card {
      id:         decode_uuid(&self.id)?,
      owner_id:   self.owner_id,
      profile:    decode_section(self.profile.as_deref())?,
      business:   decode_section(self.business.as_deref())?,
      social:     decode_section(self.social.as_deref())?,
      about:      decode_section(self.about.as_deref())?,
      cta:        decode_section(self.cta.as_deref())?,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
