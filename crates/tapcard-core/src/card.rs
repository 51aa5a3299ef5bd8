//! Card — a digital business card with five fixed sections.
//!
//! The sections are loosely structured documents at the store boundary, but
//! every `Card` handed to a caller carries all five, fully populated: a
//! missing stored section is replaced by that section's `Default` on read.
//! Wire names are camelCase to match the public JSON shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Sections ────────────────────────────────────────────────────────────────

/// Identity and contact details of the card holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
  pub first_name:  String,
  pub last_name:   String,
  /// Public URL of the profile photo, or empty if none has been uploaded.
  pub photo:       String,
  pub designation: String,
  pub phone:       String,
  pub email:       String,
}

/// Company affiliation and offered services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Business {
  pub company:  String,
  pub role:     String,
  /// Ordered list of offered services. Defaults to empty, never null.
  pub services: Vec<String>,
}

/// Social media and web presence links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Social {
  pub linkedin:  String,
  pub twitter:   String,
  pub instagram: String,
  pub facebook:  String,
  pub website:   String,
}

/// Free-form biography and experience blurbs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
  pub bio:        String,
  pub experience: String,
}

/// Call-to-action contact points shown on the rendered card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cta {
  pub call:     String,
  pub whatsapp: String,
  pub email:    String,
  pub website:  String,
}

// ─── Card ────────────────────────────────────────────────────────────────────

/// A fully materialised business card as returned by every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
  pub id:         Uuid,
  pub owner_id:   String,
  pub profile:    Profile,
  pub business:   Business,
  pub social:     Social,
  pub about:      About,
  pub cta:        Cta,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The five replaceable sections of a card, as accepted by a full update.
///
/// A full update overwrites all five columns unconditionally; callers must
/// supply complete sections (no merge with stored values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardSections {
  pub profile:  Profile,
  pub business: Business,
  pub social:   Social,
  pub about:    About,
  pub cta:      Cta,
}
