//! SQL schema for the Tapcard SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Section columns hold compact JSON objects and are nullable.
-- A NULL section is substituted with its default on read, never rewritten.
CREATE TABLE IF NOT EXISTS cards (
    id          TEXT PRIMARY KEY,
    owner_id    TEXT NOT NULL,
    profile     TEXT,
    business    TEXT,
    social      TEXT,
    about       TEXT,
    cta         TEXT,
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS cards_owner_idx   ON cards(owner_id);
CREATE INDEX IF NOT EXISTS cards_created_idx ON cards(created_at);

PRAGMA user_version = 1;
";
