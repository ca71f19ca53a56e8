//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed nine-digit
//! fraction and a `Z` suffix, so string order is chronological order. UUIDs
//! are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use tweeteor_core::tweet::{Tweet, UserId};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `tweets` row.
pub struct RawTweet {
  pub tweet_id:   String,
  pub text:       String,
  pub created_at: String,
  pub author_id:  String,
}

impl RawTweet {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      tweet_id:   row.get(0)?,
      text:       row.get(1)?,
      created_at: row.get(2)?,
      author_id:  row.get(3)?,
    })
  }

  pub fn into_tweet(self) -> Result<Tweet> {
    Ok(Tweet {
      tweet_id:   decode_uuid(&self.tweet_id)?,
      text:       self.text,
      created_at: decode_dt(&self.created_at)?,
      author_id:  UserId::new(self.author_id),
    })
  }
}
