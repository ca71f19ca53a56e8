//! SQL schema for the Tweeteor SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- `seq` records insertion order and breaks ties between equal timestamps.
-- AUTOINCREMENT keeps it from being reused after deletes.
CREATE TABLE IF NOT EXISTS tweets (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    tweet_id    TEXT NOT NULL UNIQUE,
    text        TEXT NOT NULL CHECK (text != ''),
    created_at  TEXT NOT NULL,   -- fixed-width RFC 3339 UTC; store-assigned
    author_id   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS tweets_recency_idx ON tweets(created_at DESC, seq);

PRAGMA user_version = 1;
";
