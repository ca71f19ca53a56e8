//! [`SqliteStore`] — the SQLite implementation of [`TweetStore`].

use std::{path::Path, sync::Arc};

use tweeteor_core::{
  clock::{Clock, SystemClock},
  store::TweetStore,
  tweet::{Tweet, UserId},
};
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawTweet, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tweet store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:  tokio_rusqlite::Connection,
  clock: Arc<dyn Clock>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn).await
  }

  /// Replace the clock used to stamp `created_at`.
  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  async fn init(conn: tokio_rusqlite::Connection) -> Result<Self> {
    conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn, clock: Arc::new(SystemClock) })
  }
}

// ─── TweetStore impl ─────────────────────────────────────────────────────────

impl TweetStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, text: String, author_id: UserId) -> Result<Tweet> {
    let tweet = Tweet {
      tweet_id: Uuid::new_v4(),
      text,
      created_at: self.clock.now(),
      author_id,
    };

    let id_str     = encode_uuid(tweet.tweet_id);
    let text_str   = tweet.text.clone();
    let at_str     = encode_dt(tweet.created_at);
    let author_str = tweet.author_id.as_str().to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO tweets (tweet_id, text, created_at, author_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, text_str, at_str, author_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(tweet)
  }

  async fn remove(&self, tweet_id: Uuid) -> Result<()> {
    let id_str = encode_uuid(tweet_id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM tweets WHERE tweet_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if deleted == 0 {
      tracing::trace!(%tweet_id, "remove: no such tweet");
    }
    Ok(())
  }

  async fn list_ordered_by_recency(&self) -> Result<Vec<Tweet>> {
    let raws: Vec<RawTweet> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT tweet_id, text, created_at, author_id
           FROM tweets
           ORDER BY created_at DESC, seq ASC",
        )?;
        let rows = stmt
          .query_map([], RawTweet::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTweet::into_tweet).collect()
  }
}
