//! Integration tests for `SqliteStore` against an in-memory database.

use std::sync::Arc;

use chrono::Duration;
use tweeteor_core::{
  Gate,
  clock::{Clock, ManualClock},
  store::TweetStore,
  tweet::{Tweet, UserId},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn store_with_clock(secs: i64) -> (SqliteStore, Arc<ManualClock>) {
  let clock = Arc::new(ManualClock::at_secs(secs).expect("clock start in range"));
  (store().await.with_clock(clock.clone()), clock)
}

fn alice() -> UserId { UserId::new("alice") }

fn texts(tweets: &[Tweet]) -> Vec<&str> {
  tweets.iter().map(|t| t.text.as_str()).collect()
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_list() {
  let (s, clock) = store_with_clock(100).await;

  let tweet = s.insert("hello".into(), alice()).await.unwrap();
  assert_eq!(tweet.text, "hello");
  assert_eq!(tweet.author_id, alice());
  assert_eq!(tweet.created_at, clock.now());

  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(listed, vec![tweet]);
}

#[tokio::test]
async fn subsecond_timestamps_roundtrip() {
  let s = store().await;
  let tweet = s.insert("now".into(), alice()).await.unwrap();
  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(listed[0].created_at, tweet.created_at);
}

#[tokio::test]
async fn empty_store_lists_nothing() {
  assert!(store().await.list_ordered_by_recency().await.unwrap().is_empty());
}

// ─── Ordering ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_newest_first() {
  let (s, clock) = store_with_clock(1).await;
  for text in ["a", "b", "c"] {
    s.insert(text.into(), alice()).await.unwrap();
    clock.advance(Duration::seconds(1));
  }

  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(texts(&listed), ["c", "b", "a"]);
}

#[tokio::test]
async fn order_follows_timestamp_not_insertion() {
  let (s, clock) = store_with_clock(50).await;
  s.insert("middle".into(), alice()).await.unwrap();
  clock.set(chrono::DateTime::from_timestamp(99, 0).unwrap());
  s.insert("newest".into(), alice()).await.unwrap();
  clock.set(chrono::DateTime::from_timestamp(1, 0).unwrap());
  s.insert("oldest".into(), alice()).await.unwrap();

  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(texts(&listed), ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn equal_timestamps_keep_insertion_order() {
  let (s, _clock) = store_with_clock(7).await;
  for text in ["x", "y", "z"] {
    s.insert(text.into(), alice()).await.unwrap();
  }

  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(texts(&listed), ["x", "y", "z"]);
}

// ─── Remove ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_deletes_and_is_idempotent() {
  let s = store().await;
  let keep = s.insert("keep".into(), alice()).await.unwrap();
  let gone = s.insert("gone".into(), alice()).await.unwrap();

  s.remove(gone.tweet_id).await.unwrap();
  s.remove(gone.tweet_id).await.unwrap();
  s.remove(Uuid::new_v4()).await.unwrap();

  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(listed, vec![keep]);
}

// ─── Through the gate ────────────────────────────────────────────────────────

#[tokio::test]
async fn gate_over_sqlite() {
  let (s, clock) = store_with_clock(1).await;
  let gate = Gate::new(Arc::new(s));

  let a = gate.create_tweet(Some(&alice()), "a").await.unwrap();
  clock.advance(Duration::seconds(1));
  gate.create_tweet(Some(&alice()), "b").await.unwrap();

  assert!(gate.create_tweet(None, "anon").await.is_err());
  assert!(gate.create_tweet(Some(&alice()), "").await.is_err());

  gate.delete_tweet(None, a.tweet_id).await.unwrap();
  gate.delete_tweet(None, a.tweet_id).await.unwrap();

  let listed = gate.list_tweets().await.unwrap();
  assert_eq!(texts(&listed), ["b"]);
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn tweets_survive_reopen() {
  let path = std::env::temp_dir().join(format!("tweeteor-{}.db", Uuid::new_v4()));

  let tweet = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert("durable".into(), alice()).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let listed = s.list_ordered_by_recency().await.unwrap();
  assert_eq!(listed, vec![tweet]);

  drop(s);
  for suffix in ["", "-wal", "-shm"] {
    let mut p = path.clone().into_os_string();
    p.push(suffix);
    let _ = std::fs::remove_file(p);
  }
}
