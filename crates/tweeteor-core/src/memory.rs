//! [`MemoryStore`] — an in-process [`TweetStore`].

use std::{
  convert::Infallible,
  sync::{Arc, Mutex, MutexGuard},
};

use uuid::Uuid;

use crate::{
  clock::{Clock, SystemClock},
  store::TweetStore,
  tweet::{Tweet, UserId},
};

/// A tweet store that lives in memory.
///
/// Tweets are kept in insertion order; listing sorts a copy. Cloning is
/// cheap and clones share the same collection.
#[derive(Clone)]
pub struct MemoryStore {
  tweets: Arc<Mutex<Vec<Tweet>>>,
  clock:  Arc<dyn Clock>,
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl MemoryStore {
  pub fn new() -> Self { Self::with_clock(Arc::new(SystemClock)) }

  pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
    Self { tweets: Arc::default(), clock }
  }

  fn tweets(&self) -> MutexGuard<'_, Vec<Tweet>> {
    // Every write is a single push or retain, so a poisoned vec is intact.
    self.tweets.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl TweetStore for MemoryStore {
  type Error = Infallible;

  async fn insert(&self, text: String, author_id: UserId) -> Result<Tweet, Infallible> {
    let tweet = Tweet {
      tweet_id: Uuid::new_v4(),
      text,
      created_at: self.clock.now(),
      author_id,
    };
    self.tweets().push(tweet.clone());
    Ok(tweet)
  }

  async fn remove(&self, tweet_id: Uuid) -> Result<(), Infallible> {
    self.tweets().retain(|t| t.tweet_id != tweet_id);
    Ok(())
  }

  async fn list_ordered_by_recency(&self) -> Result<Vec<Tweet>, Infallible> {
    let mut tweets = self.tweets().clone();
    // `sort_by` is stable: equal timestamps stay in insertion order.
    tweets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(tweets)
  }
}
