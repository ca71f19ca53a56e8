//! The [`Gate`] — identity and input checks in front of a [`TweetStore`].
//!
//! Every mutation goes through the gate; reads may go through it or straight
//! to the store. The gate keeps no state of its own.
//!
//! Creation requires a caller. Deletion does not check the caller at all,
//! not even for ownership of the tweet: any caller, anonymous or not, may
//! remove any tweet.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::{
  Error, Result,
  store::TweetStore,
  tweet::{Tweet, UserId},
};

/// Checks callers and input, then hands the mutation to the store.
pub struct Gate<S> {
  store: Arc<S>,
}

impl<S> Clone for Gate<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: TweetStore> Gate<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// The store this gate writes to.
  pub fn store(&self) -> &Arc<S> { &self.store }

  /// Create a tweet authored by `caller`.
  ///
  /// Fails with [`Error::Unauthenticated`] when there is no caller and with
  /// [`Error::InvalidInput`] when `text` is empty, in that order.
  pub async fn create_tweet(
    &self,
    caller: Option<&UserId>,
    text: &str,
  ) -> Result<Tweet> {
    let Some(author) = caller else {
      debug!("rejected anonymous tweet");
      return Err(Error::Unauthenticated);
    };
    if text.is_empty() {
      debug!(%author, "rejected empty tweet");
      return Err(Error::InvalidInput("tweet text must not be empty"));
    }

    let tweet = self
      .store
      .insert(text.to_owned(), author.clone())
      .await
      .map_err(Error::store)?;
    debug!(tweet_id = %tweet.tweet_id, %author, "created tweet");
    Ok(tweet)
  }

  /// Delete a tweet. Unknown ids are a no-op; `caller` is only logged.
  pub async fn delete_tweet(
    &self,
    caller: Option<&UserId>,
    tweet_id: Uuid,
  ) -> Result<()> {
    self.store.remove(tweet_id).await.map_err(Error::store)?;
    debug!(%tweet_id, caller = caller.map(UserId::as_str), "deleted tweet");
    Ok(())
  }

  /// All tweets, newest first.
  pub async fn list_tweets(&self) -> Result<Vec<Tweet>> {
    self.store.list_ordered_by_recency().await.map_err(Error::store)
  }
}
