//! The `TweetStore` trait.
//!
//! Implemented by storage backends ([`MemoryStore`](crate::memory::MemoryStore)
//! here, `tweeteor-store-sqlite` for durable storage). The store holds no
//! business rules; those live in the [`Gate`](crate::gate::Gate).

use std::future::Future;

use uuid::Uuid;

use crate::tweet::{Tweet, UserId};

/// Abstraction over a tweet store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TweetStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new tweet. The store assigns `tweet_id` and `created_at`.
  fn insert(
    &self,
    text: String,
    author_id: UserId,
  ) -> impl Future<Output = Result<Tweet, Self::Error>> + Send + '_;

  /// Delete the tweet with `tweet_id`. Removing an unknown id is a no-op.
  fn remove(
    &self,
    tweet_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All tweets, newest `created_at` first. Tweets with equal timestamps
  /// keep insertion order.
  fn list_ordered_by_recency(
    &self,
  ) -> impl Future<Output = Result<Vec<Tweet>, Self::Error>> + Send + '_;
}
