//! The tweet record and the identity of its author.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies an account. Holds the account's username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
  pub fn new(username: impl Into<String>) -> Self { Self(username.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for UserId {
  fn from(s: &str) -> Self { Self::new(s) }
}

/// A short text post. No field changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
  /// Store-assigned; never reused, even after the tweet is removed.
  pub tweet_id:   Uuid,
  pub text:       String,
  /// Store-assigned from the store's clock; only used for ordering.
  pub created_at: DateTime<Utc>,
  pub author_id:  UserId,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn user_id_serialises_as_plain_string() {
    let json = serde_json::to_value(UserId::new("alice")).unwrap();
    assert_eq!(json, serde_json::json!("alice"));
  }

  #[test]
  fn tweet_json_shape() {
    let tweet = Tweet {
      tweet_id:   Uuid::nil(),
      text:       "hello".into(),
      created_at: DateTime::from_timestamp(0, 0).unwrap(),
      author_id:  "alice".into(),
    };
    let json = serde_json::to_value(&tweet).unwrap();
    assert_eq!(json["text"], "hello");
    assert_eq!(json["author_id"], "alice");
    assert_eq!(json["tweet_id"], Uuid::nil().to_string());

    let back: Tweet = serde_json::from_value(json).unwrap();
    assert_eq!(back, tweet);
  }
}
