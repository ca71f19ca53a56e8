//! Time sources for stores.
//!
//! Stores stamp `created_at` themselves. Taking the time from a [`Clock`]
//! rather than calling `Utc::now()` directly lets tests pin the ordering.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// A source of the current time.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
  now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
  pub fn new(start: DateTime<Utc>) -> Self { Self { now: Mutex::new(start) } }

  /// A clock reading `secs` seconds past the Unix epoch, or `None` when
  /// `secs` is outside the range `DateTime<Utc>` can represent.
  pub fn at_secs(secs: i64) -> Option<Self> {
    DateTime::from_timestamp(secs, 0).map(Self::new)
  }

  pub fn set(&self, t: DateTime<Utc>) { *self.lock() = t; }

  pub fn advance(&self, by: Duration) {
    let mut now = self.lock();
    *now += by;
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
    // A poisoned clock still holds a valid timestamp.
    self.now.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> { *self.lock() }
}
