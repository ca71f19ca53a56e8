//! Error types for `tweeteor-core`.

use thiserror::Error;

/// An error returned by the [`Gate`](crate::gate::Gate).
///
/// `Unauthenticated` and `InvalidInput` are caller-recoverable: the
/// presentation layer surfaces them and lets the user retry.
#[derive(Debug, Error)]
pub enum Error {
  #[error("authentication required")]
  Unauthenticated,

  #[error("invalid input: {0}")]
  InvalidInput(&'static str),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
