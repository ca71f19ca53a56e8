//! HTTP layer for Tweeteor.
//!
//! Exposes an axum [`Router`] serving a JSON API over a
//! [`Gate`](tweeteor_core::Gate) backed by any [`TweetStore`].

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::{delete, get}};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tweeteor_core::{Gate, store::TweetStore};

use auth::{Account, AuthConfig};
use handlers::tweets;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite file, or `:memory:` for a throwaway store.
  pub store_path: PathBuf,
  #[serde(default)]
  pub accounts:   Vec<Account>,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: TweetStore> {
  pub gate: Gate<S>,
  pub auth: Arc<AuthConfig>,
}

impl<S: TweetStore> AppState<S> {
  pub fn new(store: Arc<S>, auth: AuthConfig) -> Self {
    Self { gate: Gate::new(store), auth: Arc::new(auth) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: TweetStore + Clone + 'static,
{
  Router::new()
    .route("/tweets",      get(tweets::list::<S>).post(tweets::create::<S>))
    .route("/tweets/{id}", delete(tweets::delete::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
