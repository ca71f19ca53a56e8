//! Handlers for `/tweets` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/tweets` | Newest first |
//! | `POST`   | `/tweets` | Body: `{"text":"..."}`; requires credentials; returns 201 + tweet |
//! | `DELETE` | `/tweets/:id` | Always 204, whether or not the tweet existed |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tweeteor_core::{store::TweetStore, tweet::Tweet};
use uuid::Uuid;

use crate::{AppState, auth::Caller, error::Error};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /tweets` — anonymous reads are fine; bad credentials are not.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Caller(_): Caller,
) -> Result<Json<Vec<Tweet>>, Error>
where
  S: TweetStore + Clone + 'static,
{
  Ok(Json(state.gate.list_tweets().await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub text: String,
}

/// `POST /tweets` — body: `{"text":"..."}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Caller(caller): Caller,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, Error>
where
  S: TweetStore + Clone + 'static,
{
  let tweet = state.gate.create_tweet(caller.as_ref(), &body.text).await?;
  Ok((StatusCode::CREATED, Json(tweet)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /tweets/:id`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Caller(caller): Caller,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, Error>
where
  S: TweetStore + Clone + 'static,
{
  state.gate.delete_tweet(caller.as_ref(), id).await?;
  Ok(StatusCode::NO_CONTENT)
}
