//! HTTP Basic-auth identity extractor and standalone verifier.
//!
//! Credentials are optional: a request without an `Authorization` header is
//! anonymous, and the [`Gate`](tweeteor_core::Gate) decides what anonymous
//! callers may do. A header that is present but does not verify is rejected
//! outright.

use std::collections::HashMap;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Deserialize;
use tweeteor_core::{store::TweetStore, tweet::UserId};

use crate::{AppState, error::Error};

/// A login accepted by this server instance.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Password hashes keyed by username.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
  accounts: HashMap<String, String>,
}

impl AuthConfig {
  pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
    Self {
      accounts: accounts
        .into_iter()
        .map(|a| (a.username, a.password_hash))
        .collect(),
    }
  }
}

/// The identity behind a request, or `None` for an anonymous request.
pub struct Caller(pub Option<UserId>);

/// Resolve the caller from request headers.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<Option<UserId>, Error> {
  let Some(header_val) = headers.get(axum::http::header::AUTHORIZATION) else {
    return Ok(None);
  };
  let header_val = header_val.to_str().map_err(|_| Error::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(Error::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| Error::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  let stored = config.accounts.get(username).ok_or(Error::Unauthorized)?;

  let parsed_hash = PasswordHash::new(stored).map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(Some(UserId::new(username)))
}

impl<S> FromRequestParts<AppState<S>> for Caller
where
  S: TweetStore + Clone + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let caller = verify_auth(&parts.headers, &state.auth)?;
    if let Some(user) = &caller {
      tracing::debug!(%user, "authenticated request");
    }
    Ok(Caller(caller))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::HeaderValue;
  use axum::http::header;

  fn config(password: &str) -> AuthConfig {
    use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
    use rand_core::OsRng;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string();
    AuthConfig::new([Account { username: "user".into(), password_hash: hash }])
  }

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    h
  }

  fn basic(user: &str, pass: &str) -> String {
    let encoded = B64.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
  }

  #[test]
  fn correct_credentials() {
    let cfg = config("secret");
    let caller = verify_auth(&headers(&basic("user", "secret")), &cfg).unwrap();
    assert_eq!(caller, Some(UserId::new("user")));
  }

  #[test]
  fn missing_header_is_anonymous() {
    let cfg = config("secret");
    assert_eq!(verify_auth(&HeaderMap::new(), &cfg).unwrap(), None);
  }

  #[test]
  fn wrong_password() {
    let cfg = config("secret");
    let res = verify_auth(&headers(&basic("user", "wrong")), &cfg);
    assert!(matches!(res, Err(Error::Unauthorized)));
  }

  #[test]
  fn unknown_user() {
    let cfg = config("secret");
    let res = verify_auth(&headers(&basic("nobody", "secret")), &cfg);
    assert!(matches!(res, Err(Error::Unauthorized)));
  }

  #[test]
  fn invalid_base64() {
    let cfg = config("secret");
    let res = verify_auth(&headers("Basic !!!not-base64!!!"), &cfg);
    assert!(matches!(res, Err(Error::Unauthorized)));
  }

  #[test]
  fn non_basic_scheme() {
    let cfg = config("secret");
    let res = verify_auth(&headers("Bearer abc"), &cfg);
    assert!(matches!(res, Err(Error::Unauthorized)));
  }
}
