//! Core types and trait definitions for Tweeteor.
//!
//! This crate is free of HTTP and database dependencies. It defines the
//! [`Tweet`](tweet::Tweet) record, the [`TweetStore`](store::TweetStore)
//! abstraction that backends implement, and the [`Gate`](gate::Gate) that
//! every mutation passes through.

pub mod clock;
pub mod error;
pub mod gate;
pub mod memory;
pub mod store;
pub mod tweet;

pub use error::{Error, Result};
pub use gate::Gate;
