//! Core types and trait definitions for the Dinger batted-ball store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod event;
pub mod spray;
pub mod store;
pub mod summary;

pub use error::{Error, Result};

/// Minimum number of recorded batted-ball events a batter needs before they
/// appear in the league table.
///
/// The convention is *raw event rows per batter after duplicate suppression*.
/// Upstream data at one point carried every row 48 times, which pushed the
/// same qualification line to 480; against deduplicated rows the equivalent
/// figure is 10. Override per deployment via `qualifying_events` in the
/// server configuration rather than editing this constant.
pub const DEFAULT_QUALIFYING_EVENTS: u64 = 10;
