//! JSON API for Dinger.
//!
//! Exposes an axum [`Router`] backed by any [`dinger_core::store::EventStore`].
//! The rendering layer consumes these payloads; transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", dinger_api::api_router(state))
//! ```

pub mod error;
pub mod league;
pub mod player;

use std::sync::Arc;

use axum::{Router, routing::get};
use dinger_core::store::EventStore;

pub use error::ApiError;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S: EventStore> {
  pub store:             Arc<S>,
  /// League-table qualification line; see
  /// [`dinger_core::DEFAULT_QUALIFYING_EVENTS`].
  pub qualifying_events: u64,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: EventStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/league", get(league::handler::<S>))
    .route("/players/{batter}", get(player::handler::<S>))
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
