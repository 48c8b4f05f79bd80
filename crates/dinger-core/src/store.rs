//! The `EventStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `dinger-store-sqlite`).
//! Higher layers (`dinger-api`, `dinger-import`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  event::NewEvent,
  summary::{BatterSummary, LeagueQuery},
};

/// Abstraction over a Dinger event store backend.
///
/// Writes are append-only and happen once, at import time; everything else
/// is a read. Events are never mutated or deleted.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EventStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Append `rows` in order as a single transaction, skipping any row whose
  /// natural key `(batter, game_date, exit_speed, launch_angle)` already
  /// matches a stored event — or a row inserted earlier in the same batch.
  /// Skips are silent per row; only the inserted total is reported.
  ///
  /// Nothing is committed until every row has been processed; a failure
  /// mid-batch leaves the store untouched.
  fn append_events(
    &self,
    rows: Vec<NewEvent>,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every event for `batter`, in store (insertion) order. An unknown
  /// batter yields an empty list, indistinguishable from a batter with no
  /// events.
  fn events_for_batter<'a>(
    &'a self,
    batter: &'a str,
  ) -> impl Future<
    Output = Result<Vec<crate::event::BattedBallEvent>, Self::Error>,
  > + Send
  + 'a;

  /// Per-batter summaries for every batter with at least
  /// `query.min_events` events, ordered by the requested column and
  /// direction. Ties fall back to store iteration order; callers must not
  /// rely on tie order.
  fn league_summaries<'a>(
    &'a self,
    query: &'a LeagueQuery,
  ) -> impl Future<Output = Result<Vec<BatterSummary>, Self::Error>> + Send + 'a;

  /// Total number of stored events.
  fn event_count(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
