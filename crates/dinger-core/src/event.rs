//! Batted-ball event types — the fundamental unit of the Dinger store.
//!
//! An event is an immutable record of one ball put in play. Events are never
//! updated or deleted; the store is strictly append-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Event ───────────────────────────────────────────────────────────────────

/// One recorded batted ball. Once written, no field is ever updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattedBallEvent {
  /// Store-assigned sequential id; monotonically increasing, never reused.
  pub event_id:       i64,
  pub batter:         String,
  pub batter_id:      i64,
  pub pitcher:        String,
  pub pitcher_id:     i64,
  /// Horizontal angle in degrees off the field centerline, conventionally
  /// −45..45 (negative is the third-base side).
  pub exit_direction: i64,
  pub exit_speed:     f64,
  pub launch_angle:   f64,
  pub hit_distance:   f64,
  pub hang_time:      f64,
  pub hit_spin_rate:  f64,
  pub game_date:      NaiveDate,
  pub play_outcome:   String,
  pub video_link:     String,
}

// ─── NewEvent ────────────────────────────────────────────────────────────────

/// Input to [`crate::store::EventStore::append_events`].
/// `event_id` is always assigned by the store; it is not accepted from
/// callers.
///
/// The natural key `(batter, game_date, exit_speed, launch_angle)` is what
/// duplicate suppression compares on append. Tuple equality only; it is not
/// a database constraint.
#[derive(Debug, Clone)]
pub struct NewEvent {
  pub batter:         String,
  pub batter_id:      i64,
  pub pitcher:        String,
  pub pitcher_id:     i64,
  pub exit_direction: i64,
  pub exit_speed:     f64,
  pub launch_angle:   f64,
  pub hit_distance:   f64,
  pub hang_time:      f64,
  pub hit_spin_rate:  f64,
  pub game_date:      NaiveDate,
  pub play_outcome:   String,
  pub video_link:     String,
}
