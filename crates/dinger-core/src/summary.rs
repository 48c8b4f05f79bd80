//! League-table types: per-batter summaries and sort parameterisation.
//!
//! Summaries are computed read models — never stored, recomputed on every
//! listing request.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─── BatterSummary ───────────────────────────────────────────────────────────

/// Per-batter aggregate over all of their recorded events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterSummary {
  pub batter:            String,
  pub batted_ball_count: u64,
  pub avg_exit_speed:    f64,
  pub avg_launch_angle:  f64,
  pub avg_hit_distance:  f64,
}

// ─── Sort parameterisation ───────────────────────────────────────────────────

/// The enumerated set of columns a league listing may be ordered by.
///
/// Requests carry the column as a string; parsing through [`FromStr`] is the
/// only path from user input to a query, so an unrecognised name fails with
/// [`Error::InvalidSortColumn`] before any SQL is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
  Batter,
  AvgExitSpeed,
  AvgLaunchAngle,
  AvgHitDistance,
}

impl Default for SortColumn {
  fn default() -> Self { Self::AvgExitSpeed }
}

impl FromStr for SortColumn {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "batter" => Ok(Self::Batter),
      "avg_exit_speed" => Ok(Self::AvgExitSpeed),
      "avg_launch_angle" => Ok(Self::AvgLaunchAngle),
      "avg_hit_distance" => Ok(Self::AvgHitDistance),
      other => Err(Error::InvalidSortColumn(other.to_owned())),
    }
  }
}

/// Sort direction; descending unless the request says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  Asc,
  #[default]
  Desc,
}

impl SortOrder {
  /// Lenient parse matching the behaviour consumers already rely on:
  /// the literal `asc` sorts ascending, anything else sorts descending.
  pub fn from_param(s: &str) -> Self {
    if s == "asc" { Self::Asc } else { Self::Desc }
  }
}

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`crate::store::EventStore::league_summaries`].
#[derive(Debug, Clone)]
pub struct LeagueQuery {
  pub sort:       SortColumn,
  pub order:      SortOrder,
  /// Batters with fewer events than this are excluded from the listing.
  pub min_events: u64,
}
