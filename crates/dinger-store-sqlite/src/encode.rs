//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Game dates are stored as `%Y-%m-%d` TEXT. Sort parameters map to static
//! SQL fragments so no user input ever reaches query text.

use chrono::NaiveDate;
use dinger_core::{
  event::BattedBallEvent,
  summary::{SortColumn, SortOrder},
};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String {
  d.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Sort allow-list ─────────────────────────────────────────────────────────

/// The ORDER BY column for a [`SortColumn`]. These name SELECT aliases in the
/// league query and are the only strings ever spliced into it.
pub fn order_by_column(c: SortColumn) -> &'static str {
  match c {
    SortColumn::Batter => "batter",
    SortColumn::AvgExitSpeed => "avg_exit_speed",
    SortColumn::AvgLaunchAngle => "avg_launch_angle",
    SortColumn::AvgHitDistance => "avg_hit_distance",
  }
}

pub fn order_by_direction(o: SortOrder) -> &'static str {
  match o {
    SortOrder::Asc => "ASC",
    SortOrder::Desc => "DESC",
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from an `events` row.
pub struct RawEvent {
  pub event_id:       i64,
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
  pub game_date:      String,
  pub play_outcome:   String,
  pub video_link:     String,
}

impl RawEvent {
  pub fn into_event(self) -> Result<BattedBallEvent> {
    Ok(BattedBallEvent {
      event_id:       self.event_id,
      batter:         self.batter,
      batter_id:      self.batter_id,
      pitcher:        self.pitcher,
      pitcher_id:     self.pitcher_id,
      exit_direction: self.exit_direction,
      exit_speed:     self.exit_speed,
      launch_angle:   self.launch_angle,
      hit_distance:   self.hit_distance,
      hang_time:      self.hang_time,
      hit_spin_rate:  self.hit_spin_rate,
      game_date:      decode_date(&self.game_date)?,
      play_outcome:   self.play_outcome,
      video_link:     self.video_link,
    })
  }
}
