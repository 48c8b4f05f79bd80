//! Spray-chart geometry: direction bucketing and Cartesian projection.
//!
//! Pure functions from event slices to derived chart data; the store is not
//! involved. Both outputs preserve the input (store) order.

use serde::{Deserialize, Serialize};

use crate::event::BattedBallEvent;

// ─── Direction percentages ───────────────────────────────────────────────────

/// Share of a batter's events falling in each of four fixed 22.5°-wide
/// direction buckets spanning −45..45.
///
/// Buckets are half-open except the last, which is closed at 45°:
/// `far_left` [−45, −22.5), `left` [−22.5, 0), `right` [0, 22.5),
/// `far_right` [22.5, 45]. Directions outside the conventional range fall
/// into the nearest end bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionPercentages {
  pub far_left:  f64,
  pub left:      f64,
  pub right:     f64,
  pub far_right: f64,
}

impl DirectionPercentages {
  /// Bucket every event's exit direction and express each bucket's count as
  /// a percentage of the total.
  ///
  /// An empty slice yields all-zero buckets; the zero-event case is an
  /// explicit branch, never a division by zero.
  pub fn from_events(events: &[BattedBallEvent]) -> Self {
    if events.is_empty() {
      return Self { far_left: 0.0, left: 0.0, right: 0.0, far_right: 0.0 };
    }

    let mut counts = [0u64; 4];
    for event in events {
      counts[bucket_index(event.exit_direction as f64)] += 1;
    }

    let total = events.len() as f64;
    let pct = |n: u64| n as f64 / total * 100.0;

    Self {
      far_left:  pct(counts[0]),
      left:      pct(counts[1]),
      right:     pct(counts[2]),
      far_right: pct(counts[3]),
    }
  }
}

fn bucket_index(direction: f64) -> usize {
  if direction < -22.5 {
    0
  } else if direction < 0.0 {
    1
  } else if direction < 22.5 {
    2
  } else {
    3
  }
}

// ─── Plot points ─────────────────────────────────────────────────────────────

/// A top-down spray-chart coordinate derived from one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
  pub x: f64,
  pub y: f64,
}

impl PlotPoint {
  /// Project `(exit_direction °, hit_distance)` onto the diamond.
  ///
  /// The y component is negated so that increasing on-field depth plots
  /// upward in the usual top-down layout.
  pub fn from_event(event: &BattedBallEvent) -> Self {
    let angle_rad = (event.exit_direction as f64).to_radians();
    Self {
      x: event.hit_distance * angle_rad.cos(),
      y: -event.hit_distance * angle_rad.sin(),
    }
  }
}

/// One [`PlotPoint`] per event, in event order. Not deduplicated, not
/// clipped to field boundaries.
pub fn plot_points(events: &[BattedBallEvent]) -> Vec<PlotPoint> {
  events.iter().map(PlotPoint::from_event).collect()
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn event(exit_direction: i64, hit_distance: f64) -> BattedBallEvent {
    BattedBallEvent {
      event_id: 1,
      batter: "Tester".into(),
      batter_id: 100,
      pitcher: "Opponent".into(),
      pitcher_id: 200,
      exit_direction,
      exit_speed: 95.0,
      launch_angle: 20.0,
      hit_distance,
      hang_time: 4.2,
      hit_spin_rate: 1800.0,
      game_date: NaiveDate::from_ymd_opt(2018, 5, 24).unwrap(),
      play_outcome: "Single".into(),
      video_link: "https://example.com/clip".into(),
    }
  }

  #[test]
  fn four_corners_split_evenly() {
    let events: Vec<_> =
      [-45, -10, 10, 45].into_iter().map(|d| event(d, 250.0)).collect();
    let pct = DirectionPercentages::from_events(&events);
    assert_eq!(pct.far_left, 25.0);
    assert_eq!(pct.left, 25.0);
    assert_eq!(pct.right, 25.0);
    assert_eq!(pct.far_right, 25.0);
  }

  #[test]
  fn bucket_edges_are_half_open() {
    // −22.5 belongs to `left`, 0 to `right`, 22.5 to `far_right`.
    assert_eq!(bucket_index(-45.0), 0);
    assert_eq!(bucket_index(-22.5), 1);
    assert_eq!(bucket_index(0.0), 2);
    assert_eq!(bucket_index(22.5), 3);
    assert_eq!(bucket_index(45.0), 3);
  }

  #[test]
  fn no_events_yields_all_zero() {
    let pct = DirectionPercentages::from_events(&[]);
    assert_eq!(
      pct,
      DirectionPercentages {
        far_left:  0.0,
        left:      0.0,
        right:     0.0,
        far_right: 0.0,
      }
    );
  }

  #[test]
  fn straightaway_ball_plots_on_the_x_axis() {
    let p = PlotPoint::from_event(&event(0, 300.0));
    assert_eq!(p.x, 300.0);
    assert_eq!(p.y, 0.0);
  }

  #[test]
  fn out_of_domain_direction_still_projects() {
    // 90° is outside the conventional −45..45 range but must not panic.
    let p = PlotPoint::from_event(&event(90, 300.0));
    assert!(p.x.abs() < 1e-9, "x = {}", p.x);
    assert!((p.y + 300.0).abs() < 1e-9, "y = {}", p.y);
  }

  #[test]
  fn plot_points_preserve_event_order() {
    let events = vec![event(-30, 120.0), event(15, 340.0), event(15, 340.0)];
    let points = plot_points(&events);
    assert_eq!(points.len(), 3);
    // Duplicate events stay duplicated.
    assert_eq!(points[1], points[2]);
    assert!(points[0].x < points[1].x);
  }
}
