//! Handler for `GET /players/{batter}` — the per-player detail view.

use axum::{
  Json,
  extract::{Path, State},
};
use chrono::NaiveDate;
use dinger_core::{
  event::BattedBallEvent,
  spray::{DirectionPercentages, PlotPoint, plot_points},
  store::EventStore,
};
use serde::Serialize;

use crate::{AppState, error::ApiError};

// ─── Payload ─────────────────────────────────────────────────────────────────

/// One event as rendered in the player table. A projection of
/// [`BattedBallEvent`]; ids are internal and not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerEvent {
  pub exit_direction: i64,
  pub exit_speed:     f64,
  pub launch_angle:   f64,
  pub hit_distance:   f64,
  pub game_date:      NaiveDate,
  pub play_outcome:   String,
  pub video_link:     String,
}

impl From<BattedBallEvent> for PlayerEvent {
  fn from(e: BattedBallEvent) -> Self {
    Self {
      exit_direction: e.exit_direction,
      exit_speed:     e.exit_speed,
      launch_angle:   e.launch_angle,
      hit_distance:   e.hit_distance,
      game_date:      e.game_date,
      play_outcome:   e.play_outcome,
      video_link:     e.video_link,
    }
  }
}

/// The full player view: event list in store order, direction distribution,
/// and spray-chart points in matching order.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
  pub batter:                String,
  pub events:                Vec<PlayerEvent>,
  pub direction_percentages: DirectionPercentages,
  pub spray:                 Vec<PlotPoint>,
}

// ─── Handler ─────────────────────────────────────────────────────────────────

/// `GET /players/{batter}`
///
/// A batter with no events (unknown or simply eventless — the two are
/// indistinguishable) yields an empty list and all-zero percentages, not an
/// error.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(batter): Path<String>,
) -> Result<Json<PlayerDetail>, ApiError>
where
  S: EventStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let events = state
    .store
    .events_for_batter(&batter)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let direction_percentages = DirectionPercentages::from_events(&events);
  let spray = plot_points(&events);
  let events = events.into_iter().map(PlayerEvent::from).collect();

  Ok(Json(PlayerDetail {
    batter,
    events,
    direction_percentages,
    spray,
  }))
}
