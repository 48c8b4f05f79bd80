//! Handler for `GET /league` — the sortable league table.
//!
//! | Param   | Values | Default |
//! |---------|--------|---------|
//! | `sort`  | `batter`, `avg_exit_speed`, `avg_launch_angle`, `avg_hit_distance` | `avg_exit_speed` |
//! | `order` | `asc`, anything else sorts descending | `desc` |

use axum::{
  Json,
  extract::{Query, State},
};
use dinger_core::{
  store::EventStore,
  summary::{BatterSummary, LeagueQuery, SortColumn, SortOrder},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize, Default)]
pub struct LeagueParams {
  pub sort:  Option<String>,
  pub order: Option<String>,
}

/// `GET /league[?sort=<column>][&order=<asc|desc>]`
///
/// An unrecognised `sort` value is rejected with 400 before the store is
/// touched.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<LeagueParams>,
) -> Result<Json<Vec<BatterSummary>>, ApiError>
where
  S: EventStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let sort = match params.sort.as_deref() {
    Some(name) => name
      .parse::<SortColumn>()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    None => SortColumn::default(),
  };
  let order = params
    .order
    .as_deref()
    .map(SortOrder::from_param)
    .unwrap_or_default();

  let query = LeagueQuery {
    sort,
    order,
    min_events: state.qualifying_events,
  };

  let summaries = state
    .store
    .league_summaries(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(summaries))
}
