//! [`SqliteStore`] — the SQLite implementation of [`EventStore`].

use std::path::Path;

use dinger_core::{
  event::{BattedBallEvent, NewEvent},
  store::EventStore,
  summary::{BatterSummary, LeagueQuery},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawEvent, encode_date, order_by_column, order_by_direction},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Dinger event store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone, Debug)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EventStore impl ─────────────────────────────────────────────────────────

impl EventStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn append_events(&self, rows: Vec<NewEvent>) -> Result<u64> {
    // Encode dates up front; the closure below must be infallible apart from
    // database errors.
    let encoded: Vec<(NewEvent, String)> = rows
      .into_iter()
      .map(|row| {
        let date_str = encode_date(row.game_date);
        (row, date_str)
      })
      .collect();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut inserted = 0u64;
        {
          // The natural-key probe runs inside the transaction so it also
          // sees rows inserted earlier in this batch.
          let mut check = tx.prepare(
            "SELECT 1 FROM events
             WHERE batter = ?1 AND game_date = ?2
               AND exit_speed = ?3 AND launch_angle = ?4",
          )?;
          let mut insert = tx.prepare(
            "INSERT INTO events (
               batter, batter_id, pitcher, pitcher_id, exit_direction,
               exit_speed, launch_angle, hit_distance, hang_time,
               hit_spin_rate, game_date, play_outcome, video_link
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
          )?;

          for (row, date_str) in encoded {
            let exists: bool = check
              .query_row(
                rusqlite::params![
                  row.batter,
                  date_str,
                  row.exit_speed,
                  row.launch_angle
                ],
                |_| Ok(true),
              )
              .optional()?
              .unwrap_or(false);

            if exists {
              // Duplicate by natural key — skipped silently.
              continue;
            }

            insert.execute(rusqlite::params![
              row.batter,
              row.batter_id,
              row.pitcher,
              row.pitcher_id,
              row.exit_direction,
              row.exit_speed,
              row.launch_angle,
              row.hit_distance,
              row.hang_time,
              row.hit_spin_rate,
              date_str,
              row.play_outcome,
              row.video_link,
            ])?;
            inserted += 1;
          }
        }
        tx.commit()?;
        Ok(inserted)
      })
      .await?;

    Ok(inserted)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn events_for_batter(&self, batter: &str) -> Result<Vec<BattedBallEvent>> {
    let batter = batter.to_owned();

    let raws: Vec<RawEvent> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT
             event_id, batter, batter_id, pitcher, pitcher_id,
             exit_direction, exit_speed, launch_angle, hit_distance,
             hang_time, hit_spin_rate, game_date, play_outcome, video_link
           FROM events
           WHERE batter = ?1
           ORDER BY event_id",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![batter], |row| {
            Ok(RawEvent {
              event_id:       row.get(0)?,
              batter:         row.get(1)?,
              batter_id:      row.get(2)?,
              pitcher:        row.get(3)?,
              pitcher_id:     row.get(4)?,
              exit_direction: row.get(5)?,
              exit_speed:     row.get(6)?,
              launch_angle:   row.get(7)?,
              hit_distance:   row.get(8)?,
              hang_time:      row.get(9)?,
              hit_spin_rate:  row.get(10)?,
              game_date:      row.get(11)?,
              play_outcome:   row.get(12)?,
              video_link:     row.get(13)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEvent::into_event).collect()
  }

  async fn league_summaries(
    &self,
    query: &LeagueQuery,
  ) -> Result<Vec<BatterSummary>> {
    // The ORDER BY fragment is assembled only from static strings produced
    // by matching on the two enums; user input cannot reach query text.
    let column     = order_by_column(query.sort);
    let direction  = order_by_direction(query.order);
    let min_events = query.min_events as i64;

    let sql = format!(
      "SELECT batter,
              COUNT(*)          AS batted_ball_count,
              AVG(exit_speed)   AS avg_exit_speed,
              AVG(launch_angle) AS avg_launch_angle,
              AVG(hit_distance) AS avg_hit_distance
       FROM events
       GROUP BY batter
       HAVING COUNT(*) >= ?1
       ORDER BY {column} {direction}"
    );

    let summaries: Vec<BatterSummary> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![min_events], |row| {
            Ok(BatterSummary {
              batter:            row.get(0)?,
              batted_ball_count: row.get::<_, i64>(1)? as u64,
              avg_exit_speed:    row.get(2)?,
              avg_launch_angle:  row.get(3)?,
              avg_hit_distance:  row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    Ok(summaries)
  }

  async fn event_count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }
}
