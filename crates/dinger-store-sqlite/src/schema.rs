//! SQL schema for the Dinger SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The natural key `(batter, game_date, exit_speed, launch_angle)` is
/// deliberately not a UNIQUE constraint: duplicate suppression is advisory
/// and lives in the single-threaded import path.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Events are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
-- AUTOINCREMENT keeps event_id monotonic; ids are never reused.
CREATE TABLE IF NOT EXISTS events (
    event_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    batter         TEXT    NOT NULL,
    batter_id      INTEGER NOT NULL,
    pitcher        TEXT    NOT NULL,
    pitcher_id     INTEGER NOT NULL,
    exit_direction INTEGER NOT NULL,  -- degrees, conventionally -45..45
    exit_speed     REAL    NOT NULL,
    launch_angle   REAL    NOT NULL,
    hit_distance   REAL    NOT NULL,
    hang_time      REAL    NOT NULL,
    hit_spin_rate  REAL    NOT NULL,
    game_date      TEXT    NOT NULL,  -- ISO 8601 calendar date
    play_outcome   TEXT    NOT NULL,
    video_link     TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS events_batter_idx ON events(batter);

PRAGMA user_version = 1;
";
