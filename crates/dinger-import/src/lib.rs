//! Batted-ball source importer.
//!
//! Reads a tabular source file into [`NewEvent`](dinger_core::event::NewEvent)
//! rows and appends them to an [`EventStore`] as one transaction. Duplicate
//! rows — same `(batter, game_date, exit_speed, launch_angle)` natural key as
//! a stored event — are skipped silently inside the store's write
//! transaction, so re-importing the same file is a no-op.
//!
//! When the importer runs is the server's decision; see
//! `dinger-server::bootstrap`.

pub mod error;
pub mod read;

use std::path::Path;

use dinger_core::store::EventStore;

pub use error::ImportError;

/// Import the CSV at `path` into `store`; returns the number of rows
/// actually inserted.
///
/// Any malformed or missing row value aborts the whole import with nothing
/// written.
pub async fn import_file<S>(
  store: &S,
  path: impl AsRef<Path>,
) -> Result<u64, ImportError>
where
  S: EventStore,
{
  let rows = read::read_events(path)?;
  store
    .append_events(rows)
    .await
    .map_err(|e| ImportError::Store(Box::new(e)))
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use dinger_core::store::EventStore as _;
  use dinger_store_sqlite::SqliteStore;

  use super::*;

  const CSV: &str = "\
BATTER,BATTER_ID,EXIT_DIRECTION,EXIT_SPEED,GAME_DATE,HANG_TIME,HIT_DISTANCE,\
HIT_SPIN_RATE,LAUNCH_ANGLE,PITCHER,PITCHER_ID,PLAY_OUTCOME,VIDEO_LINK
Alpha,1,0,100.0,2018-05-24,4.0,300.0,1700.0,15.0,P1,11,Single,https://x/1
Beta,2,10,95.5,2018-05-24,3.8,250.0,1650.0,12.0,P2,12,Out,https://x/2
Alpha,1,0,100.0,2018-05-24,4.0,300.0,1700.0,15.0,P1,11,Single,https://x/1
";

  fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
  }

  #[tokio::test]
  async fn import_suppresses_duplicates_and_is_idempotent() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let file = write_csv(CSV);

    // The file itself contains a duplicate row: 3 rows, 2 inserted.
    let inserted = import_file(&store, file.path()).await.unwrap();
    assert_eq!(inserted, 2);
    assert_eq!(store.event_count().await.unwrap(), 2);

    // Importing the same file again inserts zero new rows.
    let inserted = import_file(&store, file.path()).await.unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(store.event_count().await.unwrap(), 2);
  }

  #[tokio::test]
  async fn malformed_file_writes_nothing() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let file = write_csv(&format!("{CSV}Gamma,oops,0,1,2018-01-01,1,1,1,1,P,1,Out,x\n"));

    let err = import_file(&store, file.path()).await.unwrap_err();
    assert!(matches!(err, ImportError::InvalidField { .. }));
    assert_eq!(store.event_count().await.unwrap(), 0);
  }
}
