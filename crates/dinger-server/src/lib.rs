//! Server configuration and startup wiring for Dinger.
//!
//! The interesting piece is [`bootstrap`]: the importer runs exactly once,
//! when the store file does not yet exist on disk. Once the file exists the
//! importer never runs again — even if the source spreadsheet changed. That
//! is a deliberate product decision, not an oversight: re-importing requires
//! deleting the store file.

use std::path::PathBuf;

use anyhow::Context as _;
use dinger_store_sqlite::SqliteStore;
use serde::Deserialize;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (with
/// `DINGER_`-prefixed environment overrides).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  /// The SQLite store file. Its presence on disk is what gates the import.
  pub store_path:        PathBuf,
  /// The batted-ball CSV read on first startup.
  pub data_path:         PathBuf,
  /// League-table qualification line, in raw event rows per batter.
  #[serde(default = "default_qualifying_events")]
  pub qualifying_events: u64,
}

fn default_qualifying_events() -> u64 { dinger_core::DEFAULT_QUALIFYING_EVENTS }

// ─── Startup ─────────────────────────────────────────────────────────────────

/// Open the store, importing the source file first iff the store file did
/// not yet exist. Import failures (missing source, malformed rows) abort
/// startup.
pub async fn bootstrap(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
  // Opening the store creates the file, so note existence first.
  let fresh = !config.store_path.exists();

  let store = SqliteStore::open(&config.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", config.store_path)
    })?;

  if fresh {
    let inserted = dinger_import::import_file(&store, &config.data_path)
      .await
      .with_context(|| {
        format!("failed to import events from {:?}", config.data_path)
      })?;
    tracing::info!(
      inserted,
      data_path = %config.data_path.display(),
      "initialised new event store"
    );
  } else {
    tracing::debug!(
      store_path = %config.store_path.display(),
      "store file already exists; skipping import"
    );
  }

  Ok(store)
}

#[cfg(test)]
mod tests {
  use std::{fs, path::Path};

  use dinger_core::store::EventStore as _;

  use super::*;

  const CSV: &str = "\
BATTER,BATTER_ID,EXIT_DIRECTION,EXIT_SPEED,GAME_DATE,HANG_TIME,HIT_DISTANCE,\
HIT_SPIN_RATE,LAUNCH_ANGLE,PITCHER,PITCHER_ID,PLAY_OUTCOME,VIDEO_LINK
Alpha,1,0,100.0,2018-05-24,4.0,300.0,1700.0,15.0,P1,11,Single,https://x/1
Beta,2,10,95.5,2018-05-25,3.8,250.0,1650.0,12.0,P2,12,Out,https://x/2
";

  fn config_in(dir: &Path) -> ServerConfig {
    ServerConfig {
      host:              "127.0.0.1".to_owned(),
      port:              0,
      store_path:        dir.join("events.db"),
      data_path:         dir.join("data.csv"),
      qualifying_events: dinger_core::DEFAULT_QUALIFYING_EVENTS,
    }
  }

  #[tokio::test]
  async fn first_bootstrap_imports_the_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.data_path, CSV).unwrap();

    let store = bootstrap(&config).await.unwrap();
    assert_eq!(store.event_count().await.unwrap(), 2);
    assert!(config.store_path.exists());
  }

  #[tokio::test]
  async fn existing_store_file_suppresses_reimport() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.data_path, CSV).unwrap();

    let store = bootstrap(&config).await.unwrap();
    assert_eq!(store.event_count().await.unwrap(), 2);
    drop(store);

    // Grow the source file; the store file still exists, so the new row
    // must not be picked up.
    fs::write(
      &config.data_path,
      format!(
        "{CSV}Gamma,3,-5,88.0,2018-05-26,3.1,180.0,1500.0,8.0,P3,13,Out,https://x/3\n"
      ),
    )
    .unwrap();

    let store = bootstrap(&config).await.unwrap();
    assert_eq!(store.event_count().await.unwrap(), 2);
  }

  #[tokio::test]
  async fn missing_source_file_aborts_first_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    // No data.csv written.

    let err = bootstrap(&config).await.unwrap_err();
    assert!(err.to_string().contains("failed to import"), "{err:#}");
  }
}
