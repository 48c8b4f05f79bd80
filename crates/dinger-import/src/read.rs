//! CSV row reader for batted-ball source files.
//!
//! Pipeline:
//!   path
//!     └─ csv::Reader            → header record + data records
//!          └─ ColumnMap         → header name → field index
//!               └─ parse_row()  → NewEvent per record, in file order

use chrono::NaiveDate;
use dinger_core::event::NewEvent;

use crate::error::{ImportError, Result};

// ─── Column resolution ───────────────────────────────────────────────────────

/// Field indexes for the required columns, resolved once from the header
/// row. Column order in the file does not matter; extra columns are ignored.
struct ColumnMap {
  batter:         usize,
  batter_id:      usize,
  exit_direction: usize,
  exit_speed:     usize,
  game_date:      usize,
  hang_time:      usize,
  hit_distance:   usize,
  hit_spin_rate:  usize,
  launch_angle:   usize,
  pitcher:        usize,
  pitcher_id:     usize,
  play_outcome:   usize,
  video_link:     usize,
}

impl ColumnMap {
  fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
    let find = |name: &'static str| {
      headers
        .iter()
        .position(|h| h == name)
        .ok_or(ImportError::MissingColumn(name))
    };

    Ok(Self {
      batter:         find("BATTER")?,
      batter_id:      find("BATTER_ID")?,
      exit_direction: find("EXIT_DIRECTION")?,
      exit_speed:     find("EXIT_SPEED")?,
      game_date:      find("GAME_DATE")?,
      hang_time:      find("HANG_TIME")?,
      hit_distance:   find("HIT_DISTANCE")?,
      hit_spin_rate:  find("HIT_SPIN_RATE")?,
      launch_angle:   find("LAUNCH_ANGLE")?,
      pitcher:        find("PITCHER")?,
      pitcher_id:     find("PITCHER_ID")?,
      play_outcome:   find("PLAY_OUTCOME")?,
      video_link:     find("VIDEO_LINK")?,
    })
  }

  fn parse_row(&self, record: &csv::StringRecord, line: usize) -> Result<NewEvent> {
    Ok(NewEvent {
      batter:         text(record, self.batter, "BATTER", line)?,
      batter_id:      integer(record, self.batter_id, "BATTER_ID", line)?,
      pitcher:        text(record, self.pitcher, "PITCHER", line)?,
      pitcher_id:     integer(record, self.pitcher_id, "PITCHER_ID", line)?,
      exit_direction: integer(record, self.exit_direction, "EXIT_DIRECTION", line)?,
      exit_speed:     float(record, self.exit_speed, "EXIT_SPEED", line)?,
      launch_angle:   float(record, self.launch_angle, "LAUNCH_ANGLE", line)?,
      hit_distance:   float(record, self.hit_distance, "HIT_DISTANCE", line)?,
      hang_time:      float(record, self.hang_time, "HANG_TIME", line)?,
      hit_spin_rate:  float(record, self.hit_spin_rate, "HIT_SPIN_RATE", line)?,
      game_date:      date(record, self.game_date, "GAME_DATE", line)?,
      play_outcome:   text(record, self.play_outcome, "PLAY_OUTCOME", line)?,
      video_link:     text(record, self.video_link, "VIDEO_LINK", line)?,
    })
  }
}

// ─── Typed field accessors ───────────────────────────────────────────────────

fn raw<'r>(
  record: &'r csv::StringRecord,
  index:  usize,
  column: &'static str,
  line:   usize,
) -> Result<&'r str> {
  record.get(index).ok_or(ImportError::InvalidField {
    line,
    column,
    message: "missing value".to_owned(),
  })
}

fn text(
  record: &csv::StringRecord,
  index:  usize,
  column: &'static str,
  line:   usize,
) -> Result<String> {
  Ok(raw(record, index, column, line)?.to_owned())
}

fn integer(
  record: &csv::StringRecord,
  index:  usize,
  column: &'static str,
  line:   usize,
) -> Result<i64> {
  let value = raw(record, index, column, line)?;
  value.trim().parse().map_err(|_| ImportError::InvalidField {
    line,
    column,
    message: format!("not an integer: {value:?}"),
  })
}

fn float(
  record: &csv::StringRecord,
  index:  usize,
  column: &'static str,
  line:   usize,
) -> Result<f64> {
  let value = raw(record, index, column, line)?;
  value.trim().parse().map_err(|_| ImportError::InvalidField {
    line,
    column,
    message: format!("not a number: {value:?}"),
  })
}

fn date(
  record: &csv::StringRecord,
  index:  usize,
  column: &'static str,
  line:   usize,
) -> Result<NaiveDate> {
  let value = raw(record, index, column, line)?.trim();
  // ISO first; spreadsheet exports often use month-first.
  NaiveDate::parse_from_str(value, "%Y-%m-%d")
    .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
    .map_err(|_| ImportError::InvalidField {
      line,
      column,
      message: format!("not a date: {value:?}"),
    })
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Read every row of the CSV at `path` into [`NewEvent`]s, preserving file
/// order. Any malformed row fails the whole read; nothing is returned
/// partially.
pub fn read_events(path: impl AsRef<std::path::Path>) -> Result<Vec<NewEvent>> {
  let mut reader = csv::Reader::from_path(path)?;
  let columns = ColumnMap::from_headers(reader.headers()?)?;

  let mut events = Vec::new();
  for (i, record) in reader.records().enumerate() {
    let record = record?;
    // Line numbers are 1-based and the header occupies line 1.
    events.push(columns.parse_row(&record, i + 2)?);
  }
  Ok(events)
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use chrono::NaiveDate;

  use super::*;
  use crate::error::ImportError;

  const HEADER: &str = "BATTER,BATTER_ID,EXIT_DIRECTION,EXIT_SPEED,GAME_DATE,\
HANG_TIME,HIT_DISTANCE,HIT_SPIN_RATE,LAUNCH_ANGLE,PITCHER,PITCHER_ID,\
PLAY_OUTCOME,VIDEO_LINK";

  fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
  }

  fn row(batter: &str, date: &str) -> String {
    format!(
      "{batter},1001,-12,99.4,{date},4.01,245.5,1760.2,18.3,\
Some Pitcher,2002,Single,https://example.com/clip"
    )
  }

  #[test]
  fn reads_rows_in_file_order() {
    let file = write_csv(&format!(
      "{HEADER}\n{}\n{}\n",
      row("Hunter Dozier", "2018-05-24"),
      row("Willy Adames", "05/25/2018"),
    ));

    let events = read_events(file.path()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].batter, "Hunter Dozier");
    assert_eq!(events[0].game_date, NaiveDate::from_ymd_opt(2018, 5, 24).unwrap());
    assert_eq!(events[0].batter_id, 1001);
    assert_eq!(events[0].exit_direction, -12);
    assert_eq!(events[0].exit_speed, 99.4);
    assert_eq!(events[0].launch_angle, 18.3);
    // Month-first fallback format.
    assert_eq!(events[1].batter, "Willy Adames");
    assert_eq!(events[1].game_date, NaiveDate::from_ymd_opt(2018, 5, 25).unwrap());
  }

  #[test]
  fn column_order_does_not_matter() {
    let file = write_csv(
      "VIDEO_LINK,BATTER,BATTER_ID,EXIT_DIRECTION,EXIT_SPEED,GAME_DATE,\
HANG_TIME,HIT_DISTANCE,HIT_SPIN_RATE,LAUNCH_ANGLE,PITCHER,PITCHER_ID,\
PLAY_OUTCOME\n\
https://example.com/x,Reordered Guy,7,3,88.0,2018-06-01,3.5,120.0,1500.0,\
10.0,P,8,Out\n",
    );

    let events = read_events(file.path()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].batter, "Reordered Guy");
    assert_eq!(events[0].video_link, "https://example.com/x");
  }

  #[test]
  fn missing_column_aborts() {
    // No VIDEO_LINK column at all.
    let file = write_csv(
      "BATTER,BATTER_ID,EXIT_DIRECTION,EXIT_SPEED,GAME_DATE,HANG_TIME,\
HIT_DISTANCE,HIT_SPIN_RATE,LAUNCH_ANGLE,PITCHER,PITCHER_ID,PLAY_OUTCOME\n",
    );

    let err = read_events(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::MissingColumn("VIDEO_LINK")));
  }

  #[test]
  fn wrong_type_aborts_whole_import() {
    let file = write_csv(&format!(
      "{HEADER}\n{}\n\
Bad Row,not-a-number,-12,99.4,2018-05-24,4.01,245.5,1760.2,18.3,P,2002,Single,x\n",
      row("Good Row", "2018-05-24"),
    ));

    let err = read_events(file.path()).unwrap_err();
    assert!(matches!(
      err,
      ImportError::InvalidField { line: 3, column: "BATTER_ID", .. }
    ));
  }

  #[test]
  fn unparsable_date_aborts() {
    let file = write_csv(&format!("{HEADER}\n{}\n", row("Guy", "24-05-2018")));
    let err = read_events(file.path()).unwrap_err();
    assert!(matches!(
      err,
      ImportError::InvalidField { column: "GAME_DATE", .. }
    ));
  }

  #[test]
  fn missing_file_is_a_source_error() {
    let err = read_events("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, ImportError::Source(_)));
  }
}
