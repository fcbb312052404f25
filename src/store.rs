//! Read-only access to the SQLite climate dataset.
//!
//! The dataset holds two tables, `station` and `measurement`, populated by
//! some external process. This module opens it once, checks that the columns
//! the queries rely on are present, and hands out the connection to the
//! query layer.

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ClimateError, Result};

/// Tables and the columns each query touches.
const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("station", &["station"]),
    ("measurement", &["station", "date", "prcp", "tobs"]),
];

/// Summary figures about the loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub station_count: usize,
    pub measurement_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

/// Process-lifetime handle to the dataset.
///
/// `rusqlite::Connection` is `Send` but not `Sync`, so it sits behind a
/// mutex; every request takes the lock for the duration of one query.
#[derive(Debug)]
pub struct ClimateStore {
    conn: Mutex<Connection>,
}

impl ClimateStore {
    /// Open the dataset at `path` read-only and verify its schema.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dataset not found: {}", path.display()),
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("Opened dataset: {}", path.display());

        Self::from_connection(conn)
    }

    /// Wrap an already-open connection, e.g. an in-memory fixture.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        validate_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock();
        Ok(f(&*conn)?)
    }

    /// Count rows and find the observation date range.
    pub fn stats(&self) -> Result<DatasetStats> {
        self.with_connection(|conn| {
            let station_count: i64 =
                conn.query_row("SELECT COUNT(*) FROM station", [], |row| row.get(0))?;
            let (measurement_count, first_date, last_date): (i64, Option<String>, Option<String>) =
                conn.query_row(
                    "SELECT COUNT(*), MIN(date), MAX(date) FROM measurement",
                    [],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )?;

            Ok(DatasetStats {
                station_count: station_count as usize,
                measurement_count: measurement_count as usize,
                first_date,
                last_date,
            })
        })
    }
}

/// Check that every table and column in [`REQUIRED_SCHEMA`] exists.
fn validate_schema(conn: &Connection) -> Result<()> {
    for (table, columns) in REQUIRED_SCHEMA {
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
        let present = stmt
            .query_map([*table], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if present.is_empty() {
            return Err(ClimateError::Schema {
                message: format!("table {} not found", table),
            });
        }

        for column in *columns {
            if !present.iter().any(|name| name.eq_ignore_ascii_case(column)) {
                return Err(ClimateError::Schema {
                    message: format!("table {} has no column {}", table, column),
                });
            }
        }

        debug!(table = *table, columns = ?present, "Schema check passed");
    }

    Ok(())
}
