//! Test data generation utilities.
//!
//! Writes small SQLite datasets with the same two tables as the real
//! Hawaii dataset, with known contents.

use rusqlite::{params, Connection, Result};
use std::path::Path;

/// Stations in the generated dataset, in insertion order.
pub const STATIONS: [(&str, &str); 4] = [
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
    ("USC00519281", "WAIHEE 837.5, HI US"),
    ("USC00516128", "MANOA LYON ARBO 785.2, HI US"),
];

/// A measurement row: (station, date, prcp, tobs).
pub type MeasurementRow = (&'static str, &'static str, Option<f64>, f64);

/// Measurements in the generated dataset, in insertion order.
pub const MEASUREMENTS: [MeasurementRow; 10] = [
    ("USC00519397", "2010-01-01", Some(0.08), 65.0),
    ("USC00519281", "2016-08-22", Some(0.4), 74.0),
    ("USC00519281", "2017-01-01", Some(0.0), 65.0),
    ("USC00519281", "2017-01-02", Some(0.1), 75.0),
    ("USC00519397", "2016-08-23", None, 81.0),
    ("USC00513117", "2016-12-25", Some(1.2), 68.0),
    ("USC00516128", "2017-08-23", Some(0.45), 76.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00513117", "2015-05-05", Some(0.0), 71.0),
];

/// Create the `station` and `measurement` tables.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE station (
            id        INTEGER PRIMARY KEY,
            station   TEXT,
            name      TEXT,
            latitude  FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        CREATE TABLE measurement (
            id      INTEGER PRIMARY KEY,
            station TEXT,
            date    TEXT,
            prcp    FLOAT,
            tobs    FLOAT
        );",
    )
}

/// Creates a dataset file with [`STATIONS`] and [`MEASUREMENTS`].
pub fn create_hawaii_dataset(path: &Path) -> Result<()> {
    create_dataset(path, &MEASUREMENTS)
}

/// Creates a dataset file with [`STATIONS`] and the given measurements.
pub fn create_dataset(path: &Path, measurements: &[MeasurementRow]) -> Result<()> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;

    for (code, name) in STATIONS {
        conn.execute(
            "INSERT INTO station (station, name) VALUES (?1, ?2)",
            params![code, name],
        )?;
    }

    for (station, date, prcp, tobs) in measurements {
        conn.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )?;
    }

    Ok(())
}
