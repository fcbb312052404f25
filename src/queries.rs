//! The five fixed dataset queries.
//!
//! None of these take request input: every filter boundary is a constant
//! below. List queries return rows in the order they were stored
//! (`ORDER BY rowid`) so repeated calls produce identical output.

use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection};
use serde::Serialize;

/// Last day covered by the dataset.
pub const OBSERVATION_END: (i32, u32, u32) = (2017, 8, 23);

/// Lower bound of the `/start` summary, compared as a literal string.
pub const START_CUTOFF: &str = "2017-08-23";

/// Station whose observations `/tobs` reports.
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// One year before [`OBSERVATION_END`], formatted as `YYYY-MM-DD`.
pub fn year_ago_cutoff() -> String {
    let (year, month, day) = OBSERVATION_END;
    let end = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
    (end - Duration::days(365)).format("%Y-%m-%d").to_string()
}

/// A `(date, prcp)` row.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A `(date, tobs)` row.
#[derive(Debug, Clone, PartialEq)]
pub struct TobsRow {
    pub date: String,
    pub tobs: f64,
}

/// A station row projected to its code column only.
///
/// Serializes as a one-element array, the same shape a database row tuple
/// takes in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRow(pub (String,));

impl StationRow {
    pub fn code(&self) -> &str {
        &self.0 .0
    }
}

/// `MIN`, `MAX` and `AVG` over a set of temperature observations.
///
/// All three are `None` when the set is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Every `(date, prcp)` pair on or after the year-ago cutoff, all stations.
pub fn precipitation(conn: &Connection) -> rusqlite::Result<Vec<PrecipitationRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, prcp FROM measurement
         WHERE date >= ?1
         ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![year_ago_cutoff()], |row| {
        Ok(PrecipitationRow {
            date: row.get(0)?,
            prcp: row.get(1)?,
        })
    })?;
    rows.collect()
}

/// Every station code.
pub fn stations(conn: &Connection) -> rusqlite::Result<Vec<StationRow>> {
    let mut stmt = conn.prepare("SELECT station FROM station ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| Ok(StationRow((row.get(0)?,))))?;
    rows.collect()
}

/// `(date, tobs)` pairs of [`MOST_ACTIVE_STATION`] on or after the year-ago cutoff.
pub fn temperature_observations(conn: &Connection) -> rusqlite::Result<Vec<TobsRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, tobs FROM measurement
         WHERE station = ?1 AND date >= ?2
         ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![MOST_ACTIVE_STATION, year_ago_cutoff()], |row| {
        Ok(TobsRow {
            date: row.get(0)?,
            tobs: row.get(1)?,
        })
    })?;
    rows.collect()
}

/// Temperature summary across all stations from [`START_CUTOFF`] on.
pub fn start_summary(conn: &Connection) -> rusqlite::Result<TemperatureStats> {
    temperature_stats_since(conn, START_CUTOFF)
}

/// Temperature summary across all stations from the year-ago cutoff on.
///
/// Only the lower bound is applied; there is no end date.
pub fn start_end_summary(conn: &Connection) -> rusqlite::Result<TemperatureStats> {
    temperature_stats_since(conn, &year_ago_cutoff())
}

fn temperature_stats_since(conn: &Connection, cutoff: &str) -> rusqlite::Result<TemperatureStats> {
    // Aggregates without GROUP BY always yield exactly one row
    conn.query_row(
        "SELECT MIN(tobs), MAX(tobs), AVG(tobs) FROM measurement WHERE date >= ?1",
        params![cutoff],
        |row| {
            Ok(TemperatureStats {
                min: row.get(0)?,
                max: row.get(1)?,
                avg: row.get(2)?,
            })
        },
    )
}
