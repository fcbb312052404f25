//! JSON shapes returned by the API.
//!
//! Each query row becomes one record with fixed field names. The summary
//! endpoints wrap their single record in a one-element list.

use serde::Serialize;

use crate::queries::{PrecipitationRow, StationRow, TemperatureStats, TobsRow};

/// `{"date": ..., "prcp": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationEntry {
    pub date: String,
    pub prcp: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationEntry {
    fn from(row: PrecipitationRow) -> Self {
        Self {
            date: row.date,
            prcp: row.prcp,
        }
    }
}

/// The value under `"station"`: the whole row, or just its code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StationValue {
    Record(StationRow),
    Code(String),
}

/// `{"station": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationEntry {
    pub station: StationValue,
}

impl StationEntry {
    pub fn from_row(row: StationRow, flatten: bool) -> Self {
        let station = if flatten {
            let StationRow((code,)) = row;
            StationValue::Code(code)
        } else {
            StationValue::Record(row)
        };
        Self { station }
    }
}

/// `{"date": ..., "tobs": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TobsEntry {
    pub date: String,
    pub tobs: f64,
}

impl From<TobsRow> for TobsEntry {
    fn from(row: TobsRow) -> Self {
        Self {
            date: row.date,
            tobs: row.tobs,
        }
    }
}

/// `{"TMIN": ..., "TMAX": ..., "TAVG": ...}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
}

impl From<TemperatureStats> for TemperatureSummary {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            tmin: stats.min,
            tmax: stats.max,
            tavg: stats.avg,
        }
    }
}

/// Map every row of a list query.
pub fn map_rows<R, E: From<R>>(rows: Vec<R>) -> Vec<E> {
    rows.into_iter().map(E::from).collect()
}

/// Map the station rows, flattening each to its code if asked.
pub fn map_stations(rows: Vec<StationRow>, flatten: bool) -> Vec<StationEntry> {
    rows.into_iter()
        .map(|row| StationEntry::from_row(row, flatten))
        .collect()
}

/// Wrap an aggregate in the single-element list the summary endpoints return.
pub fn map_summary(stats: TemperatureStats) -> Vec<TemperatureSummary> {
    vec![stats.into()]
}
