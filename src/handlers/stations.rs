//! Stations endpoint handler.
//!
//! Each entry carries the station row under `"station"`. By default that is
//! the row itself (`["USC00519281"]`); with `data.flatten_stations` set it is
//! the bare code.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::Result;
use crate::queries;
use crate::responses::{map_stations, StationEntry};
use crate::state::AppState;

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationEntry>>> {
    let rows = super::run_query(&state, "/api/v1.0/stations", queries::stations).await?;
    Ok(Json(map_stations(rows, state.config.data.flatten_stations)))
}
