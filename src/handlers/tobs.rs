//! Temperature observations endpoint handler.
//!
//! Returns the last year of `(date, tobs)` readings for the most active
//! station, USC00519281.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::Result;
use crate::queries;
use crate::responses::{map_rows, TobsEntry};
use crate::state::AppState;

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<TobsEntry>>> {
    let rows =
        super::run_query(&state, "/api/v1.0/tobs", queries::temperature_observations).await?;
    Ok(Json(map_rows(rows)))
}
