//! Precipitation endpoint handler.
//!
//! Returns every `(date, prcp)` reading from the last year of data, across
//! all stations. Missing precipitation values are reported as `null`.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::Result;
use crate::queries;
use crate::responses::{map_rows, PrecipitationEntry};
use crate::state::AppState;

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationEntry>>> {
    let rows = super::run_query(&state, "/api/v1.0/precipitation", queries::precipitation).await?;
    Ok(Json(map_rows(rows)))
}
