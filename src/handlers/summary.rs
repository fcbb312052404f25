//! Temperature summary endpoint handlers.
//!
//! Despite their names, neither endpoint reads a start or end date from the
//! request. `/start` summarizes everything from 2017-08-23 on and
//! `/start-end` everything from 2016-08-23 on, with no upper bound. Both
//! answer with a one-element list, even when no measurement matches.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::Result;
use crate::queries;
use crate::responses::{map_summary, TemperatureSummary};
use crate::state::AppState;

/// Handle GET /api/v1.0/start requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureSummary>>> {
    let stats = super::run_query(&state, "/api/v1.0/start", queries::start_summary).await?;
    Ok(Json(map_summary(stats)))
}

/// Handle GET /api/v1.0/start-end requests
pub async fn start_end_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureSummary>>> {
    let stats =
        super::run_query(&state, "/api/v1.0/start-end", queries::start_end_summary).await?;
    Ok(Json(map_summary(stats)))
}
