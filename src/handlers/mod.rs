//! HTTP request handlers for the hawaii-climate API.
//!
//! Every data endpoint runs one fixed query on the blocking thread pool,
//! maps its rows and answers with JSON.

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod summary;
pub mod tobs;

pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use summary::{start_end_handler, start_handler};
pub use tobs::tobs_handler;

use rusqlite::Connection;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::{ClimateError, Result};
use crate::logging::{generate_request_id, log_request_error};
use crate::queries::TemperatureStats;
use crate::state::AppState;

/// Number of result rows, for request logging.
trait RowCount {
    fn row_count(&self) -> usize;
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> usize {
        self.len()
    }
}

impl RowCount for TemperatureStats {
    fn row_count(&self) -> usize {
        1
    }
}

/// Run `query` against the shared store without blocking the async runtime.
///
/// Storage failures are not retried; they come back as [`ClimateError`]
/// and become a 500 response.
async fn run_query<T, F>(state: &Arc<AppState>, endpoint: &'static str, query: F) -> Result<T>
where
    T: RowCount + Send + 'static,
    F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
{
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        "Processing request"
    );

    let shared = Arc::clone(state);
    let result = tokio::task::spawn_blocking(move || shared.store.with_connection(query))
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Query task failed: {}", e),
        })
        .and_then(|inner| inner);

    match &result {
        Ok(rows) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                row_count = rows.row_count(),
                "Request successful"
            );
        }
        Err(e) => log_request_error(e, endpoint, &request_id),
    }

    result
}
