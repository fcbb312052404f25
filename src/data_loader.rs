//! Dataset loading at startup.
//!
//! Opens the SQLite file named by the configuration, checks it, logs what it
//! contains and builds the [`AppState`] the server runs on. Any failure here
//! is fatal: the server must not start against a dataset it cannot read.

use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::logging::log_dataset_stats;
use crate::state::AppState;
use crate::store::ClimateStore;

/// Open the dataset at `path` and create the application state
pub fn load_dataset(path: &Path, config: Config) -> Result<AppState> {
    let store = ClimateStore::open(path)?;

    let stats = store.stats()?;
    log_dataset_stats(&path.display().to_string(), &stats);

    if stats.station_count == 0 {
        warn!("Dataset has no stations; /api/v1.0/stations will be empty");
    }
    if stats.measurement_count == 0 {
        warn!("Dataset has no measurements; list endpoints will be empty");
    }

    info!(
        flatten_stations = config.data.flatten_stations,
        "Dataset ready"
    );

    Ok(AppState::new(config, store))
}
