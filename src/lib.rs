//! # hawaii-climate
//!
//! A small, read-only JSON API over a SQLite climate observation dataset.
//!
//! The dataset holds daily precipitation and temperature readings from a set
//! of Hawaiian weather stations. The server opens it once at startup and
//! answers a fixed set of parameterless queries.
//!
//! ## Architecture
//!
//! - **Store** ([`store`]): read-only SQLite handle, opened and schema-checked once
//! - **Queries** ([`queries`]): five fixed filter/aggregate queries
//! - **Responses** ([`responses`]): rows mapped to their JSON records
//! - **API Layer** ([`handlers`], [`create_router`]): six GET routes

pub mod config;
pub mod data_loader;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod queries;
pub mod responses;
pub mod state;
pub mod store;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use config::Config;
pub use error::{ClimateError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_request_error,
};
pub use state::AppState;
pub use store::{ClimateStore, DatasetStats};

/// Build the application router over shared state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/api/v1.0/precipitation", get(handlers::precipitation_handler))
        .route("/api/v1.0/stations", get(handlers::stations_handler))
        .route("/api/v1.0/tobs", get(handlers::tobs_handler))
        .route("/api/v1.0/start", get(handlers::start_handler))
        .route("/api/v1.0/start-end", get(handlers::start_end_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
