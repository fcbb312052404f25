//! Index page listing the API routes.

use axum::response::Html;

/// Paths of every data endpoint, in the order the index lists them.
pub const API_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/start",
    "/api/v1.0/start-end",
];

/// Handle GET / requests
pub async fn index_handler() -> Html<String> {
    Html(index_body())
}

fn index_body() -> String {
    format!("Available Routes:<br/>{}", API_ROUTES.join("<br/>"))
}
