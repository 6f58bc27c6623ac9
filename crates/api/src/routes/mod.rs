pub mod health;
pub mod juegos;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// /               catalog page (GET)
/// /health         service + database health (GET)
/// /api/juegos     list (GET), create (POST), anything else -> 405
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::page::catalog))
        .merge(health::router())
        .merge(juegos::router())
}
