//! Catalog health report served at `/health`.
//!
//! Reachability is judged by counting the `juegos` table rather than by a
//! bare `SELECT 1`, so a missing table or failed migration shows up here.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tienda_db::repositories::JuegoRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    /// `"ok"` when the catalog table answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub catalog_reachable: bool,
    /// Number of games in the catalog; absent when the table is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juego_count: Option<i64>,
}

impl CatalogHealth {
    fn from_count(count: Option<i64>) -> Self {
        Self {
            status: if count.is_some() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            catalog_reachable: count.is_some(),
            juego_count: count,
        }
    }
}

async fn catalog_health(State(state): State<AppState>) -> Json<CatalogHealth> {
    let count = match JuegoRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Catalog table unreachable");
            None
        }
    };
    Json(CatalogHealth::from_count(count))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
