//! Handlers for the `/api/juegos` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tienda_db::models::juego::{CreateJuego, Juego};
use tienda_db::repositories::JuegoRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Methods served by `/api/juegos`, as advertised in the `Allow` header.
pub const ALLOWED_METHODS: &str = "GET, POST";

/// Body returned for any method other than GET or POST.
#[derive(Debug, Serialize)]
pub struct MethodNotAllowed {
    pub message: &'static str,
}

/// GET /api/juegos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Juego>>> {
    let juegos = JuegoRepo::list(&state.pool).await?;
    tracing::debug!(count = juegos.len(), "Listed juegos");
    Ok(Json(juegos))
}

/// POST /api/juegos
///
/// The body is decoded and validated before the database is touched; a
/// missing or mistyped field yields 400 without a storage round-trip.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateJuego>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Juego>)> {
    let Json(input) = payload?;
    input.validate()?;

    let juego = JuegoRepo::create(&state.pool, &input).await?;
    tracing::info!(juego_id = juego.juego_id, nombre = %juego.nombre, "Created juego");
    Ok((StatusCode::CREATED, Json(juego)))
}

/// Any other method on /api/juegos.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        Json(MethodNotAllowed {
            message: "Method not allowed",
        }),
    )
}
