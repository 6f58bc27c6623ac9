//! Catalog page served at `/`.
//!
//! The page is a static shell; its script fetches `/api/juegos` once on
//! load and renders the loading, error, empty and populated states.

use axum::response::Html;

/// Embedded catalog page markup and script.
pub const CATALOG_PAGE: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn catalog() -> Html<&'static str> {
    Html(CATALOG_PAGE)
}
