//! Route definitions for the `/api/juegos` resource.

use axum::routing::{on, MethodFilter};
use axum::Router;

use crate::handlers::juegos;
use crate::state::AppState;

/// Routes for the catalog endpoint.
///
/// GET is registered through `on` rather than `get` so HEAD is not served
/// implicitly; every method except GET and POST lands in the fallback.
///
/// ```text
/// GET    /api/juegos    -> list
/// POST   /api/juegos    -> create
/// *      /api/juegos    -> method_not_allowed (405)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/juegos",
        on(MethodFilter::GET, juegos::list)
            .post(juegos::create)
            .fallback(juegos::method_not_allowed),
    )
}
