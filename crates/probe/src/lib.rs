//! Manual database connectivity probe.
//!
//! Opens a pool, lists the catalog once, and always closes the pool before
//! returning, whether the query succeeded or not.

use tienda_db::models::juego::Juego;
use tienda_db::repositories::JuegoRepo;
use tienda_db::DbPool;

/// Run one catalog listing on `pool`, then close it.
///
/// The pool is consumed: it is closed on both the success and the error
/// path, so no connection outlives the probe.
pub async fn check(pool: DbPool) -> Result<Vec<Juego>, sqlx::Error> {
    let result = JuegoRepo::list(&pool).await;
    pool.close().await;
    result
}

/// Connect to `database_url` and run [`check`].
pub async fn check_url(database_url: &str) -> Result<Vec<Juego>, sqlx::Error> {
    let pool = tienda_db::create_pool(database_url, 1).await?;
    check(pool).await
}
