//! Repository for the `juegos` table.

use sqlx::PgPool;

use crate::models::juego::{CreateJuego, Juego};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "juego_id, nombre, descripcion, precio::double precision AS precio, stock, created_at";

/// Provides list, count and insert operations for catalog items.
pub struct JuegoRepo;

impl JuegoRepo {
    /// Insert a new catalog item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateJuego) -> Result<Juego, sqlx::Error> {
        let query = format!(
            "INSERT INTO juegos (nombre, descripcion, precio, stock)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Juego>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.precio)
            .bind(input.stock)
            .fetch_one(pool)
            .await
    }

    /// List every catalog item, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Juego>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM juegos ORDER BY created_at, juego_id");
        sqlx::query_as::<_, Juego>(&query).fetch_all(pool).await
    }

    /// Count the rows in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM juegos")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
