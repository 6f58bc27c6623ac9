//! Catalog item (`juegos`) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tienda_core::catalog::validate_new_juego;
use tienda_core::error::CoreError;
use tienda_core::types::{DbId, Timestamp};

/// A row from the `juegos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Juego {
    pub juego_id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Stored as `NUMERIC(10,2)`, read back as `DOUBLE PRECISION`.
    pub precio: f64,
    pub stock: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new catalog item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJuego {
    pub nombre: String,
    pub precio: f64,
    pub stock: i32,
    pub descripcion: Option<String>,
}

impl CreateJuego {
    /// Check field ranges and lengths before the row is sent to the database.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_new_juego(
            &self.nombre,
            self.descripcion.as_deref(),
            self.precio,
            self.stock,
        )
    }
}
