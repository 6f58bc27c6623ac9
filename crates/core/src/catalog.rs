//! Catalog item constants and input validators.
//!
//! Checks run before an insert ever reaches the database, so a malformed
//! item is rejected with a [`CoreError::Validation`] instead of surfacing as
//! a storage error.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length (in characters) of a game name.
pub const MAX_NOMBRE_LEN: usize = 200;

/// Maximum length (in characters) of a game description.
pub const MAX_DESCRIPCION_LEN: usize = 2_000;

/// Largest price representable by the `NUMERIC(10,2)` column.
pub const MAX_PRECIO: f64 = 99_999_999.99;

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate a game name: non-blank and within [`MAX_NOMBRE_LEN`].
pub fn validate_nombre(nombre: &str) -> Result<(), CoreError> {
    if nombre.trim().is_empty() {
        return Err(CoreError::Validation("nombre must not be empty".into()));
    }
    let len = nombre.chars().count();
    if len > MAX_NOMBRE_LEN {
        return Err(CoreError::Validation(format!(
            "nombre must be at most {MAX_NOMBRE_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate an optional description against [`MAX_DESCRIPCION_LEN`].
pub fn validate_descripcion(descripcion: Option<&str>) -> Result<(), CoreError> {
    let Some(text) = descripcion else {
        return Ok(());
    };
    let len = text.chars().count();
    if len > MAX_DESCRIPCION_LEN {
        return Err(CoreError::Validation(format!(
            "descripcion must be at most {MAX_DESCRIPCION_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a price: finite, non-negative and no larger than [`MAX_PRECIO`].
pub fn validate_precio(precio: f64) -> Result<(), CoreError> {
    if !precio.is_finite() {
        return Err(CoreError::Validation("precio must be a finite number".into()));
    }
    if precio < 0.0 {
        return Err(CoreError::Validation(format!(
            "precio must be non-negative, got {precio}"
        )));
    }
    if precio > MAX_PRECIO {
        return Err(CoreError::Validation(format!(
            "precio must be at most {MAX_PRECIO}, got {precio}"
        )));
    }
    Ok(())
}

/// Validate a stock quantity: non-negative.
pub fn validate_stock(stock: i32) -> Result<(), CoreError> {
    if stock < 0 {
        return Err(CoreError::Validation(format!(
            "stock must be non-negative, got {stock}"
        )));
    }
    Ok(())
}

/// Validate every field of a new catalog item, stopping at the first failure.
pub fn validate_new_juego(
    nombre: &str,
    descripcion: Option<&str>,
    precio: f64,
    stock: i32,
) -> Result<(), CoreError> {
    validate_nombre(nombre)?;
    validate_descripcion(descripcion)?;
    validate_precio(precio)?;
    validate_stock(stock)
}
