//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod juego_repo;

pub use juego_repo::JuegoRepo;
