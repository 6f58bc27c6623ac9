//! Domain types shared by the storage layer, the HTTP server and the probe.

pub mod catalog;
pub mod error;
pub mod types;
