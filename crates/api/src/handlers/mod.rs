pub mod juegos;
pub mod page;
