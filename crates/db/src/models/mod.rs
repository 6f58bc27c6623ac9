pub mod juego;
