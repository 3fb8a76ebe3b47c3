//! Backend de reservas de hotel
//!
//! Catálogo de habitaciones, disponibilidad por fechas y reservas sin
//! solapamientos, expuestos como API JSON con Axum.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
