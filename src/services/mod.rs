//! Servicios del sistema
//!
//! Reglas de negocio independientes de HTTP y de la base de datos.

pub mod booking_rules;

pub use booking_rules::{intervals_overlap, parse_iso_date, StayRange};
