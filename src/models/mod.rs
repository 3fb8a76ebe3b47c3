//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL (`migrations/`).

pub mod reservation;
pub mod room;

pub use reservation::{NewReservation, Reservation, ReservationStatus};
pub use room::{NewRoom, Room};
