//! DTOs de la API
//!
//! Formas de request/response expuestas por HTTP, separadas de los
//! modelos que mapean la base de datos.

pub mod availability_dto;
pub mod reservation_dto;
pub mod room_dto;
