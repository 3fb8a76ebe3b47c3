//! Repositorios
//!
//! Interfaces de persistencia inyectadas en el estado de la aplicación.
//! `room_repository` y `reservation_repository` implementan PostgreSQL;
//! `memory_repository` implementa ambas en memoria.

pub mod memory_repository;
pub mod reservation_repository;
pub mod room_repository;

use async_trait::async_trait;

use crate::models::{NewReservation, NewRoom, Reservation, Room};
use crate::services::booking_rules::StayRange;
use crate::utils::errors::AppResult;

pub use memory_repository::InMemoryStore;
pub use reservation_repository::PgReservationRepository;
pub use room_repository::PgRoomRepository;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Todas las habitaciones en orden de catálogo (id ascendente)
    async fn list(&self) -> AppResult<Vec<Room>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Room>>;

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Room>>;

    /// Habitaciones con `max_guests >= num_guests`, en orden de catálogo
    async fn with_capacity_for(&self, num_guests: i32) -> AppResult<Vec<Room>>;

    async fn count(&self) -> AppResult<i64>;

    async fn insert(&self, room: NewRoom) -> AppResult<Room>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Todas las reservas, más recientes primero
    async fn list_newest_first(&self) -> AppResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Reservation>>;

    /// Ids de habitaciones con alguna reserva confirmada que solapa la estancia
    async fn booked_room_ids(&self, stay: &StayRange) -> AppResult<Vec<i64>>;

    /// Comprobar solapamiento e insertar de forma atómica.
    ///
    /// Devuelve `NotFound` si la habitación no existe y `Conflict` si ya hay
    /// una reserva confirmada que solapa.
    async fn create_if_available(&self, reservation: NewReservation) -> AppResult<Reservation>;
}
