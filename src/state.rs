//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    InMemoryStore, PgReservationRepository, PgRoomRepository, ReservationRepository,
    RoomRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub rooms: Arc<dyn RoomRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        rooms: Arc<dyn RoomRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            config,
            rooms,
            reservations,
        }
    }

    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::new(
            config,
            Arc::new(PgRoomRepository::new(pool.clone())),
            Arc::new(PgReservationRepository::new(pool)),
        )
    }

    /// Estado respaldado por un almacenamiento en memoria compartido
    pub fn with_store(store: InMemoryStore, config: EnvironmentConfig) -> Self {
        Self::new(config, Arc::new(store.clone()), Arc::new(store))
    }
}
