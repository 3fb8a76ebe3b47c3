use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::dto::availability_dto::AvailabilityQuery;
use crate::dto::room_dto::RoomResponse;
use crate::repositories::{ReservationRepository, RoomRepository};
use crate::services::booking_rules::StayRange;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct RoomController {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl RoomController {
    pub fn new(rooms: Arc<dyn RoomRepository>, reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { rooms, reservations }
    }

    pub async fn list(&self) -> AppResult<Vec<RoomResponse>> {
        let rooms = self.rooms.list().await?;
        Ok(rooms.into_iter().map(RoomResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<RoomResponse> {
        let room = self
            .rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Room"))?;

        Ok(RoomResponse::from(room))
    }

    /// Habitaciones con capacidad suficiente y sin reservas confirmadas
    /// que solapen la estancia, en orden de catálogo
    pub async fn availability(&self, query: AvailabilityQuery) -> AppResult<Vec<RoomResponse>> {
        let check_in = query.check_in.as_deref().ok_or(AppError::MissingField("check_in"))?;
        let check_out = query.check_out.as_deref().ok_or(AppError::MissingField("check_out"))?;
        let stay = StayRange::parse(check_in, check_out)?;
        let num_guests = query.guests();

        let candidates = self.rooms.with_capacity_for(num_guests).await?;
        let booked: HashSet<i64> = self.reservations.booked_room_ids(&stay).await?.into_iter().collect();

        let available: Vec<RoomResponse> = candidates
            .into_iter()
            .filter(|room| !booked.contains(&room.id))
            .map(RoomResponse::from)
            .collect();

        debug!(
            "🔍 Disponibilidad {} → {} ({} huéspedes): {} habitaciones libres",
            stay.check_in(),
            stay.check_out(),
            num_guests,
            available.len()
        );

        Ok(available)
    }
}
