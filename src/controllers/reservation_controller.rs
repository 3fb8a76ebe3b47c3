use std::collections::HashMap;
use std::sync::Arc;

use validator::Validate;

use crate::dto::reservation_dto::{CreateReservationRequest, ReservationResponse};
use crate::models::reservation::NewReservation;
use crate::repositories::{ReservationRepository, RoomRepository};
use crate::services::booking_rules::StayRange;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct ReservationController {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl ReservationController {
    pub fn new(rooms: Arc<dyn RoomRepository>, reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { rooms, reservations }
    }

    pub async fn create(&self, request: CreateReservationRequest) -> AppResult<ReservationResponse> {
        // Validar campos
        let fields = request.require_fields()?;
        let stay = StayRange::parse(&fields.check_in_date, &fields.check_out_date)?;
        request.validate()?;

        // Verificar habitación y capacidad
        let room = self
            .rooms
            .find_by_id(fields.room_id)
            .await?
            .ok_or_else(|| not_found_error("Room"))?;

        if !room.can_accommodate(fields.num_guests) {
            return Err(AppError::CapacityExceeded {
                requested: fields.num_guests,
                max_guests: room.max_guests,
            });
        }

        let total_price = stay.total_price(room.price_per_night);

        // Comprobar solapamiento e insertar de forma atómica
        let reservation = self
            .reservations
            .create_if_available(NewReservation {
                guest_name: fields.guest_name,
                guest_email: fields.guest_email,
                guest_phone: fields.guest_phone,
                room_id: room.id,
                stay,
                num_guests: fields.num_guests,
                total_price,
            })
            .await?;

        Ok(ReservationResponse::from_parts(reservation, Some(room)))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<ReservationResponse> {
        let reservation = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reservation"))?;

        let room = self.rooms.find_by_id(reservation.room_id).await?;
        Ok(ReservationResponse::from_parts(reservation, room))
    }

    pub async fn list(&self) -> AppResult<Vec<ReservationResponse>> {
        let reservations = self.reservations.list_newest_first().await?;

        let mut room_ids: Vec<i64> = reservations.iter().map(|r| r.room_id).collect();
        room_ids.sort_unstable();
        room_ids.dedup();

        let rooms: HashMap<i64, _> = self
            .rooms
            .find_by_ids(&room_ids)
            .await?
            .into_iter()
            .map(|room| (room.id, room))
            .collect();

        Ok(reservations
            .into_iter()
            .map(|reservation| {
                let room = rooms.get(&reservation.room_id).cloned();
                ReservationResponse::from_parts(reservation, room)
            })
            .collect())
    }
}
