use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::room_dto::RoomResponse;
use crate::models::reservation::Reservation;
use crate::models::room::Room;
use crate::utils::errors::{AppError, AppResult};

// Request para crear una reserva. Todos los campos son opcionales a nivel
// de serde para poder responder "<campo> is required". Las longitudes
// máximas son las de las columnas de `reservations`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(length(max = 100))]
    pub guest_name: Option<String>,

    #[validate(length(max = 100))]
    pub guest_email: Option<String>,

    #[validate(length(max = 20))]
    pub guest_phone: Option<String>,

    pub room_id: Option<i64>,

    pub check_in_date: Option<String>,

    pub check_out_date: Option<String>,

    pub num_guests: Option<i32>,
}

/// Campos requeridos ya presentes
#[derive(Debug, Clone)]
pub struct ReservationFields {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub num_guests: i32,
}

impl CreateReservationRequest {
    /// Comprobar presencia en el orden documentado de la API
    pub fn require_fields(&self) -> AppResult<ReservationFields> {
        Ok(ReservationFields {
            guest_name: required(&self.guest_name, "guest_name")?,
            guest_email: required(&self.guest_email, "guest_email")?,
            guest_phone: required(&self.guest_phone, "guest_phone")?,
            room_id: required(&self.room_id, "room_id")?,
            check_in_date: required(&self.check_in_date, "check_in_date")?,
            check_out_date: required(&self.check_out_date, "check_out_date")?,
            num_guests: required(&self.num_guests, "num_guests")?,
        })
    }
}

fn required<T: Clone>(value: &Option<T>, field: &'static str) -> AppResult<T> {
    value.clone().ok_or(AppError::MissingField(field))
}

// Response de reserva con la habitación anidada
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationResponse {
    pub id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: i64,
    pub room: Option<RoomResponse>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_guests: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ReservationResponse {
    pub fn from_parts(reservation: Reservation, room: Option<Room>) -> Self {
        Self {
            id: reservation.id,
            guest_name: reservation.guest_name,
            guest_email: reservation.guest_email,
            guest_phone: reservation.guest_phone,
            room_id: reservation.room_id,
            room: room.map(RoomResponse::from),
            check_in_date: reservation.check_in_date,
            check_out_date: reservation.check_out_date,
            num_guests: reservation.num_guests,
            total_price: reservation.total_price,
            status: reservation.status,
            created_at: reservation.created_at,
        }
    }
}
