//! Modelo de Reservation
//!
//! Mapea la tabla `reservations`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::booking_rules::StayRange;

/// Estado de la reserva - se guarda en minúsculas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

/// Reservation principal - mapea exactamente a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Reservation {
    pub id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_guests: i32,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Solo las reservas confirmadas bloquean la habitación
    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed.as_str()
    }

    pub fn blocks(&self, room_id: i64, stay: &StayRange) -> bool {
        self.room_id == room_id
            && self.is_confirmed()
            && stay.overlaps(self.check_in_date, self.check_out_date)
    }
}

/// Datos para insertar una reserva confirmada
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_id: i64,
    pub stay: StayRange,
    pub num_guests: i32,
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(room_id: i64, check_in: &str, check_out: &str, status: ReservationStatus) -> Reservation {
        let stay = StayRange::parse(check_in, check_out).unwrap();
        Reservation {
            id: 1,
            guest_name: "Ana".to_string(),
            guest_email: "ana@example.com".to_string(),
            guest_phone: "600000000".to_string(),
            room_id,
            check_in_date: stay.check_in(),
            check_out_date: stay.check_out(),
            num_guests: 2,
            total_price: Decimal::new(500, 0),
            status: status.as_str().to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_blocks_only_confirmed_same_room() {
        let stay = StayRange::parse("2024-01-14", "2024-01-20").unwrap();

        let confirmed = reservation(1, "2024-01-10", "2024-01-15", ReservationStatus::Confirmed);
        assert!(confirmed.blocks(1, &stay));
        assert!(!confirmed.blocks(2, &stay));

        let cancelled = reservation(1, "2024-01-10", "2024-01-15", ReservationStatus::Cancelled);
        assert!(!cancelled.blocks(1, &stay));
    }

    #[test]
    fn test_unknown_status_is_not_confirmed() {
        let mut r = reservation(1, "2024-01-10", "2024-01-15", ReservationStatus::Confirmed);
        r.status = "pending".to_string();
        assert!(!r.is_confirmed());
    }
}
