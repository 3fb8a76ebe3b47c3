use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info};

use super::ReservationRepository;
use crate::models::reservation::{NewReservation, Reservation, ReservationStatus};
use crate::services::booking_rules::StayRange;
use crate::utils::errors::{not_found_error, AppError, AppResult};

const RESERVATION_COLUMNS: &str = "id, guest_name, guest_email, guest_phone, room_id, \
     check_in_date, check_out_date, num_guests, total_price, status, created_at";

pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn list_newest_first(&self) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {} FROM reservations ORDER BY created_at DESC, id DESC",
            RESERVATION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {} FROM reservations WHERE id = $1",
            RESERVATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    async fn booked_room_ids(&self, stay: &StayRange) -> AppResult<Vec<i64>> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT room_id FROM reservations
            WHERE status = $1
            AND check_in_date < $2
            AND check_out_date > $3
            "#,
        )
        .bind(ReservationStatus::Confirmed.as_str())
        .bind(stay.check_out())
        .bind(stay.check_in())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(room_id,)| room_id).collect())
    }

    async fn create_if_available(&self, reservation: NewReservation) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await?;

        // Bloquear la fila de la habitación serializa las reservas concurrentes
        let locked: Option<(i64,)> = sqlx::query_as("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(reservation.room_id)
            .fetch_optional(&mut *tx)
            .await?;

        if locked.is_none() {
            return Err(not_found_error("Room"));
        }

        let existing: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id FROM reservations
            WHERE room_id = $1
            AND status = $2
            AND check_in_date < $3
            AND check_out_date > $4
            LIMIT 1
            "#,
        )
        .bind(reservation.room_id)
        .bind(ReservationStatus::Confirmed.as_str())
        .bind(reservation.stay.check_out())
        .bind(reservation.stay.check_in())
        .fetch_optional(&mut *tx)
        .await?;

        if let Some((existing_id,)) = existing {
            debug!(
                "🔒 Habitación {} ocupada por la reserva {}",
                reservation.room_id, existing_id
            );
            return Err(AppError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        let created = sqlx::query_as::<_, Reservation>(&format!(
            r#"
            INSERT INTO reservations (guest_name, guest_email, guest_phone, room_id, check_in_date, check_out_date, num_guests, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            RESERVATION_COLUMNS
        ))
        .bind(reservation.guest_name)
        .bind(reservation.guest_email)
        .bind(reservation.guest_phone)
        .bind(reservation.room_id)
        .bind(reservation.stay.check_in())
        .bind(reservation.stay.check_out())
        .bind(reservation.num_guests)
        .bind(reservation.total_price)
        .bind(ReservationStatus::Confirmed.as_str())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("✅ Reserva {} creada para la habitación {}", created.id, created.room_id);
        Ok(created)
    }
}
