//! Almacenamiento en memoria
//!
//! Implementa `RoomRepository` y `ReservationRepository` sobre un único
//! `RwLock`. Se usa en desarrollo sin `DATABASE_URL` y como doble de pruebas.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{ReservationRepository, RoomRepository};
use crate::models::reservation::{NewReservation, Reservation, ReservationStatus};
use crate::models::room::{join_amenities, NewRoom, Room};
use crate::services::booking_rules::StayRange;
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Debug, Default)]
struct StoreData {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    last_room_id: i64,
    last_reservation_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<StoreData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Soporte de pruebas: insertar una reserva tal cual (p. ej. cancelada).
    ///
    /// No comprueba solapamientos ni que la habitación exista; las reservas
    /// de la API pasan siempre por `create_if_available`. El id se reasigna
    /// para mantener la secuencia.
    #[doc(hidden)]
    pub async fn insert_reservation_unchecked(&self, mut reservation: Reservation) -> Reservation {
        let mut data = self.data.write().await;
        data.last_reservation_id += 1;
        reservation.id = data.last_reservation_id;
        data.reservations.push(reservation.clone());
        reservation
    }

    /// Soporte de pruebas: número de reservas guardadas, de cualquier estado
    #[doc(hidden)]
    pub async fn reservation_count(&self) -> usize {
        self.data.read().await.reservations.len()
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<Room>> {
        Ok(self.data.read().await.rooms.clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Room>> {
        let data = self.data.read().await;
        Ok(data.rooms.iter().find(|room| room.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Room>> {
        let data = self.data.read().await;
        Ok(data
            .rooms
            .iter()
            .filter(|room| ids.contains(&room.id))
            .cloned()
            .collect())
    }

    async fn with_capacity_for(&self, num_guests: i32) -> AppResult<Vec<Room>> {
        let data = self.data.read().await;
        Ok(data
            .rooms
            .iter()
            .filter(|room| room.can_accommodate(num_guests))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.data.read().await.rooms.len() as i64)
    }

    async fn insert(&self, room: NewRoom) -> AppResult<Room> {
        let mut data = self.data.write().await;
        data.last_room_id += 1;

        let room = Room {
            id: data.last_room_id,
            name: room.name,
            room_type: room.room_type,
            description: room.description,
            price_per_night: room.price_per_night,
            max_guests: room.max_guests,
            image_url: room.image_url,
            amenities: Some(join_amenities(&room.amenities)),
        };

        data.rooms.push(room.clone());
        Ok(room)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn list_newest_first(&self) -> AppResult<Vec<Reservation>> {
        let mut reservations = self.data.read().await.reservations.clone();
        reservations.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(reservations)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Reservation>> {
        let data = self.data.read().await;
        Ok(data.reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn booked_room_ids(&self, stay: &StayRange) -> AppResult<Vec<i64>> {
        let data = self.data.read().await;
        let mut room_ids: Vec<i64> = data
            .reservations
            .iter()
            .filter(|r| r.blocks(r.room_id, stay))
            .map(|r| r.room_id)
            .collect();
        room_ids.sort_unstable();
        room_ids.dedup();
        Ok(room_ids)
    }

    async fn create_if_available(&self, reservation: NewReservation) -> AppResult<Reservation> {
        // Comprobación e inserción bajo el mismo lock de escritura
        let mut data = self.data.write().await;

        if !data.rooms.iter().any(|room| room.id == reservation.room_id) {
            return Err(not_found_error("Room"));
        }

        if let Some(existing) = data
            .reservations
            .iter()
            .find(|r| r.blocks(reservation.room_id, &reservation.stay))
        {
            debug!(
                "🔒 Habitación {} ocupada por la reserva {}",
                reservation.room_id, existing.id
            );
            return Err(AppError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        data.last_reservation_id += 1;
        let created = Reservation {
            id: data.last_reservation_id,
            guest_name: reservation.guest_name,
            guest_email: reservation.guest_email,
            guest_phone: reservation.guest_phone,
            room_id: reservation.room_id,
            check_in_date: reservation.stay.check_in(),
            check_out_date: reservation.stay.check_out(),
            num_guests: reservation.num_guests,
            total_price: reservation.total_price,
            status: ReservationStatus::Confirmed.as_str().to_string(),
            created_at: Utc::now(),
        };

        data.reservations.push(created.clone());
        info!("✅ Reserva {} creada para la habitación {}", created.id, created.room_id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn new_room(name: &str, max_guests: i32) -> NewRoom {
        NewRoom {
            name: name.to_string(),
            room_type: "Standard".to_string(),
            description: "Test room".to_string(),
            price_per_night: Decimal::new(100, 0),
            max_guests,
            image_url: None,
            amenities: vec!["WiFi".to_string()],
        }
    }

    fn new_reservation(room_id: i64, check_in: &str, check_out: &str) -> NewReservation {
        let stay = StayRange::parse(check_in, check_out).unwrap();
        NewReservation {
            guest_name: "Ana".to_string(),
            guest_email: "ana@example.com".to_string(),
            guest_phone: "600000000".to_string(),
            room_id,
            stay,
            num_guests: 1,
            total_price: stay.total_price(Decimal::new(100, 0)),
        }
    }

    #[tokio::test]
    async fn test_rooms_keep_catalog_order() {
        let store = InMemoryStore::new();
        store.insert(new_room("A", 2)).await.unwrap();
        store.insert(new_room("B", 4)).await.unwrap();
        store.insert(new_room("C", 1)).await.unwrap();

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let big: Vec<String> = store
            .with_capacity_for(2)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(big, vec!["A", "B"]);
        assert_eq!(RoomRepository::count(&store).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_if_available_rejects_overlap() {
        let store = InMemoryStore::new();
        let room = store.insert(new_room("A", 2)).await.unwrap();

        store
            .create_if_available(new_reservation(room.id, "2024-01-10", "2024-01-15"))
            .await
            .unwrap();

        let conflict = store
            .create_if_available(new_reservation(room.id, "2024-01-14", "2024-01-20"))
            .await;
        assert!(matches!(conflict, Err(AppError::Conflict(_))));

        // el día de salida queda libre
        store
            .create_if_available(new_reservation(room.id, "2024-01-15", "2024-01-20"))
            .await
            .unwrap();

        assert_eq!(store.reservation_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_if_available_unknown_room() {
        let store = InMemoryStore::new();
        let result = store
            .create_if_available(new_reservation(42, "2024-01-10", "2024-01-15"))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cancelled_reservations_do_not_block() {
        let store = InMemoryStore::new();
        let room = store.insert(new_room("A", 2)).await.unwrap();

        let mut cancelled = store
            .create_if_available(new_reservation(room.id, "2024-01-10", "2024-01-15"))
            .await
            .unwrap();
        // sustituir por una copia cancelada
        store.data.write().await.reservations.clear();
        cancelled.status = ReservationStatus::Cancelled.as_str().to_string();
        store.insert_reservation_unchecked(cancelled).await;

        let stay = StayRange::parse("2024-01-12", "2024-01-13").unwrap();
        assert!(store.booked_room_ids(&stay).await.unwrap().is_empty());

        store
            .create_if_available(new_reservation(room.id, "2024-01-12", "2024-01-13"))
            .await
            .unwrap();
        assert_eq!(store.booked_room_ids(&stay).await.unwrap(), vec![room.id]);
    }

    #[tokio::test]
    async fn test_unchecked_insert_keeps_id_sequence() {
        let store = InMemoryStore::new();
        let room = store.insert(new_room("A", 2)).await.unwrap();

        let first = store
            .create_if_available(new_reservation(room.id, "2024-01-10", "2024-01-15"))
            .await
            .unwrap();

        let mut copy = first.clone();
        copy.id = 99;
        let inserted = store.insert_reservation_unchecked(copy).await;
        assert_eq!(inserted.id, first.id + 1);
        assert_eq!(store.reservation_count().await, 2);

        // la reserva confirmada insertada sigue bloqueando la habitación
        let conflict = store
            .create_if_available(new_reservation(room.id, "2024-01-11", "2024-01-12"))
            .await;
        assert!(matches!(conflict, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_concurrent_overlapping_requests_book_once() {
        let store = InMemoryStore::new();
        let room_id = store.insert(new_room("A", 2)).await.unwrap().id;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_if_available(new_reservation(room_id, "2024-03-01", "2024-03-05"))
                    .await
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.reservation_count().await, 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryStore::new();
        let room = store.insert(new_room("A", 2)).await.unwrap();

        store
            .create_if_available(new_reservation(room.id, "2024-01-01", "2024-01-02"))
            .await
            .unwrap();
        store
            .create_if_available(new_reservation(room.id, "2024-01-05", "2024-01-06"))
            .await
            .unwrap();

        let ids: Vec<i64> = store
            .list_newest_first()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
