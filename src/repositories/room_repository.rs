use async_trait::async_trait;
use sqlx::PgPool;

use super::RoomRepository;
use crate::models::room::{join_amenities, NewRoom, Room};
use crate::utils::errors::AppResult;

const ROOM_COLUMNS: &str =
    "id, name, room_type, description, price_per_night, max_guests, image_url, amenities";

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn list(&self) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM rooms ORDER BY id",
            ROOM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Room>> {
        let room = sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM rooms WHERE id = $1",
            ROOM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Room>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rooms = sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM rooms WHERE id = ANY($1) ORDER BY id",
            ROOM_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    async fn with_capacity_for(&self, num_guests: i32) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(&format!(
            "SELECT {} FROM rooms WHERE max_guests >= $1 ORDER BY id",
            ROOM_COLUMNS
        ))
        .bind(num_guests)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    async fn count(&self) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn insert(&self, room: NewRoom) -> AppResult<Room> {
        let room = sqlx::query_as::<_, Room>(&format!(
            r#"
            INSERT INTO rooms (name, room_type, description, price_per_night, max_guests, image_url, amenities)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            ROOM_COLUMNS
        ))
        .bind(room.name)
        .bind(room.room_type)
        .bind(room.description)
        .bind(room.price_per_night)
        .bind(room.max_guests)
        .bind(room.image_url)
        .bind(join_amenities(&room.amenities))
        .fetch_one(&self.pool)
        .await?;

        Ok(room)
    }
}
