use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::room::Room;

// Response de habitación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub image_url: Option<String>,
    pub amenities: Vec<String>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        let amenities = room.amenity_list();
        Self {
            id: room.id,
            name: room.name,
            room_type: room.room_type,
            description: room.description,
            price_per_night: room.price_per_night,
            max_guests: room.max_guests,
            image_url: room.image_url,
            amenities,
        }
    }
}
