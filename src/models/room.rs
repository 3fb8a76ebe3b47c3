//! Modelo de Room
//!
//! Mapea la tabla `rooms`. Las amenities se guardan como un único string
//! separado por comas y se exponen como lista.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const AMENITY_SEPARATOR: &str = ",";

/// Room principal - mapea exactamente a la tabla rooms
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub room_type: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub image_url: Option<String>,
    pub amenities: Option<String>,
}

impl Room {
    pub fn amenity_list(&self) -> Vec<String> {
        split_amenities(self.amenities.as_deref())
    }

    pub fn can_accommodate(&self, num_guests: i32) -> bool {
        self.max_guests >= num_guests
    }
}

/// Datos para insertar una habitación
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub room_type: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub image_url: Option<String>,
    pub amenities: Vec<String>,
}

/// Unir amenities para almacenamiento
pub fn join_amenities(amenities: &[String]) -> String {
    amenities.join(AMENITY_SEPARATOR)
}

/// Separar el string almacenado; vacío o ausente es una lista vacía
pub fn split_amenities(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(value) if !value.is_empty() => value
            .split(AMENITY_SEPARATOR)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
