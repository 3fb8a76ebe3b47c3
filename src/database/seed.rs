//! Datos de ejemplo
//!
//! Carga las cinco habitaciones de muestra cuando el catálogo está vacío.

use rust_decimal::Decimal;
use tracing::info;

use crate::models::room::NewRoom;
use crate::repositories::RoomRepository;
use crate::utils::errors::AppResult;

fn room(
    name: &str,
    room_type: &str,
    description: &str,
    price_per_night: i64,
    max_guests: i32,
    image_url: &str,
    amenities: &[&str],
) -> NewRoom {
    NewRoom {
        name: name.to_string(),
        room_type: room_type.to_string(),
        description: description.to_string(),
        price_per_night: Decimal::from(price_per_night),
        max_guests,
        image_url: Some(image_url.to_string()),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

/// Catálogo de habitaciones de muestra
pub fn sample_rooms() -> Vec<NewRoom> {
    vec![
        room(
            "Deluxe Ocean View",
            "Deluxe",
            "Spacious room with stunning ocean views, king-size bed, and luxury amenities.",
            250,
            2,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
            &["WiFi", "Air Conditioning", "Mini Bar", "Balcony", "Room Service"],
        ),
        room(
            "Standard Garden View",
            "Standard",
            "Comfortable room with garden views, perfect for budget-conscious travelers.",
            120,
            2,
            "https://images.unsplash.com/photo-1611892440504-42a792e24d32?w=800",
            &["WiFi", "Air Conditioning", "TV", "Work Desk"],
        ),
        room(
            "Family Suite",
            "Suite",
            "Large suite with separate living area, perfect for families with children.",
            350,
            4,
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800",
            &["WiFi", "Air Conditioning", "Kitchenette", "Sofa Bed", "Two Bedrooms"],
        ),
        room(
            "Single Room",
            "Standard",
            "Cozy single room with all essential amenities for solo travelers.",
            80,
            1,
            "https://images.unsplash.com/photo-1590490362328-cd4f789f6fd8?w=800",
            &["WiFi", "Air Conditioning", "TV", "Work Desk"],
        ),
        room(
            "Honeymoon Suite",
            "Luxury",
            "Romantic suite with jacuzzi, champagne service, and panoramic views.",
            450,
            2,
            "https://images.unsplash.com/photo-1590490362328-cd4f789f6fd8?w=800",
            &["WiFi", "Air Conditioning", "Jacuzzi", "Champagne Service", "Balcony", "Room Service"],
        ),
    ]
}

/// Insertar las habitaciones de muestra si no hay ninguna.
/// Devuelve cuántas se insertaron.
pub async fn seed_sample_rooms(rooms: &dyn RoomRepository) -> AppResult<usize> {
    if rooms.count().await? > 0 {
        return Ok(0);
    }

    let samples = sample_rooms();
    let total = samples.len();
    for sample in samples {
        rooms.insert(sample).await?;
    }

    info!("🛏️ {} habitaciones de muestra añadidas", total);
    Ok(total)
}
