use serde::Deserialize;

// Query de disponibilidad: las fechas llegan como texto para poder
// distinguir ausencia de formato inválido
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub num_guests: Option<i32>,
}

impl AvailabilityQuery {
    pub fn guests(&self) -> i32 {
        self.num_guests.unwrap_or(1)
    }
}
