//! Reglas de reserva
//!
//! Lógica pura de fechas y precios: parseo de fechas ISO, rangos de estancia
//! semiabiertos `[check_in, check_out)`, detección de solapamientos y cálculo
//! del precio total.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::utils::errors::{AppError, AppResult};

/// Formato de fecha aceptado por la API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsear una fecha `YYYY-MM-DD`
pub fn parse_iso_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| AppError::InvalidDateFormat)
}

/// Estancia validada: `check_out` siempre es posterior a `check_in`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<Self> {
        if check_out <= check_in {
            return Err(AppError::InvalidDateRange);
        }
        Ok(Self { check_in, check_out })
    }

    /// Parsear ambas fechas antes de comprobar el orden, así un formato
    /// inválido siempre gana sobre un rango inválido
    pub fn parse(check_in: &str, check_out: &str) -> AppResult<Self> {
        let check_in = parse_iso_date(check_in)?;
        let check_out = parse_iso_date(check_out)?;
        Self::new(check_in, check_out)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Número de noches de la estancia (siempre >= 1)
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Solapamiento semiabierto con un intervalo existente
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        intervals_overlap(check_in, check_out, self.check_in, self.check_out)
    }

    /// Precio total = noches × precio por noche
    pub fn total_price(&self, price_per_night: Decimal) -> Decimal {
        Decimal::from(self.nights()) * price_per_night
    }
}

/// `[a_start, a_end)` y `[b_start, b_end)` se solapan si `a_start < b_end && b_start < a_end`
pub fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}
