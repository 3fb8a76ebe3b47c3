//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("Room cannot accommodate the number of guests")]
    CapacityExceeded { requested: i32, max_guests: i32 },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl AppError {
    /// Código HTTP asociado a cada variante
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidDateFormat
            | AppError::InvalidDateRange
            | AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::CapacityExceeded { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Código estable para los clientes de la API
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InvalidDateFormat => "INVALID_DATE_FORMAT",
            AppError::InvalidDateRange => "INVALID_DATE_RANGE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Database(_) => "DB_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match &self {
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                ("An error occurred while accessing the database".to_string(), None)
            }
            AppError::Validation(e) => {
                warn!("⚠️ Error de validación: {}", e);
                ("The provided data is invalid".to_string(), Some(json!(e)))
            }
            AppError::CapacityExceeded { requested, max_guests } => {
                warn!("⚠️ Capacidad excedida: {} huéspedes, máximo {}", requested, max_guests);
                (
                    self.to_string(),
                    Some(json!({ "requested": requested, "max_guests": max_guests })),
                )
            }
            other => {
                warn!("⚠️ Solicitud rechazada ({}): {}", code, other);
                (other.to_string(), None)
            }
        };

        let body = ErrorResponse {
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
