use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::reservation_dto::{CreateReservationRequest, ReservationResponse};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/api/reservations", get(list_reservations).post(create_reservation))
        .route("/api/reservations/:id", get(get_reservation))
}

fn controller(state: &AppState) -> ReservationController {
    ReservationController::new(state.rooms.clone(), state.reservations.clone())
}

async fn create_reservation(
    State(state): State<AppState>,
    request: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let Json(request) = request.map_err(|e| bad_request_error(&e.body_text()))?;
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let response = controller(&state).list().await?;
    Ok(Json(response))
}

async fn get_reservation(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ReservationResponse>, AppError> {
    let Path(id) = id.map_err(|_| not_found_error("Reservation"))?;
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}
