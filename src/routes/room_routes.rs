use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::room_controller::RoomController;
use crate::dto::availability_dto::AvailabilityQuery;
use crate::dto::room_dto::RoomResponse;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub fn create_room_router() -> Router<AppState> {
    Router::new()
        .route("/api/rooms", get(list_rooms))
        .route("/api/rooms/:id", get(get_room))
        .route("/api/availability", get(check_availability))
}

fn controller(state: &AppState) -> RoomController {
    RoomController::new(state.rooms.clone(), state.reservations.clone())
}

async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<RoomResponse>>, AppError> {
    let response = controller(&state).list().await?;
    Ok(Json(response))
}

async fn get_room(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RoomResponse>, AppError> {
    // un id no numérico no puede existir
    let Path(id) = id.map_err(|_| not_found_error("Room"))?;
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn check_availability(
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<Vec<RoomResponse>>, AppError> {
    let Query(query) = query.map_err(|e| bad_request_error(&e.body_text()))?;
    let response = controller(&state).availability(query).await?;
    Ok(Json(response))
}
