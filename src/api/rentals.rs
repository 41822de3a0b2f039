use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::error_response;
use crate::domain::RentalFilter;
use crate::infrastructure::AppState;
use crate::models::RentalStatus;
use crate::services::board;

#[derive(Deserialize)]
pub struct ListRentalsQuery {
    pub status: Option<RentalStatus>,
}

#[utoipa::path(
    get,
    path = "/api/rentals",
    responses(
        (status = 200, description = "List rentals, newest booking first")
    )
)]
pub async fn list_rentals(
    State(state): State<AppState>,
    Query(query): Query<ListRentalsQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let rentals = state
        .rental_repo
        .find_all(RentalFilter {
            status: query.status,
            ..Default::default()
        })
        .await
        .map_err(error_response)?;

    Ok(Json(json!({ "rentals": rentals })))
}

#[utoipa::path(
    get,
    path = "/api/rentals/{id}",
    responses(
        (status = 200, description = "The rental"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let rental = state
        .rental_repo
        .find_by_id(&id)
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Rental not found".to_string()))?;

    Ok(Json(json!({ "rental": rental })))
}

#[derive(Deserialize)]
pub struct BoardQuery {
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/rentals/board",
    responses(
        (status = 200, description = "Rentals partitioned into active, upcoming and past buckets")
    )
)]
pub async fn rental_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let rentals = state
        .rental_repo
        .find_all(RentalFilter::default())
        .await
        .map_err(error_response)?;

    let board = board::board_view(rentals, query.q.as_deref());
    Ok(Json(json!({ "board": board })))
}

#[derive(Deserialize)]
pub struct UpdateStatusPayload {
    pub status: RentalStatus,
}

#[utoipa::path(
    put,
    path = "/api/rentals/{id}/status",
    responses(
        (status = 200, description = "Rental moved to the requested bucket"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn update_rental_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let rental = board::move_rental(state.rental_repo.as_ref(), &id, payload.status)
        .await
        .map_err(error_response)?;

    Ok(Json(
        json!({ "rental": rental, "message": "Rental status updated" }),
    ))
}
