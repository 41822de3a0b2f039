use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::api::error_response;
use crate::infrastructure::AppState;
use crate::models::BookingDto;
use crate::services::booking;

#[utoipa::path(
    post,
    path = "/api/bookings",
    responses(
        (status = 201, description = "Booking confirmed"),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Dates collide with an existing booking")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<BookingDto>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, String)> {
    let rental = booking::create_booking(
        state.item_repo.as_ref(),
        state.rental_repo.as_ref(),
        payload,
    )
    .await
    .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "rental": rental, "message": "Booking confirmed successfully" })),
    ))
}
