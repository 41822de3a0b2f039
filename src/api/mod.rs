pub mod bookings;
pub mod health;
pub mod items;
pub mod rentals;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post, put},
};

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Item catalog
        .route("/items", get(items::list_items))
        .route("/items/:id", get(items::get_item))
        .route("/items/:id/quote", get(items::quote_item))
        .route("/items/:id/calendar", get(items::item_calendar))
        // Bookings
        .route("/bookings", post(bookings::create_booking))
        // Rentals
        .route("/rentals", get(rentals::list_rentals))
        .route("/rentals/board", get(rentals::rental_board))
        .route("/rentals/:id", get(rentals::get_rental))
        .route("/rentals/:id/status", put(rentals::update_rental_status))
        .with_state(state)
}

/// Map domain failures onto the handler error tuple.
pub(crate) fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
