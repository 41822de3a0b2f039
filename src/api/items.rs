use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::error_response;
use crate::domain::{ItemFilter, RentalFilter};
use crate::infrastructure::AppState;
use crate::models::DeliveryOption;
use crate::services::calendar::{AvailabilityCalendar, month_grid};
use crate::services::pricing;

#[derive(Deserialize)]
pub struct ListItemsQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "List catalog items matching the filters")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let filter = ItemFilter {
        query: query.q,
        location: query.location,
        category: query.category,
        condition: query.condition,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let items = state
        .item_repo
        .find_all(filter)
        .await
        .map_err(error_response)?;

    let total = items.len();
    Ok(Json(json!({ "items": items, "total": total })))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    responses(
        (status = 200, description = "The item"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let item = state
        .item_repo
        .find_by_id(&id)
        .await
        .map_err(error_response)?
        .ok_or((
            StatusCode::NOT_FOUND,
            "Item not found or has been removed".to_string(),
        ))?;

    Ok(Json(json!({ "item": item })))
}

#[derive(Deserialize)]
pub struct QuoteQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub delivery: Option<DeliveryOption>,
}

/// Price a prospective range without creating anything. Missing dates
/// yield the zero quote, mirroring the payment summary before a range
/// is chosen.
#[utoipa::path(
    get,
    path = "/api/items/{id}/quote",
    responses(
        (status = 200, description = "Cost breakdown for the prospective booking"),
        (status = 400, description = "Inverted date range"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn quote_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let item = state
        .item_repo
        .find_by_id(&id)
        .await
        .map_err(error_response)?
        .ok_or((
            StatusCode::NOT_FOUND,
            "Item not found or has been removed".to_string(),
        ))?;

    let duration = match (query.start_date, query.end_date) {
        (Some(start), Some(end)) => {
            if end < start {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "end_date is before start_date".to_string(),
                ));
            }
            (end - start).num_days()
        }
        _ => 0,
    };

    let delivery = query.delivery.unwrap_or(DeliveryOption::Pickup);
    let quote = pricing::quote(item.daily_price, duration, delivery, item.replacement_value);

    Ok(Json(json!({
        "item_id": item.id,
        "duration": duration,
        "quote": quote
    })))
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

#[utoipa::path(
    get,
    path = "/api/items/{id}/calendar",
    responses(
        (status = 200, description = "Month grid with per-day availability"),
        (status = 400, description = "Invalid year/month"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn item_calendar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Value>, (StatusCode, String)> {
    if state
        .item_repo
        .find_by_id(&id)
        .await
        .map_err(error_response)?
        .is_none()
    {
        return Err((
            StatusCode::NOT_FOUND,
            "Item not found or has been removed".to_string(),
        ));
    }

    let rentals = state
        .rental_repo
        .find_all(RentalFilter {
            item_id: Some(id.clone()),
            ..Default::default()
        })
        .await
        .map_err(error_response)?;

    let calendar = AvailabilityCalendar::new(Local::now().date_naive(), &rentals);
    let days = month_grid(&calendar, query.year, query.month).ok_or((
        StatusCode::BAD_REQUEST,
        format!("Invalid month {}-{}", query.year, query.month),
    ))?;

    Ok(Json(json!({
        "item_id": id,
        "year": query.year,
        "month": query.month,
        "days": days
    })))
}
