use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Duration, Local};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use rentkart::api;
use rentkart::infrastructure::AppState;
use rentkart::seed;
use rentkart::server;

// Helper to create a seeded test state
async fn setup_test_state() -> AppState {
    let state = AppState::new();
    seed::seed_demo_data(&state)
        .await
        .expect("Failed to seed demo data");
    state
}

fn test_app(state: AppState) -> Router {
    api::api_router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check_through_full_router() {
    // the assembled server router nests everything under /api
    let app = server::build_router(setup_test_state().await, &[]);

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "rentkart");
}

#[tokio::test]
async fn test_list_items_returns_seeded_catalog() {
    let app = test_app(setup_test_state().await);

    let (status, body) = get_json(&app, "/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 8);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], "item1");
    assert_eq!(items[0]["condition"], "Like New");
}

#[tokio::test]
async fn test_list_items_filters() {
    let app = test_app(setup_test_state().await);

    let (status, body) = get_json(&app, "/items?category=Electronics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);

    let (_, body) = get_json(&app, "/items?q=camera").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["id"], "item2");

    let (_, body) = get_json(&app, "/items?location=whitefield").await;
    assert_eq!(body["total"], 1);

    let (_, body) = get_json(&app, "/items?min_price=500&max_price=800").await;
    assert_eq!(body["total"], 3); // camera 500, drone 800, console 600

    let (_, body) = get_json(&app, "/items?condition=Fair").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_get_item_found_and_missing() {
    let app = test_app(setup_test_state().await);

    let (status, body) = get_json(&app, "/items/item4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["name"], "DJI Drone with 4K Camera");

    let (status, _) = get_json(&app, "/items/item999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quote_reference_vector() {
    let app = test_app(setup_test_state().await);

    // item1: daily_price 250, replacement_value 5000
    let start = Local::now().date_naive() + Duration::days(10);
    let end = start + Duration::days(3);
    let uri = format!(
        "/items/item1/quote?start_date={}&end_date={}&delivery=pickup",
        start, end
    );

    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 3);
    assert_eq!(body["quote"]["rental_cost"], 750);
    assert_eq!(body["quote"]["service_fee"], 38);
    assert_eq!(body["quote"]["total_payment"], 788);
    assert_eq!(body["quote"]["security_deposit"], 2500);
}

#[tokio::test]
async fn test_quote_without_dates_is_all_zero() {
    let app = test_app(setup_test_state().await);

    let (status, body) = get_json(&app, "/items/item2/quote").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 0);
    assert_eq!(body["quote"]["rental_cost"], 0);
    assert_eq!(body["quote"]["total_payment"], 0);
    assert_eq!(body["quote"]["security_deposit"], 0);
}

#[tokio::test]
async fn test_quote_rejects_inverted_range() {
    let app = test_app(setup_test_state().await);

    let start = Local::now().date_naive() + Duration::days(10);
    let end = start - Duration::days(2);
    let uri = format!("/items/item1/quote?start_date={}&end_date={}", start, end);

    let (status, _) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar_marks_past_days_unavailable() {
    let app = test_app(setup_test_state().await);

    let today = Local::now().date_naive();
    let uri = format!(
        "/items/item5/calendar?year={}&month={}",
        today.year(),
        today.month()
    );

    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();
    assert!(days.len() >= 28);

    for slot in days {
        let date: chrono::NaiveDate = serde_json::from_value(slot["date"].clone()).unwrap();
        if date < today {
            assert_eq!(slot["available"], false, "past day {} must be blocked", date);
        }
    }

    let (status, _) = get_json(&app, "/items/item5/calendar?year=2026&month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/items/item999/calendar?year=2026&month=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_rentals_with_status_filter() {
    let app = test_app(setup_test_state().await);

    let (status, body) = get_json(&app, "/rentals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rentals"].as_array().unwrap().len(), 4);

    let (_, body) = get_json(&app, "/rentals?status=upcoming").await;
    let rentals = body["rentals"].as_array().unwrap();
    assert_eq!(rentals.len(), 2);
    for rental in rentals {
        assert_eq!(rental["status"], "upcoming");
    }

    let (status, body) = get_json(&app, "/rentals/rental1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rental"]["item"]["id"], "item2");

    let (status, _) = get_json(&app, "/rentals/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
