//! API integration tests, driving the router in-process

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use device_booking_server::{api, AppConfig, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let state = AppState::new(AppConfig::default())
        .await
        .expect("Failed to build application state");
    api::router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    into_parts(app, request).await
}

async fn into_parts(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

/// Helper to get an admin token
async fn get_auth_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("No token in response").to_string()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

async fn post_booking(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/bookings", None, Some(body)).await
}

fn booking(period_id: i32, date: &str, quantity: i32) -> Value {
    json!({
        "deviceId": 1,
        "periodId": period_id,
        "bookedDate": date,
        "borrowerName": "Nguyen Van A",
        "phoneNumber": "0123456789",
        "purpose": "Geography",
        "quantity": quantity
    })
}

async fn available(app: &Router, date: &str, period_id: i32) -> i64 {
    let (status, body) = get(app, &format!("/api/availability/{}", date)).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .expect("availability array")
        .iter()
        .find(|p| p["periodId"] == period_id)
        .expect("period present")["available"]
        .as_i64()
        .expect("available count")
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/api/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_seeded_devices_and_periods() {
    let app = app().await;
    let (status, devices) = get(&app, "/api/devices").await;
    assert_eq!(status, StatusCode::OK);
    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 80);
    assert_eq!(devices[0], json!({ "id": 1, "name": "iPad 1", "status": "available" }));

    let (status, periods) = get(&app, "/api/periods").await;
    assert_eq!(status, StatusCode::OK);
    let periods = periods.as_array().unwrap();
    assert_eq!(periods.len(), 9);
    assert_eq!(periods[0]["startTime"], "08:00");
    assert_eq!(periods[0]["endTime"], "08:45");
}

#[tokio::test]
async fn test_login() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("passwordHash").is_none());

    let token = body["token"].as_str().unwrap();
    let (status, me) = send(&app, Method::GET, "/api/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "admin");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "NotAuthorized");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = app().await;
    let (status, _) = get(&app, "/api/bookings").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/stats", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/bookings/1/status",
        None,
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_booking_reduces_availability() {
    let app = app().await;
    assert_eq!(available(&app, "2024-01-01", 1).await, 80);

    let (status, body) = post_booking(&app, booking(1, "2024-01-01", 12)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "active");
    assert_eq!(body["quantity"], 12);

    assert_eq!(available(&app, "2024-01-01", 1).await, 68);
    // different day, same period
    assert_eq!(available(&app, "2024-01-02", 1).await, 80);
    // same day, different period
    assert_eq!(available(&app, "2024-01-01", 2).await, 80);

    let (_, devices) = get(&app, "/api/devices").await;
    assert_eq!(devices[0]["status"], "borrowed");

    let (status, on_day) = get(&app, "/api/bookings/2024-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(on_day.as_array().unwrap().len(), 1);
    let (_, other_day) = get(&app, "/api/bookings/2024-01-02").await;
    assert!(other_day.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_booking_validation_details() {
    let app = app().await;
    let mut body = booking(1, "2024-01-01", 81);
    body["phoneNumber"] = json!("12345");
    body["borrowerName"] = json!("");

    let (status, response) = post_booking(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "BadValue");

    let fields: Vec<&str> = response["details"]
        .as_array()
        .expect("field details")
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["borrowerName", "phoneNumber", "quantity"]);

    let (status, _) = post_booking(&app, booking(1, "2024-01-01", 0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_booking(&app, booking(1, "2024-01-01", 80)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_booking_missing_and_mistyped_fields() {
    let app = app().await;
    let body = json!({
        "deviceId": 1,
        "periodId": 1,
        "bookedDate": "2024-01-01",
        "borrowerName": "A",
        "purpose": "x",
        "quantity": "5"
    });

    let (status, response) = post_booking(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], 18);
    let details = response["details"].as_array().expect("field details");
    assert_eq!(
        details,
        &vec![
            json!({ "field": "phoneNumber", "message": "Phone number is required" }),
            json!({ "field": "quantity", "message": "Quantity must be an integer" }),
        ]
    );
}

#[tokio::test]
async fn test_create_booking_malformed_json() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"deviceId\": 1,"))
        .expect("Failed to build request");

    let (status, body) = into_parts(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 18);
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_create_booking_unknown_period() {
    let app = app().await;
    let (status, body) = post_booking(&app, booking(12, "2024-01-01", 1)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_create_booking_over_capacity() {
    let app = app().await;
    let (status, _) = post_booking(&app, booking(3, "2024-01-01", 60)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_booking(&app, booking(3, "2024-01-01", 21)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "InsufficientCapacity");
    assert_eq!(available(&app, "2024-01-01", 3).await, 20);
}

#[tokio::test]
async fn test_complete_booking_restores_capacity() {
    let app = app().await;
    let token = get_auth_token(&app).await;

    let (_, created) = post_booking(&app, booking(2, "2024-01-01", 25)).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(available(&app, "2024-01-01", 2).await, 55);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/bookings/{}/status", id),
        Some(&token),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");
    assert_eq!(available(&app, "2024-01-01", 2).await, 80);

    let (_, devices) = get(&app, "/api/devices").await;
    assert_eq!(devices[0]["status"], "available");
}

#[tokio::test]
async fn test_update_status_errors() {
    let app = app().await;
    let token = get_auth_token(&app).await;
    post_booking(&app, booking(1, "2024-01-01", 1)).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/bookings/1/status",
        Some(&token),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidState");

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/bookings/99/status",
        Some(&token),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the failed transitions left booking 1 untouched
    let (_, all) = send(&app, Method::GET, "/api/bookings", Some(&token), None).await;
    assert_eq!(all[0]["status"], "active");
}

#[tokio::test]
async fn test_list_all_bookings_newest_first() {
    let app = app().await;
    let token = get_auth_token(&app).await;
    for date in ["2024-01-03", "2024-01-10", "2024-01-01"] {
        let (status, _) = post_booking(&app, booking(1, date, 1)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = send(&app, Method::GET, "/api/bookings", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[tokio::test]
async fn test_dashboard() {
    let app = app().await;
    let token = get_auth_token(&app).await;
    post_booking(&app, booking(1, "2024-01-01", 30)).await;
    post_booking(&app, booking(9, "2024-01-02", 5)).await;

    let (status, stats) = send(&app, Method::GET, "/api/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["capacity"], 80);
    assert_eq!(stats["totalBorrowed"], 35);
    assert_eq!(stats["available"], 45);
    assert_eq!(stats["bookingsByPeriod"][0]["count"], 1);
    assert_eq!(stats["bookingsByPeriod"][8]["count"], 1);
}

#[tokio::test]
async fn test_invalid_date_path() {
    let app = app().await;
    let (status, _) = get(&app, "/api/bookings/not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(&app, "/api/availability/2024-13-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
