use axum::http::StatusCode;

use pariharam_engine::domain::repository::OtpStore;

use crate::helpers::{TEST_SECRET, birth_details, test_server};

#[tokio::test]
async fn should_reject_gated_request_without_secret_header() {
    let (server, store, mut rx) = test_server(Some(TEST_SECRET));

    let response = server
        .post("/send-otp")
        .json(&serde_json::json!({"email": "a@x.com"}))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_API_SECRET");
    assert_eq!(body["message"], "Invalid or missing API Secret");

    // No side effects: nothing stored, nothing queued.
    assert_eq!(store.get("a@x.com").await.unwrap(), None);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn should_reject_gated_request_with_wrong_secret() {
    let (server, store, mut rx) = test_server(Some(TEST_SECRET));

    let response = server
        .post("/send-otp")
        .add_header("x-api-secret", "wrong-secret")
        .json(&serde_json::json!({"email": "a@x.com"}))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    assert_eq!(store.get("a@x.com").await.unwrap(), None);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn should_reject_calculate_without_secret_header() {
    let (server, _store, _rx) = test_server(Some(TEST_SECRET));

    let response = server.post("/calculate").json(&birth_details_json()).await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn should_pass_gated_request_with_matching_secret() {
    let (server, _store, mut rx) = test_server(Some(TEST_SECRET));

    let response = server
        .post("/send-otp")
        .add_header("x-api-secret", TEST_SECRET)
        .json(&serde_json::json!({"email": "a@x.com"}))
        .await;
    response.assert_status(StatusCode::OK);
    assert!(rx.try_recv().is_ok());
}

#[tokio::test]
async fn should_pass_everything_in_open_mode() {
    let (server, _store, mut rx) = test_server(None);

    let response = server
        .post("/send-otp")
        .json(&serde_json::json!({"email": "a@x.com"}))
        .await;
    response.assert_status(StatusCode::OK);
    assert!(rx.try_recv().is_ok());
}

#[tokio::test]
async fn should_keep_health_paths_open_when_secret_is_set() {
    let (server, _store, _rx) = test_server(Some(TEST_SECRET));

    let response = server.get("/").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "active");
    assert_eq!(body["service"], "Pariharam Astrology Engine");

    server.get("/healthz").await.assert_status(StatusCode::OK);
    server.get("/readyz").await.assert_status(StatusCode::OK);
}

fn birth_details_json() -> serde_json::Value {
    let details = birth_details();
    serde_json::json!({
        "year": details.year,
        "month": details.month,
        "day": details.day,
        "hour": details.hour,
        "minute": details.minute,
        "lat": details.lat,
        "lon": details.lon,
    })
}
