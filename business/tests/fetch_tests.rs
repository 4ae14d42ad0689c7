//! Collection fetchers against a mock backend.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{TestBackend, bookings_json, users_json};
use rentals_business::{BusinessConfig, ConsoleError, api};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_fetch_users_accepts_bare_array() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/v1/users", 200, users_json()).await;

    let users = api::fetch_users(&backend.config)
        .await
        .expect("users should load");

    assert_eq!(users.len(), 3);
    assert_eq!(users[1].first_name, "Anna");
    assert_eq!(users[1].phone, None);
}

#[tokio::test]
async fn test_fetch_cars_accepts_data_wrapper() {
    let backend = TestBackend::start().await;
    backend
        .mock_get("/api/v1/cars", 200, json!({"data": [{"id": 1}]}))
        .await;

    let cars = api::fetch_cars(&backend.config)
        .await
        .expect("cars should load");

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, 1);
}

#[tokio::test]
async fn test_fetch_other_object_is_empty() {
    let backend = TestBackend::start().await;
    backend.mock_get("/api/v1/bookings", 200, json!({})).await;

    let bookings = api::fetch_bookings(&backend.config)
        .await
        .expect("bookings should load");

    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_fetch_error_status_is_error() {
    let backend = TestBackend::start().await;
    backend
        .mock_get_text("/api/v1/users", 500, "Internal Server Error")
        .await;

    let err = api::fetch_users(&backend.config)
        .await
        .expect_err("500 should fail");

    assert_eq!(
        err,
        ConsoleError::Fetch {
            status: 500,
            body: "Internal Server Error".to_owned(),
        }
    );
}

#[tokio::test]
async fn test_fetch_unparsable_body_is_parse_error() {
    let backend = TestBackend::start().await;
    backend
        .mock_get_text("/api/v1/cars", 200, "<html>login</html>")
        .await;

    let err = api::fetch_cars(&backend.config)
        .await
        .expect_err("html should not parse");

    assert!(matches!(err, ConsoleError::Parse(_)));
}

#[tokio::test]
async fn test_my_bookings_forbidden_is_empty() {
    let backend = TestBackend::start().await;
    backend
        .mock_get_text("/api/v1/bookings/me", 403, "Forbidden")
        .await;

    let bookings = api::fetch_my_bookings(&backend.config)
        .await
        .expect("403 should mean no bookings");

    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_my_bookings_unauthorized_is_empty() {
    let backend = TestBackend::start().await;
    backend
        .mock_get_text("/api/v1/bookings/me", 401, "")
        .await;

    let bookings = api::fetch_my_bookings(&backend.config)
        .await
        .expect("401 should mean no bookings");

    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_my_bookings_server_error_carries_body() {
    let backend = TestBackend::start().await;
    backend
        .mock_get_text("/api/v1/bookings/me", 500, "database down")
        .await;

    let err = api::fetch_my_bookings(&backend.config)
        .await
        .expect_err("500 should fail");

    assert_eq!(
        err,
        ConsoleError::Fetch {
            status: 500,
            body: "database down".to_owned(),
        }
    );
}

#[tokio::test]
async fn test_my_bookings_parses_records() {
    let backend = TestBackend::start().await;
    backend
        .mock_get("/api/v1/bookings/me", 200, bookings_json())
        .await;

    let bookings = api::fetch_my_bookings(&backend.config)
        .await
        .expect("bookings should load");

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].car_id, 2);
}

#[tokio::test]
async fn test_requests_without_session_send_no_cookie() {
    let server = wiremock::MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/cars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = BusinessConfig::new(server.uri());
    let cars = api::fetch_cars(&config).await.expect("cars should load");
    assert!(cars.is_empty());

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("cookie"));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let config = BusinessConfig::new(common::closed_port_url());

    let err = api::fetch_users(&config)
        .await
        .expect_err("connection should fail");

    assert!(matches!(err, ConsoleError::Network(_)));
}
