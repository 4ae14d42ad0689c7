//! Shared helpers for business integration tests.

#![allow(dead_code)]

use rentals_business::{BusinessConfig, Car};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const SESSION: &str = "JSESSIONID=test-session";

/// Mock backend plus a config pointing at it.
pub struct TestBackend {
    pub server: MockServer,
    pub config: BusinessConfig,
}

impl TestBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = BusinessConfig::new(server.uri()).with_session(SESSION);
        Self { server, config }
    }

    /// Answer GET `path` with `status` and a JSON body, requiring the session
    /// cookie.
    pub async fn mock_get(&self, api_path: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(api_path))
            .and(header("cookie", SESSION))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer GET `path` with `status` and a plain-text body.
    pub async fn mock_get_text(&self, api_path: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}

/// Base URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    format!("http://127.0.0.1:{port}")
}

pub fn users_json() -> Value {
    json!([
        {"id": 2, "email": "örjan@example.se", "firstName": "Örjan", "lastName": "Lind", "phone": "0701", "username": "orjan"},
        {"id": 1, "email": "anna@example.se", "firstName": "Anna", "lastName": "Berg", "phone": null, "username": "anna"},
        {"id": 3, "email": "åsa@example.se", "firstName": "Åsa", "lastName": "Ek", "phone": "0702", "username": "asa"}
    ])
}

pub fn cars_json() -> Value {
    json!([
        {"id": 1, "name": "Volvo", "type": "SUV", "model": "XC60", "price": 899.0, "feature1": "AWD", "booked": false},
        {"id": 2, "name": "Audi", "type": "Sedan", "model": "A4", "price": 650.0, "booked": false},
        {"id": 3, "name": "Saab", "type": "Kombi", "model": "Octavia", "price": 500.0, "booked": true}
    ])
}

pub fn bookings_json() -> Value {
    json!([
        {"id": 11, "active": true, "carId": 2, "userId": 1, "fromDate": "2024-06-01", "toDate": "2024-06-03", "price": 1300.0},
        {"id": 10, "active": false, "carId": 1, "userId": 2, "fromDate": "2024-05-01", "toDate": "2024-05-02", "price": 899.0}
    ])
}

pub fn car(id: i64, name: &str) -> Car {
    Car {
        id,
        name: name.to_owned(),
        car_type: "SUV".to_owned(),
        model: "XC60".to_owned(),
        price: 899.0,
        image: None,
        feature1: None,
        feature2: None,
        feature3: None,
        booked: false,
    }
}
