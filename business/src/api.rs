//! Rental backend API client helpers.
//!
//! Every call is credentialed: the configured session cookie is forwarded on
//! each request. Callers map results into view content; nothing here touches
//! view state.
//!
//! Collection endpoints are tolerated in two shapes, a bare JSON array or an
//! object with a `data` array. Anything else counts as an empty collection.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::BusinessConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::http::{Client, RequestBuilder, Response};
use crate::models::{Booking, Car, CreateBookingRequest, User};

fn get(config: &BusinessConfig, path: &str) -> RequestBuilder {
    let url = format!("{}{path}", config.api_url());
    Client::get(url).cookie(config.session_cookie())
}

async fn send(request: RequestBuilder) -> ConsoleResult<Response> {
    let method = request.method();
    let url = request.url().to_owned();
    let response = request.send().await?;
    debug!("{method} {url} -> {}", response.status);
    Ok(response)
}

fn fetch_error(response: &Response) -> ConsoleError {
    ConsoleError::Fetch {
        status: response.status,
        body: response.text_lossy(),
    }
}

/// Extract the record list from either response shape.
pub fn normalize_collection(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Parse a collection body into typed records.
pub fn parse_collection<T: DeserializeOwned>(body: &[u8]) -> ConsoleResult<Vec<T>> {
    let value: Value = serde_json::from_slice(body)?;
    let items = normalize_collection(value);
    Ok(serde_json::from_value(Value::Array(items))?)
}

async fn fetch_collection<T: DeserializeOwned>(
    config: &BusinessConfig,
    path: &str,
) -> ConsoleResult<Vec<T>> {
    let response = send(get(config, path)).await?;

    if !response.is_success() {
        return Err(fetch_error(&response));
    }

    parse_collection(&response.body)
}

/// GET `/api/v1/users`
pub async fn fetch_users(config: &BusinessConfig) -> ConsoleResult<Vec<User>> {
    fetch_collection(config, "/users").await
}

/// GET `/api/v1/cars`
pub async fn fetch_cars(config: &BusinessConfig) -> ConsoleResult<Vec<Car>> {
    fetch_collection(config, "/cars").await
}

/// GET `/api/v1/bookings`
pub async fn fetch_bookings(config: &BusinessConfig) -> ConsoleResult<Vec<Booking>> {
    fetch_collection(config, "/bookings").await
}

/// GET `/api/v1/bookings/me`
///
/// 401 and 403 mean "nothing to show" rather than a failure. Any other error
/// status carries the response body.
pub async fn fetch_my_bookings(config: &BusinessConfig) -> ConsoleResult<Vec<Booking>> {
    let response = send(get(config, "/bookings/me")).await?;

    match response.status {
        401 | 403 => {
            warn!(
                "Bookings of current user denied with status {}; showing none",
                response.status
            );
            Ok(Vec::new())
        }
        _ if response.is_success() => parse_collection(&response.body),
        _ => Err(fetch_error(&response)),
    }
}

/// POST `/api/v1/bookings`
/// Body: `{ "carId": .., "fromDate": "..", "toDate": ".." }`
///
/// A rejection carries the response body verbatim so it can be shown as is.
pub async fn create_booking(
    config: &BusinessConfig,
    request: &CreateBookingRequest,
) -> ConsoleResult<()> {
    let url = format!("{}/bookings", config.api_url());
    let builder = Client::post(url)
        .cookie(config.session_cookie())
        .json(request)?;

    let response = send(builder).await?;

    if response.is_success() {
        Ok(())
    } else {
        Err(ConsoleError::Submission {
            status: response.status,
            body: response.text_lossy(),
        })
    }
}
