//! Wire types for the rental backend.
//!
//! All records are read-only on the client. Deserialization is lenient: absent
//! text fields become empty strings or `None`, unknown fields are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered customer or administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub username: String,
}

/// A rentable car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub car_type: String,
    #[serde(default)]
    pub model: String,
    /// Price per day.
    #[serde(default)]
    pub price: f64,
    /// Base64-encoded JPEG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub feature1: Option<String>,
    #[serde(default)]
    pub feature2: Option<String>,
    #[serde(default)]
    pub feature3: Option<String>,
    #[serde(default)]
    pub booked: bool,
}

/// A booking of one car by one user for a date range.
///
/// `user_id` is only present in the administrator listing; the caller's own
/// bookings omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub car_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Body of `POST /api/v1/bookings`.
///
/// Dates are forwarded exactly as entered; the backend owns date validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub car_id: i64,
    pub from_date: String,
    pub to_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_deserializes_backend_shape() {
        let car: Car = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Volvo XC60",
            "type": "SUV",
            "model": "2022",
            "price": 899.0,
            "image": null,
            "feature1": "AWD",
            "booked": false
        }))
        .expect("car should deserialize");

        assert_eq!(car.car_type, "SUV");
        assert_eq!(car.feature1.as_deref(), Some("AWD"));
        assert!(car.feature2.is_none());
        assert!(car.image.is_none());
    }

    #[test]
    fn test_booking_without_user_id() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": 7,
            "fromDate": "2024-05-01",
            "toDate": "2024-05-03",
            "carId": 3,
            "active": true
        }))
        .expect("booking should deserialize");

        assert_eq!(booking.user_id, None);
        assert_eq!(booking.from_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(booking.price, None);
    }

    #[test]
    fn test_create_booking_request_is_camel_case() {
        let body = serde_json::to_value(CreateBookingRequest {
            car_id: 3,
            from_date: "2024-05-01".to_owned(),
            to_date: "2024-05-03".to_owned(),
        })
        .expect("request should serialize");

        assert_eq!(
            body,
            serde_json::json!({"carId": 3, "fromDate": "2024-05-01", "toDate": "2024-05-03"})
        );
    }
}
