//! Error taxonomy for console operations.
//!
//! Every variant maps to exactly one user-visible reaction; see
//! [`ConsoleError::user_message`].

use thiserror::Error;

use crate::http::HttpError;
use crate::messages;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// A collection fetch answered with a non-2xx status.
    #[error("API returned status {status}: {body}")]
    Fetch { status: u16, body: String },

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request never reached the server.
    #[error("Network failure: {0}")]
    Network(String),

    /// A booking was confirmed with nothing in the cart.
    #[error("No car selected")]
    EmptyCart,

    /// A booking was confirmed without both dates.
    #[error("Both from and to dates are required")]
    Validation,

    /// The backend rejected a booking request.
    #[error("Booking rejected with status {status}: {body}")]
    Submission { status: u16, body: String },

    /// The cart selection could not be read or written.
    #[error("Cart storage failure: {0}")]
    Storage(String),

    /// Configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl From<HttpError> for ConsoleError {
    fn from(err: HttpError) -> Self {
        Self::Network(err.message)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl ConsoleError {
    /// Localized text shown to the user for booking-flow failures.
    ///
    /// List views do not use this; they show a per-view message instead (see
    /// [`crate::view::ViewContent::Error`]).
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyCart => messages::NO_CAR_SELECTED.to_owned(),
            Self::Validation => messages::DATES_REQUIRED.to_owned(),
            Self::Submission { body, .. } => format!("{}{body}", messages::BOOKING_FAILED_PREFIX),
            Self::Network(_) => messages::NETWORK_ERROR.to_owned(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_message_carries_body_verbatim() {
        let err = ConsoleError::Submission {
            status: 409,
            body: "Bilen är redan bokad".to_owned(),
        };
        assert_eq!(
            err.user_message(),
            "Bokningen misslyckades: Bilen är redan bokad"
        );
    }

    #[test]
    fn test_network_message_is_generic() {
        let err = ConsoleError::from(HttpError::new("connection refused"));
        assert_eq!(err, ConsoleError::Network("connection refused".to_owned()));
        assert_eq!(err.user_message(), messages::NETWORK_ERROR);
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(
            ConsoleError::Validation.user_message(),
            "Vänligen välj start- och slutdatum."
        );
    }
}
