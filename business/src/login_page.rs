//! Login page status line.
//!
//! The backend redirects to the login page with `?error` after a failed sign
//! in and with `?logout` after signing out. Flags are matched by name only;
//! their values are ignored.

use crate::messages;

fn has_flag(query: &str, flag: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .any(|pair| pair.split('=').next() == Some(flag))
}

/// Message to show for a query string such as `?error` or `logout=1`.
///
/// When both flags are present the logout message wins.
pub fn login_message(query: &str) -> Option<&'static str> {
    if has_flag(query, "logout") {
        Some(messages::LOGGED_OUT)
    } else if has_flag(query, "error") {
        Some(messages::LOGIN_ERROR)
    } else {
        None
    }
}
