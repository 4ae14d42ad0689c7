//! Login page message command.

use rentals_business::login_message;

use crate::output::Output;

/// Print the login page message for `query`, if any.
pub fn print_login_message(out: &Output, query: &str) {
    if let Some(message) = login_message(query) {
        out.print(message);
    }
}
