//! Command implementations for the rentals CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod admin;
pub mod completions;
pub mod config;
pub mod login_message;
pub mod logout;
pub mod open;
pub mod user;

pub use admin::run_admin;
pub use completions::generate_completions;
pub use config::run_config;
pub use login_message::print_login_message;
pub use logout::run_logout;
pub use open::run_open;
pub use user::run_user;
