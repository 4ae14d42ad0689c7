//! Platform-neutral logic of the rentals console.
//!
//! Controllers ([`AdminConsole`], [`UserConsole`]) fetch from the backend and
//! return [`ViewContent`] for a front end to render.

pub mod admin_console;
pub mod api;
pub mod cart;
pub mod collation;
mod config;
pub mod error;
pub mod http;
pub mod login_page;
pub mod messages;
pub mod models;
pub mod navigation;
pub mod sort;
pub mod user_console;
pub mod view;

pub use admin_console::AdminConsole;
pub use cart::{CART_KEY, Cart, CartState, CartStore, MemoryCartStore};
pub use config::BusinessConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use login_page::login_message;
pub use models::{Booking, Car, CreateBookingRequest, User};
pub use navigation::{AdminView, MenuTarget, UserView, ViewId};
pub use user_console::UserConsole;
pub use view::{Cell, TableView, ViewAction, ViewContent};
