//! Administrator console: read-only users, cars and bookings tables.

use log::warn;

use crate::BusinessConfig;
use crate::api;
use crate::messages;
use crate::navigation::{AdminView, ViewId};
use crate::sort::{BookingField, CarField, SortDirection, SortKey, SortState, UserField};
use crate::view::{self, ViewContent};

/// View-controller of the admin console.
///
/// Each view keeps its own sort key for the lifetime of the console.
#[derive(Debug, Clone)]
pub struct AdminConsole {
    config: BusinessConfig,
    users_sort: SortState<UserField>,
    cars_sort: SortState<CarField>,
    bookings_sort: SortState<BookingField>,
}

impl AdminConsole {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            users_sort: SortState::new(
                SortKey::new(UserField::Id, SortDirection::Asc),
                UserField::ALL,
            ),
            cars_sort: SortState::new(
                SortKey::new(CarField::Id, SortDirection::Asc),
                CarField::ALL,
            ),
            bookings_sort: SortState::new(
                SortKey::new(BookingField::Id, SortDirection::Asc),
                BookingField::ALL,
            ),
        }
    }

    /// Active sort key of `view`.
    pub fn sort_key(&self, view: AdminView) -> &str {
        match view {
            AdminView::Users => self.users_sort.current(),
            AdminView::Cars => self.cars_sort.current(),
            AdminView::Bookings => self.bookings_sort.current(),
        }
    }

    pub async fn load_users(&mut self) -> ViewContent {
        match api::fetch_users(&self.config).await {
            Ok(users) => ViewContent::Table(view::render_table(
                users,
                &self.users_sort,
                view::USER_HEADERS,
                None,
                view::user_row,
            )),
            Err(e) => {
                warn!("Failed to load users: {e}");
                ViewContent::Error(messages::USERS_FETCH_ERROR)
            }
        }
    }

    pub async fn load_cars(&mut self) -> ViewContent {
        match api::fetch_cars(&self.config).await {
            Ok(cars) => ViewContent::Table(view::render_table(
                cars,
                &self.cars_sort,
                view::CAR_HEADERS,
                None,
                view::car_row,
            )),
            Err(e) => {
                warn!("Failed to load cars: {e}");
                ViewContent::Error(messages::CARS_FETCH_ERROR)
            }
        }
    }

    pub async fn load_bookings(&mut self) -> ViewContent {
        match api::fetch_bookings(&self.config).await {
            Ok(bookings) => ViewContent::Table(view::render_table(
                bookings,
                &self.bookings_sort,
                view::BOOKING_HEADERS,
                None,
                view::booking_row,
            )),
            Err(e) => {
                warn!("Failed to load bookings: {e}");
                ViewContent::Error(messages::BOOKINGS_FETCH_ERROR)
            }
        }
    }

    pub async fn load(&mut self, view: AdminView) -> ViewContent {
        match view {
            AdminView::Users => self.load_users().await,
            AdminView::Cars => self.load_cars().await,
            AdminView::Bookings => self.load_bookings().await,
        }
    }

    /// Switch the sort key of `view` and reload it from the backend.
    pub async fn change_sort(&mut self, view: AdminView, key: impl Into<String>) -> ViewContent {
        match view {
            AdminView::Users => self.users_sort.set(key),
            AdminView::Cars => self.cars_sort.set(key),
            AdminView::Bookings => self.bookings_sort.set(key),
        }
        self.load(view).await
    }

    /// Menu dispatch. Unknown identifiers do nothing.
    pub async fn open(&mut self, view_id: &str) -> Option<ViewContent> {
        let view = AdminView::parse(view_id)?;
        Some(self.load(view).await)
    }
}
