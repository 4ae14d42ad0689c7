//! Customer console: cars to choose from, own bookings and the cart.

use log::{info, warn};

use crate::BusinessConfig;
use crate::api;
use crate::cart::{Cart, CartState, CartStore};
use crate::error::ConsoleResult;
use crate::messages;
use crate::models::Car;
use crate::navigation::{UserView, ViewId};
use crate::sort::{BookingField, CarField, SortDirection, SortKey, SortState};
use crate::view::{self, CartView, ViewAction, ViewContent};

/// View-controller of the customer console.
#[derive(Debug)]
pub struct UserConsole<S> {
    config: BusinessConfig,
    cars_sort: SortState<CarField>,
    bookings_sort: SortState<BookingField>,
    cart: Cart<S>,
    /// Cars of the last successful cars load, in display order.
    cars: Vec<Car>,
}

impl<S: CartStore> UserConsole<S> {
    pub fn new(config: BusinessConfig, store: S) -> ConsoleResult<Self> {
        Ok(Self {
            config,
            cars_sort: SortState::new(
                SortKey::new(CarField::Name, SortDirection::Asc),
                CarField::CUSTOMER,
            ),
            bookings_sort: SortState::new(
                SortKey::new(BookingField::Id, SortDirection::Asc),
                BookingField::CUSTOMER,
            ),
            cart: Cart::new(store)?,
            cars: Vec::new(),
        })
    }

    pub fn cart(&self) -> &Cart<S> {
        &self.cart
    }

    /// Cars shown by the last successful cars load.
    pub fn loaded_cars(&self) -> &[Car] {
        &self.cars
    }

    /// Active sort key of `view`; the cart has none.
    pub fn sort_key(&self, view: UserView) -> Option<&str> {
        match view {
            UserView::Cars => Some(self.cars_sort.current()),
            UserView::Bookings => Some(self.bookings_sort.current()),
            UserView::Cart => None,
        }
    }

    pub async fn load_cars(&mut self) -> ViewContent {
        match api::fetch_cars(&self.config).await {
            Ok(mut cars) => {
                self.cars_sort.apply(&mut cars);
                self.cars.clone_from(&cars);
                ViewContent::Table(view::render_table(
                    cars,
                    &self.cars_sort,
                    view::CUSTOMER_CAR_HEADERS,
                    Some(messages::NO_CARS_FOUND),
                    view::customer_car_row,
                ))
            }
            Err(e) => {
                warn!("Failed to load cars: {e}");
                ViewContent::Error(messages::CARS_FETCH_ERROR)
            }
        }
    }

    pub async fn load_bookings(&mut self) -> ViewContent {
        match api::fetch_my_bookings(&self.config).await {
            Ok(bookings) => ViewContent::Table(view::render_table(
                bookings,
                &self.bookings_sort,
                view::CUSTOMER_BOOKING_HEADERS,
                Some(messages::NO_BOOKINGS_FOUND),
                view::customer_booking_row,
            )),
            Err(e) => {
                warn!("Failed to load own bookings: {e}");
                ViewContent::Error(messages::MY_BOOKINGS_FETCH_ERROR)
            }
        }
    }

    /// Enter the cart view. A selected car moves on to the date inputs.
    pub fn load_cart(&mut self) -> ViewContent {
        self.cart.open();
        match self.cart.state() {
            CartState::Confirming {
                car,
                from_date,
                to_date,
            } => ViewContent::Cart(CartView::new(car.clone(), from_date, to_date)),
            // `open` leaves no car behind in `Selected`.
            CartState::Empty | CartState::Selected(_) => {
                ViewContent::Notice(messages::NO_CAR_SELECTED)
            }
        }
    }

    pub async fn load(&mut self, view: UserView) -> ViewContent {
        match view {
            UserView::Cars => self.load_cars().await,
            UserView::Bookings => self.load_bookings().await,
            UserView::Cart => self.load_cart(),
        }
    }

    /// Switch the sort key of `view` and reload it. The cart ignores the key.
    pub async fn change_sort(&mut self, view: UserView, key: impl Into<String>) -> ViewContent {
        match view {
            UserView::Cars => self.cars_sort.set(key),
            UserView::Bookings => self.bookings_sort.set(key),
            UserView::Cart => {}
        }
        self.load(view).await
    }

    /// Menu dispatch. Unknown identifiers do nothing.
    pub async fn open(&mut self, view_id: &str) -> Option<ViewContent> {
        let view = UserView::parse(view_id)?;
        Some(self.load(view).await)
    }

    /// Put a car into the cart, replacing any earlier choice.
    pub fn select_car(&mut self, car: Car) -> ConsoleResult<()> {
        self.cart.select(car)
    }

    /// "Choose car" on a row of the last loaded cars table.
    ///
    /// Returns `false` if no loaded car has this id.
    pub fn choose_car(&mut self, car_id: i64) -> ConsoleResult<bool> {
        let Some(car) = self.cars.iter().find(|car| car.id == car_id).cloned() else {
            info!("Car {car_id} is not in the loaded cars table");
            return Ok(false);
        };
        self.cart.select(car)?;
        Ok(true)
    }

    pub fn set_booking_dates(&mut self, from: impl Into<String>, to: impl Into<String>) -> bool {
        self.cart.set_dates(from, to)
    }

    /// Empty the cart and show the cart view again.
    pub fn clear_cart(&mut self) -> ConsoleResult<ViewContent> {
        self.cart.clear()?;
        Ok(self.load_cart())
    }

    /// Submit the booking in the cart.
    ///
    /// On success the cart is emptied and the caller's bookings are loaded
    /// fresh. On failure nothing changes and the error says why.
    pub async fn confirm_booking(&mut self) -> ConsoleResult<ViewContent> {
        self.cart.confirm(&self.config).await?;
        Ok(self.load_bookings().await)
    }

    /// Run an action triggered from a view.
    pub async fn handle_action(&mut self, action: ViewAction) -> ConsoleResult<ViewContent> {
        match action {
            // An id missing from the loaded table leaves the cart as it was.
            ViewAction::ChooseCar(car_id) => {
                self.choose_car(car_id)?;
                Ok(self.load_cart())
            }
            ViewAction::ConfirmBooking => self.confirm_booking().await,
            ViewAction::ClearCart => self.clear_cart(),
        }
    }
}
