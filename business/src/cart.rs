//! Single-slot cart and booking confirmation.
//!
//! ```text
//!   Empty ──select──▶ Selected ──open──▶ Confirming
//!     ▲                  │ ▲                 │
//!     └──────clear───────┘ └────select───────┤
//!     ▲                                      │
//!     └──────────confirm (2xx) / clear───────┘
//! ```
//!
//! The selected car is persisted under [`CART_KEY`] in a [`CartStore`], the
//! browser-local storage analogue. Selecting always overwrites: there is never
//! more than one pending selection per store.

use std::collections::HashMap;

use log::{error, info, warn};

use crate::BusinessConfig;
use crate::api;
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{Car, CreateBookingRequest};

/// Storage key of the serialized selected car.
pub const CART_KEY: &str = "selectedCar";

/// Persistent string key-value storage.
pub trait CartStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> ConsoleResult<()>;
    fn remove(&mut self, key: &str) -> ConsoleResult<()>;
}

/// In-memory store; selection lives as long as the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryCartStore {
    entries: HashMap<String, String>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCartStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> ConsoleResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CartState {
    #[default]
    Empty,
    Selected(Car),
    /// Date inputs are shown; values are kept exactly as entered.
    Confirming {
        car: Car,
        from_date: String,
        to_date: String,
    },
}

impl CartState {
    /// Derive the state from what the store holds.
    ///
    /// An unreadable selection counts as no selection.
    pub fn load(store: &impl CartStore) -> ConsoleResult<Self> {
        let Some(raw) = store.get(CART_KEY)? else {
            return Ok(Self::Empty);
        };

        match serde_json::from_str::<Car>(&raw) {
            Ok(car) => Ok(Self::Selected(car)),
            Err(e) => {
                warn!("Ignoring unreadable cart selection: {e}");
                Ok(Self::Empty)
            }
        }
    }

    pub fn car(&self) -> Option<&Car> {
        match self {
            Self::Empty => None,
            Self::Selected(car) | Self::Confirming { car, .. } => Some(car),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Build the booking request, or fail if a date is missing.
    pub fn booking_request(&self) -> ConsoleResult<CreateBookingRequest> {
        match self {
            Self::Empty => Err(ConsoleError::EmptyCart),
            Self::Selected(_) => Err(ConsoleError::Validation),
            Self::Confirming {
                car,
                from_date,
                to_date,
            } => {
                if from_date.is_empty() || to_date.is_empty() {
                    return Err(ConsoleError::Validation);
                }
                Ok(CreateBookingRequest {
                    car_id: car.id,
                    from_date: from_date.clone(),
                    to_date: to_date.clone(),
                })
            }
        }
    }
}

/// Cart state machine bound to its store.
#[derive(Debug)]
pub struct Cart<S> {
    store: S,
    state: CartState,
}

impl<S: CartStore> Cart<S> {
    pub fn new(store: S) -> ConsoleResult<Self> {
        let state = CartState::load(&store)?;
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Put `car` in the cart, replacing any earlier selection.
    pub fn select(&mut self, car: Car) -> ConsoleResult<()> {
        let raw = serde_json::to_string(&car).map_err(|e| ConsoleError::Storage(e.to_string()))?;
        self.store.set(CART_KEY, raw)?;
        info!("Selected car {} ({})", car.id, car.name);
        self.state = CartState::Selected(car);
        Ok(())
    }

    /// Enter the cart view: show the date inputs if a car is selected.
    pub fn open(&mut self) {
        if let CartState::Selected(car) = &self.state {
            self.state = CartState::Confirming {
                car: car.clone(),
                from_date: String::new(),
                to_date: String::new(),
            };
        }
    }

    /// Fill the date inputs. Ignored unless the inputs are shown.
    pub fn set_dates(&mut self, from: impl Into<String>, to: impl Into<String>) -> bool {
        if let CartState::Confirming {
            from_date, to_date, ..
        } = &mut self.state
        {
            *from_date = from.into();
            *to_date = to.into();
            true
        } else {
            false
        }
    }

    /// Drop the selection.
    pub fn clear(&mut self) -> ConsoleResult<()> {
        self.store.remove(CART_KEY)?;
        self.state = CartState::Empty;
        Ok(())
    }

    /// Submit the booking.
    ///
    /// Missing dates fail before any request is made. Only a 2xx answer clears
    /// the cart; every failure leaves the state as it was so the user can
    /// correct and resubmit. Once the backend has accepted the booking a store
    /// that cannot forget the selection is only logged.
    pub async fn confirm(&mut self, config: &BusinessConfig) -> ConsoleResult<()> {
        let request = self.state.booking_request()?;

        match api::create_booking(config, &request).await {
            Ok(()) => {
                info!(
                    "Booked car {} from {} to {}",
                    request.car_id, request.from_date, request.to_date
                );
                if let Err(e) = self.clear() {
                    error!("Booking created but the stored selection remains: {e}");
                    self.state = CartState::Empty;
                }
                Ok(())
            }
            Err(e @ ConsoleError::Network(_)) => {
                error!("Error during booking: {e}");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, name: &str) -> Car {
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

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut cart = Cart::new(MemoryCartStore::new()).expect("empty store loads");
        assert!(cart.state().is_empty());

        cart.select(car(1, "A")).expect("select A");
        cart.select(car(2, "B")).expect("select B");

        assert_eq!(cart.state(), &CartState::Selected(car(2, "B")));
        let stored = CartState::load(cart.store()).expect("store readable");
        assert_eq!(stored.car().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_selection_survives_reload_from_store() {
        let mut cart = Cart::new(MemoryCartStore::new()).expect("empty store loads");
        cart.select(car(5, "Saab")).expect("select");

        let reloaded = Cart::new(cart.store().clone()).expect("reload");
        assert_eq!(reloaded.state(), &CartState::Selected(car(5, "Saab")));
    }

    #[test]
    fn test_unreadable_selection_loads_as_empty() {
        let mut store = MemoryCartStore::new();
        store
            .set(CART_KEY, "{not json".to_owned())
            .expect("memory store");
        assert_eq!(CartState::load(&store).expect("load"), CartState::Empty);
    }

    #[test]
    fn test_open_only_from_selected() {
        let mut cart = Cart::new(MemoryCartStore::new()).expect("empty store loads");
        cart.open();
        assert!(cart.state().is_empty());
        assert!(!cart.set_dates("2024-01-01", "2024-01-02"));

        cart.select(car(1, "A")).expect("select");
        cart.open();
        assert!(matches!(cart.state(), CartState::Confirming { .. }));
        assert!(cart.set_dates("2024-01-01", "2024-01-02"));
    }

    #[test]
    fn test_booking_request_requires_both_dates() {
        let mut cart = Cart::new(MemoryCartStore::new()).expect("empty store loads");
        assert_eq!(
            cart.state().booking_request(),
            Err(ConsoleError::EmptyCart)
        );

        cart.select(car(1, "A")).expect("select");
        assert_eq!(
            cart.state().booking_request(),
            Err(ConsoleError::Validation)
        );

        cart.open();
        cart.set_dates("", "2024-01-01");
        assert_eq!(
            cart.state().booking_request(),
            Err(ConsoleError::Validation)
        );

        cart.set_dates("2023-12-30", "2024-01-01");
        assert_eq!(
            cart.state().booking_request(),
            Ok(CreateBookingRequest {
                car_id: 1,
                from_date: "2023-12-30".to_owned(),
                to_date: "2024-01-01".to_owned(),
            })
        );
    }

    #[test]
    fn test_clear_removes_selection() {
        let mut cart = Cart::new(MemoryCartStore::new()).expect("empty store loads");
        cart.select(car(1, "A")).expect("select");
        cart.open();
        cart.clear().expect("clear");

        assert!(cart.state().is_empty());
        assert_eq!(cart.store().get(CART_KEY).expect("get"), None);
    }
}
