//! Declarative view descriptions.
//!
//! Loading a view produces a [`ViewContent`] value instead of touching any
//! widget tree. Front ends (the CLI, a browser shell) render it; tests assert
//! on it directly.
//!
//! Render functions here are pure: `(records, sort state) -> ViewContent`.

use crate::messages;
use crate::models::{Booking, Car, User};
use crate::sort::{SortField, SortState, all_keys};

/// Text shown for absent values.
pub const MISSING: &str = "-";

pub const USER_HEADERS: &[&str] = &["ID", "Email", "First Name", "Last Name", "Phone", "Username"];
pub const CAR_HEADERS: &[&str] = &[
    "ID", "Name", "Type", "Model", "Price", "Image", "Feature1", "Feature2", "Feature3",
];
pub const CUSTOMER_CAR_HEADERS: &[&str] = &[
    "ID", "Name", "Type", "Model", "Price", "Image", "Feature1", "Feature2", "Feature3", "",
];
pub const BOOKING_HEADERS: &[&str] = &["ID", "Active", "Car", "User", "From", "To", "Price"];
pub const CUSTOMER_BOOKING_HEADERS: &[&str] = &["ID", "Active", "Car", "From", "To", "Price"];

/// Something the user can trigger from inside a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Put the car with this id into the cart.
    ChooseCar(i64),
    ConfirmBooking,
    ClearCart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Rendered as [`MISSING`].
    Missing,
    /// Inline JPEG image, base64 encoded. `None` renders an empty image slot.
    Image(Option<String>),
    Action {
        label: &'static str,
        action: ViewAction,
    },
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Self::Text(value.to_string())
    }

    pub fn optional(value: Option<impl ToString>) -> Self {
        value.map_or(Self::Missing, Self::text)
    }

    /// Plain-text rendering, as a terminal table would show it.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Missing => MISSING,
            Self::Image(_) => "",
            Self::Action { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    /// Selector value, e.g. `name-asc`.
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBar {
    pub label: &'static str,
    pub options: Vec<SortOption>,
    /// Currently selected value; may name no option when an unknown key was set.
    pub selected: String,
}

impl SortBar {
    pub fn from_state<F: SortField>(state: &SortState<F>) -> Self {
        Self {
            label: messages::SORT_LABEL,
            options: all_keys(state.fields())
                .into_iter()
                .map(|key| SortOption {
                    value: key.to_string(),
                    label: key.label(),
                })
                .collect(),
            selected: state.current().to_owned(),
        }
    }

    pub fn selected_option(&self) -> Option<&SortOption> {
        self.options.iter().find(|o| o.value == self.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub sort_bar: Option<SortBar>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
    /// Shown in place of the rows when there are none.
    pub empty_notice: Option<&'static str>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The cart with the selected car and the booking date inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub car: Car,
    pub from_date: String,
    pub to_date: String,
    pub actions: Vec<Cell>,
}

impl CartView {
    pub fn new(car: Car, from_date: impl Into<String>, to_date: impl Into<String>) -> Self {
        Self {
            car,
            from_date: from_date.into(),
            to_date: to_date.into(),
            actions: vec![
                Cell::Action {
                    label: messages::CART_CONFIRM,
                    action: ViewAction::ConfirmBooking,
                },
                Cell::Action {
                    label: messages::CART_CLEAR,
                    action: ViewAction::ClearCart,
                },
            ],
        }
    }

    /// Labelled summary lines of the selected car.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (messages::CART_CAR, self.car.name.clone()),
            (messages::CART_TYPE, self.car.car_type.clone()),
            (messages::CART_MODEL, self.car.model.clone()),
            (messages::CART_PRICE, messages::price_per_day(self.car.price)),
        ]
    }
}

/// Full content of a console's container after a load.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent {
    Table(TableView),
    Cart(CartView),
    /// A plain informational line, e.g. "no car selected".
    Notice(&'static str),
    /// Replaces the whole view after a failed fetch.
    Error(&'static str),
}

impl ViewContent {
    pub fn as_table(&self) -> Option<&TableView> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Sort `records` by `sort` and lay them out as a table.
pub fn render_table<F, R>(
    mut records: Vec<F::Record>,
    sort: &SortState<F>,
    headers: &[&'static str],
    empty_notice: Option<&'static str>,
    row: R,
) -> TableView
where
    F: SortField,
    R: Fn(&F::Record) -> Vec<Cell>,
{
    sort.apply(&mut records);

    TableView {
        sort_bar: Some(SortBar::from_state(sort)),
        headers: headers.to_vec(),
        rows: records.iter().map(row).collect(),
        empty_notice: if records.is_empty() { empty_notice } else { None },
    }
}

pub fn user_row(user: &User) -> Vec<Cell> {
    vec![
        Cell::text(user.id),
        Cell::text(&user.email),
        Cell::text(&user.first_name),
        Cell::text(&user.last_name),
        Cell::optional(user.phone.as_deref()),
        Cell::text(&user.username),
    ]
}

pub fn car_row(car: &Car) -> Vec<Cell> {
    vec![
        Cell::text(car.id),
        Cell::text(&car.name),
        Cell::text(&car.car_type),
        Cell::text(&car.model),
        Cell::text(messages::format_amount(car.price)),
        Cell::Image(car.image.clone().filter(|image| !image.is_empty())),
        Cell::optional(car.feature1.as_deref()),
        Cell::optional(car.feature2.as_deref()),
        Cell::optional(car.feature3.as_deref()),
    ]
}

/// Car row with the trailing "choose car" action.
pub fn customer_car_row(car: &Car) -> Vec<Cell> {
    let mut row = car_row(car);
    row.push(Cell::Action {
        label: messages::CHOOSE_CAR,
        action: ViewAction::ChooseCar(car.id),
    });
    row
}

fn booking_cells(booking: &Booking, with_user: bool) -> Vec<Cell> {
    let mut row = vec![
        Cell::text(booking.id),
        Cell::text(booking.active),
        Cell::text(booking.car_id),
    ];
    if with_user {
        row.push(Cell::optional(booking.user_id));
    }
    row.extend([
        Cell::optional(booking.from_date),
        Cell::optional(booking.to_date),
        Cell::optional(booking.price.map(messages::format_amount)),
    ]);
    row
}

pub fn booking_row(booking: &Booking) -> Vec<Cell> {
    booking_cells(booking, true)
}

pub fn customer_booking_row(booking: &Booking) -> Vec<Cell> {
    booking_cells(booking, false)
}
