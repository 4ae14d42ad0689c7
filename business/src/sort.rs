//! Client-side sorting of fetched collections.
//!
//! A sort key is written `<field>-asc` or `<field>-desc` (e.g. `first-name-asc`),
//! matching the values of the sort selector. Each view only accepts the fields
//! it offers; any other key, including a well-formed key for a field the view
//! does not offer, leaves the collection untouched.
//!
//! Descending is the exact reverse of the ascending comparator. Sorting is
//! stable, so ties keep their fetched order.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::collation;
use crate::models::{Booking, Car, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sortable column of some record type.
pub trait SortField: Copy + Eq + fmt::Debug + 'static {
    type Record;

    /// Field part of the sort key, e.g. `first-name`.
    fn slug(self) -> &'static str;

    /// Localized option label for the sort selector.
    fn option_label(self, direction: SortDirection) -> &'static str;

    /// Ascending comparison of two records by this field.
    fn compare(self, a: &Self::Record, b: &Self::Record) -> Ordering;
}

/// A parsed `<field>-<direction>` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortKey<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a key against the fields a view offers.
    pub fn parse(key: &str, fields: &[F]) -> Option<Self> {
        let (slug, direction) = if let Some(slug) = key.strip_suffix("-asc") {
            (slug, SortDirection::Asc)
        } else if let Some(slug) = key.strip_suffix("-desc") {
            (slug, SortDirection::Desc)
        } else {
            return None;
        };

        fields
            .iter()
            .find(|field| field.slug() == slug)
            .map(|&field| Self::new(field, direction))
    }

    pub fn compare(&self, a: &F::Record, b: &F::Record) -> Ordering {
        match self.direction {
            SortDirection::Asc => self.field.compare(a, b),
            SortDirection::Desc => self.field.compare(b, a),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.option_label(self.direction)
    }
}

impl<F: SortField> fmt::Display for SortKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.slug(), self.direction.as_str())
    }
}

/// Sort `records` in place by `key`. Returns false (and leaves `records`
/// untouched) when the key is not one of `fields`.
pub fn sort_records<F: SortField>(records: &mut [F::Record], key: &str, fields: &[F]) -> bool {
    match SortKey::parse(key, fields) {
        Some(key) => {
            records.sort_by(|a, b| key.compare(a, b));
            true
        }
        None => {
            log::debug!("Ignoring unknown sort key {key:?}");
            false
        }
    }
}

/// Every key a view offers, in selector order: asc then desc per field.
pub fn all_keys<F: SortField>(fields: &[F]) -> Vec<SortKey<F>> {
    fields
        .iter()
        .flat_map(|&field| {
            [
                SortKey::new(field, SortDirection::Asc),
                SortKey::new(field, SortDirection::Desc),
            ]
        })
        .collect()
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    collation::compare(a, b)
}

fn cmp_num(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn cmp_date(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    // Missing dates sort as the earliest possible value.
    a.cmp(&b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Email,
    FirstName,
    LastName,
    Phone,
    Username,
}

impl UserField {
    pub const ALL: &'static [Self] = &[
        Self::Id,
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::Phone,
        Self::Username,
    ];
}

impl SortField for UserField {
    type Record = User;

    fn slug(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Email => "email",
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Phone => "phone",
            Self::Username => "username",
        }
    }

    fn option_label(self, direction: SortDirection) -> &'static str {
        use SortDirection::{Asc, Desc};
        match (self, direction) {
            (Self::Id, Asc) => "ID 1–9",
            (Self::Id, Desc) => "ID 9–1",
            (Self::Email, Asc) => "Email A–Ö",
            (Self::Email, Desc) => "Email Ö–A",
            (Self::FirstName, Asc) => "Förnamn A–Ö",
            (Self::FirstName, Desc) => "Förnamn Ö–A",
            (Self::LastName, Asc) => "Efternamn A–Ö",
            (Self::LastName, Desc) => "Efternamn Ö–A",
            (Self::Phone, Asc) => "Telefonnummer 0–9",
            (Self::Phone, Desc) => "Telefonnummer 9–0",
            (Self::Username, Asc) => "Användarnamn A–Ö",
            (Self::Username, Desc) => "Användarnamn Ö–A",
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Email => cmp_text(&a.email, &b.email),
            Self::FirstName => cmp_text(&a.first_name, &b.first_name),
            Self::LastName => cmp_text(&a.last_name, &b.last_name),
            Self::Phone => cmp_text(
                a.phone.as_deref().unwrap_or_default(),
                b.phone.as_deref().unwrap_or_default(),
            ),
            Self::Username => cmp_text(&a.username, &b.username),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarField {
    Id,
    Name,
    Type,
    Model,
    Price,
}

impl CarField {
    /// Fields of the administrator car listing.
    pub const ALL: &'static [Self] = &[Self::Id, Self::Name, Self::Type, Self::Model, Self::Price];

    /// Fields of the customer car listing.
    pub const CUSTOMER: &'static [Self] = &[Self::Name, Self::Type];
}

impl SortField for CarField {
    type Record = Car;

    fn slug(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Type => "type",
            Self::Model => "model",
            Self::Price => "price",
        }
    }

    fn option_label(self, direction: SortDirection) -> &'static str {
        use SortDirection::{Asc, Desc};
        match (self, direction) {
            (Self::Id, Asc) => "ID 1–9",
            (Self::Id, Desc) => "ID 9–1",
            (Self::Name, Asc) => "Namn A–Ö",
            (Self::Name, Desc) => "Namn Ö–A",
            (Self::Type, Asc) => "Typ A–Ö",
            (Self::Type, Desc) => "Typ Ö–A",
            (Self::Model, Asc) => "Modell A–Ö",
            (Self::Model, Desc) => "Modell Ö–A",
            (Self::Price, Asc) => "Pris Låg → Hög",
            (Self::Price, Desc) => "Pris Hög → Låg",
        }
    }

    fn compare(self, a: &Car, b: &Car) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => cmp_text(&a.name, &b.name),
            Self::Type => cmp_text(&a.car_type, &b.car_type),
            Self::Model => cmp_text(&a.model, &b.model),
            Self::Price => cmp_num(a.price, b.price),
        }
    }
}

/// Booking columns. `Car` and `User` order by the raw identifiers the
/// backend sends, the same values the rows display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Id,
    Active,
    Car,
    User,
    From,
    To,
    Price,
}

impl BookingField {
    pub const ALL: &'static [Self] = &[
        Self::Id,
        Self::Active,
        Self::Car,
        Self::User,
        Self::From,
        Self::To,
        Self::Price,
    ];

    /// The caller's own bookings carry no user column.
    pub const CUSTOMER: &'static [Self] = &[
        Self::Id,
        Self::Active,
        Self::Car,
        Self::From,
        Self::To,
        Self::Price,
    ];
}

impl SortField for BookingField {
    type Record = Booking;

    fn slug(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Active => "active",
            Self::Car => "car",
            Self::User => "user",
            Self::From => "from",
            Self::To => "to",
            Self::Price => "price",
        }
    }

    fn option_label(self, direction: SortDirection) -> &'static str {
        use SortDirection::{Asc, Desc};
        match (self, direction) {
            (Self::Id, Asc) => "ID 1–9",
            (Self::Id, Desc) => "ID 9–1",
            (Self::Active, Asc) => "Aktiv Av → På",
            (Self::Active, Desc) => "Aktiv På → Av",
            (Self::Car, Asc) => "Bil 1–9",
            (Self::Car, Desc) => "Bil 9–1",
            (Self::User, Asc) => "Användare 1–9",
            (Self::User, Desc) => "Användare 9–1",
            (Self::From, Asc) => "Från ↑",
            (Self::From, Desc) => "Från ↓",
            (Self::To, Asc) => "Till ↑",
            (Self::To, Desc) => "Till ↓",
            (Self::Price, Asc) => "Pris Låg → Hög",
            (Self::Price, Desc) => "Pris Hög → Låg",
        }
    }

    fn compare(self, a: &Booking, b: &Booking) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Active => a.active.cmp(&b.active),
            Self::Car => a.car_id.cmp(&b.car_id),
            Self::User => a.user_id.unwrap_or(0).cmp(&b.user_id.unwrap_or(0)),
            Self::From => cmp_date(a.from_date, b.from_date),
            Self::To => cmp_date(a.to_date, b.to_date),
            Self::Price => cmp_num(a.price.unwrap_or(0.0), b.price.unwrap_or(0.0)),
        }
    }
}

/// Sort selector state of one view.
///
/// Holds the raw selector value so an unknown key survives a reload exactly as
/// chosen (and keeps sorting a no-op).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState<F: 'static> {
    current: String,
    fields: &'static [F],
}

impl<F: SortField> SortState<F> {
    pub fn new(default_key: SortKey<F>, fields: &'static [F]) -> Self {
        Self {
            current: default_key.to_string(),
            fields,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn fields(&self) -> &'static [F] {
        self.fields
    }

    pub fn set(&mut self, key: impl Into<String>) {
        self.current = key.into();
    }

    /// Sort by the current key; unknown keys leave `records` as fetched.
    pub fn apply(&self, records: &mut [F::Record]) -> bool {
        sort_records(records, &self.current, self.fields)
    }
}
