//! Localized (Swedish) user-facing strings.

pub const SORT_LABEL: &str = "Sortera:";

pub const USERS_FETCH_ERROR: &str = "Fel vid hämtning av användare";
pub const CARS_FETCH_ERROR: &str = "Fel vid hämtning av bilar";
pub const BOOKINGS_FETCH_ERROR: &str = "Fel vid hämtning av bokningar";
pub const MY_BOOKINGS_FETCH_ERROR: &str = "Nätverksfel vid hämtning av bokningar";

pub const NO_CARS_FOUND: &str = "Inga bilar hittades";
pub const NO_BOOKINGS_FOUND: &str = "Inga bokningar hittades";
pub const NO_CAR_SELECTED: &str = "Inga bilar valda";

pub const CHOOSE_CAR: &str = "Välj bil";

pub const CART_TITLE: &str = "Din beställning";
pub const CART_CAR: &str = "Bil";
pub const CART_TYPE: &str = "Typ";
pub const CART_MODEL: &str = "Modell";
pub const CART_PRICE: &str = "Pris";
pub const CART_FROM_DATE: &str = "Från datum";
pub const CART_TO_DATE: &str = "Till datum";
pub const CART_CONFIRM: &str = "Bekräfta";
pub const CART_CLEAR: &str = "Ta bort";

pub const DATES_REQUIRED: &str = "Vänligen välj start- och slutdatum.";
pub const BOOKING_CONFIRMED: &str = "Bokning bekräftad!";
pub const BOOKING_FAILED_PREFIX: &str = "Bokningen misslyckades: ";
pub const NETWORK_ERROR: &str = "Ett nätverksfel inträffade. Försök igen.";

pub const LOGIN_ERROR: &str = "Fel användarnamn eller lösenord";
pub const LOGGED_OUT: &str = "Du har loggats ut";

/// Daily price as shown in the cart, e.g. `499 kr / dag`.
pub fn price_per_day(price: f64) -> String {
    format!("{} kr / dag", format_amount(price))
}

/// Formats an amount without a trailing `.0` for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}
