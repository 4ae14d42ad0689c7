//! Terminal rendering of view content.

use anyhow::{Result, bail};
use rentals_business::messages;
use rentals_business::view::{CartView, Cell, SortBar, TableView, ViewAction, ViewContent};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::warn;

use crate::output::Output;
use crate::terminal::{self, Protocol};

/// Shown in the image column when a car has a picture.
const IMAGE_PLACEHOLDER: &str = "[bild]";

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Image(Some(_)) => IMAGE_PLACEHOLDER.to_owned(),
        other => other.display_text().to_owned(),
    }
}

/// `Sortera: Namn A–Ö [name-asc]`
pub fn sort_bar_text(bar: &SortBar) -> String {
    match bar.selected_option() {
        Some(option) => format!("{} {} [{}]", bar.label, option.label, option.value),
        None => format!("{} [{}]", bar.label, bar.selected),
    }
}

/// Rounded table with a header row.
pub fn table_text(table: &TableView) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.iter().map(|h| (*h).to_owned()));
    for row in &table.rows {
        builder.push_record(row.iter().map(cell_text));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

/// Command that performs a cart action.
pub fn action_command(action: &ViewAction) -> String {
    match action {
        ViewAction::ChooseCar(id) => format!("rentals user select {id}"),
        ViewAction::ConfirmBooking => {
            "rentals user confirm --from YYYY-MM-DD --to YYYY-MM-DD".to_owned()
        }
        ViewAction::ClearCart => "rentals user clear".to_owned(),
    }
}

fn show_image(protocol: Protocol, caption: impl std::fmt::Display, encoded: &str, out: &Output) {
    out.dim(caption);
    if let Err(e) = terminal::display_base64(protocol, encoded) {
        warn!("Skipping car image: {e:#}");
    }
}

fn render_table(out: &Output, table: &TableView, protocol: Protocol) {
    if let Some(bar) = &table.sort_bar {
        out.dim(sort_bar_text(bar));
    }

    match table.empty_notice {
        Some(notice) if table.is_empty() => {
            out.info(notice);
            return;
        }
        _ => out.print(table_text(table)),
    }

    if protocol == Protocol::None {
        return;
    }
    for row in &table.rows {
        for cell in row {
            if let Cell::Image(Some(encoded)) = cell {
                let id = row.first().map(Cell::display_text).unwrap_or_default();
                show_image(protocol, format!("ID {id}"), encoded, out);
            }
        }
    }
}

fn render_cart(out: &Output, cart: &CartView, protocol: Protocol) {
    out.header(messages::CART_TITLE);
    for (label, value) in cart.summary() {
        out.labeled_indent(label, value, 2);
    }

    if protocol != Protocol::None
        && let Some(encoded) = cart.car.image.as_deref().filter(|i| !i.is_empty())
    {
        show_image(protocol, &cart.car.name, encoded, out);
    }

    let or_missing = |value: &str| {
        if value.is_empty() {
            rentals_business::view::MISSING.to_owned()
        } else {
            value.to_owned()
        }
    };
    out.labeled_indent(messages::CART_FROM_DATE, or_missing(&cart.from_date), 2);
    out.labeled_indent(messages::CART_TO_DATE, or_missing(&cart.to_date), 2);

    out.newline();
    for cell in &cart.actions {
        if let Cell::Action { label, action } = cell {
            out.hint(label, action_command(action));
        }
    }
}

/// Print `content`. A failed load becomes an error carrying its message.
pub fn render(out: &Output, content: &ViewContent, protocol: Protocol) -> Result<()> {
    match content {
        ViewContent::Table(table) => render_table(out, table, protocol),
        ViewContent::Cart(cart) => render_cart(out, cart, protocol),
        ViewContent::Notice(notice) => out.info(notice),
        ViewContent::Error(message) => bail!("{message}"),
    }
    Ok(())
}
