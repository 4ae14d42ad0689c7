//! Customer views, cart and booking confirmation.

use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, anyhow, bail};
use chrono::NaiveDate;
use inquire::{Select, Text};
use rentals_business::{Car, UserConsole, UserView, ViewContent, messages};
use tracing::{info, instrument};

use crate::cli::UserCommand;
use crate::context::AppContext;
use crate::render::render;
use crate::store::FileCartStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that `value` is a `YYYY-MM-DD` date.
pub fn validate_date(value: &str) -> Result<()> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|e| anyhow!("Invalid date '{value}' ({e}); expected YYYY-MM-DD"))
}

/// Load `view`, switching to `sort` first if given.
pub async fn load_user_view(
    console: &mut UserConsole<FileCartStore>,
    view: UserView,
    sort: Option<String>,
) -> ViewContent {
    match sort {
        Some(key) => console.change_sort(view, key).await,
        None => console.load(view).await,
    }
}

/// Put car `car_id` into the cart, looking it up in the current cars list.
///
/// Returns the chosen car.
#[instrument(skip(ctx), name = "select_car")]
pub async fn select_car(ctx: &AppContext, car_id: i64) -> Result<Car> {
    let mut console = ctx.user_console()?;
    if let ViewContent::Error(message) = console.load_cars().await {
        bail!("{message}");
    }
    choose_loaded(&mut console, car_id)
}

fn choose_loaded(console: &mut UserConsole<FileCartStore>, car_id: i64) -> Result<Car> {
    if !console.choose_car(car_id)? {
        bail!("No car with ID {car_id}");
    }
    console
        .cart()
        .state()
        .car()
        .cloned()
        .context("Cart is empty after choosing a car")
}

/// Submit the booking in the cart for `from`..`to`.
///
/// Dates are passed through as given; empty dates fail validation before any
/// request is sent.
#[instrument(skip(ctx), name = "confirm")]
pub async fn confirm_booking(ctx: &AppContext, from: &str, to: &str) -> Result<ViewContent> {
    let mut console = ctx.user_console()?;
    console.load_cart();
    console.set_booking_dates(from, to);

    console
        .confirm_booking()
        .await
        .map_err(|e| anyhow!(e.user_message()))
}

fn prompt_date(label: &str) -> Result<String> {
    let value = Text::new(label)
        .with_help_message("YYYY-MM-DD")
        .prompt_skippable()
        .context("Failed to read date")?;
    Ok(value.unwrap_or_default().trim().to_owned())
}

/// Date from the flag, or prompted for on a terminal. Empty otherwise.
fn booking_date(flag: Option<String>, label: &str) -> Result<String> {
    let value = match flag {
        Some(value) => value,
        None if std::io::stdin().is_terminal() => prompt_date(label)?,
        None => String::new(),
    };
    if !value.is_empty() {
        validate_date(&value)?;
    }
    Ok(value)
}

fn car_option(car: &Car) -> String {
    format!(
        "{} ({}, {}) - {} [{}]",
        car.name,
        car.car_type,
        car.model,
        messages::price_per_day(car.price),
        car.id
    )
}

/// Ask which car to choose. `None` if skipped or nothing to choose from.
fn pick_car(cars: &[Car]) -> Result<Option<i64>> {
    if cars.is_empty() {
        return Ok(None);
    }

    let options: Vec<String> = cars.iter().map(car_option).collect();
    let selection = Select::new(messages::CHOOSE_CAR, options.clone())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt_skippable()
        .context("Failed to select car")?;

    Ok(selection
        .and_then(|chosen| options.iter().position(|o| *o == chosen))
        .map(|index| cars[index].id))
}

#[instrument(skip_all, name = "user")]
pub async fn run_user(ctx: &AppContext, command: UserCommand) -> Result<()> {
    let out = &ctx.out;

    match command {
        UserCommand::Cars {
            sort,
            choose,
            interactive,
        } => {
            let mut console = ctx.user_console()?;
            let content = load_user_view(&mut console, UserView::Cars, sort).await;
            render(out, &content, ctx.images)?;

            let car_id = if interactive {
                pick_car(console.loaded_cars())?
            } else {
                choose
            };

            if let Some(car_id) = car_id {
                let car = choose_loaded(&mut console, car_id)?;
                out.success(format!("{}: {}", messages::CHOOSE_CAR, car.name));
            }
            Ok(())
        }
        UserCommand::Bookings { sort } => {
            let mut console = ctx.user_console()?;
            let content = load_user_view(&mut console, UserView::Bookings, sort).await;
            render(out, &content, ctx.images)
        }
        UserCommand::Cart => {
            let mut console = ctx.user_console()?;
            render(out, &console.load_cart(), ctx.images)
        }
        UserCommand::Select { id } => {
            let car = select_car(ctx, id).await?;
            out.success(format!("{}: {}", messages::CHOOSE_CAR, car.name));
            Ok(())
        }
        UserCommand::Clear => {
            let mut console = ctx.user_console()?;
            render(out, &console.clear_cart()?, ctx.images)
        }
        UserCommand::Confirm { from, to } => {
            let console = ctx.user_console()?;
            if console.cart().state().is_empty() {
                bail!("{}", messages::NO_CAR_SELECTED);
            }
            let from = booking_date(from, messages::CART_FROM_DATE)?;
            let to = booking_date(to, messages::CART_TO_DATE)?;

            let content = confirm_booking(ctx, &from, &to).await?;
            info!("Booking confirmed");
            out.success(messages::BOOKING_CONFIRMED);
            render(out, &content, ctx.images)
        }
    }
}
