//! Menu dispatch by view identifier.

use anyhow::Result;
use rentals_business::{AdminView, MenuTarget, UserView, ViewContent};
use tracing::{debug, instrument};

use crate::cli::ConsoleKind;
use crate::commands::logout::run_logout;
use crate::context::AppContext;
use crate::render::render;

/// Load the view `view_id` of `console`.
///
/// `Ok(None)` for unknown identifiers and for the logout entry, which has no
/// view of its own.
pub async fn open_view(
    ctx: &AppContext,
    console: ConsoleKind,
    view_id: &str,
) -> Result<Option<ViewContent>> {
    let content = match console {
        ConsoleKind::Admin => ctx.admin_console().open(view_id).await,
        ConsoleKind::User => ctx.user_console()?.open(view_id).await,
    };
    Ok(content)
}

fn is_logout(console: ConsoleKind, view_id: &str) -> bool {
    match console {
        ConsoleKind::Admin => {
            matches!(MenuTarget::<AdminView>::parse(view_id), Some(MenuTarget::Logout))
        }
        ConsoleKind::User => {
            matches!(MenuTarget::<UserView>::parse(view_id), Some(MenuTarget::Logout))
        }
    }
}

#[instrument(skip(ctx), name = "open")]
pub async fn run_open(ctx: &mut AppContext, console: ConsoleKind, view_id: &str) -> Result<()> {
    if is_logout(console, view_id) {
        return run_logout(ctx);
    }

    match open_view(ctx, console, view_id).await? {
        Some(content) => render(&ctx.out, &content, ctx.images),
        None => {
            debug!("Ignoring unknown view '{view_id}'");
            Ok(())
        }
    }
}
