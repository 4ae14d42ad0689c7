//! Administrator views.

use anyhow::Result;
use rentals_business::{AdminView, ViewContent};
use tracing::instrument;

use crate::cli::AdminCommand;
use crate::context::AppContext;
use crate::render::render;

/// Load `view`, switching to `sort` first if given.
pub async fn load_admin_view(
    ctx: &AppContext,
    view: AdminView,
    sort: Option<String>,
) -> ViewContent {
    let mut console = ctx.admin_console();
    match sort {
        Some(key) => console.change_sort(view, key).await,
        None => console.load(view).await,
    }
}

#[instrument(skip_all, name = "admin")]
pub async fn run_admin(ctx: &AppContext, command: AdminCommand) -> Result<()> {
    let (view, sort) = match command {
        AdminCommand::Users { sort } => (AdminView::Users, sort),
        AdminCommand::Cars { sort } => (AdminView::Cars, sort),
        AdminCommand::Bookings { sort } => (AdminView::Bookings, sort),
    };

    let content = load_admin_view(ctx, view, sort).await;
    render(&ctx.out, &content, ctx.images)
}
