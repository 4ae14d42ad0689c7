//! Logout command.

use anyhow::Result;
use rentals_business::navigation::logout_url;

use crate::context::AppContext;

/// Forget the saved session and show where the backend session ends.
pub fn run_logout(ctx: &mut AppContext) -> Result<()> {
    let url = logout_url(&ctx.business);

    if ctx.file_config.session.cookie.is_some() {
        ctx.file_config.clear_session();
        ctx.file_config.save_to(&ctx.config_path)?;
        ctx.business.session_cookie = None;
        ctx.out.success("Saved session removed");
    }

    ctx.out.print(url);
    Ok(())
}
