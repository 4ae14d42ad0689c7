//! Configuration commands.

use anyhow::Result;

use crate::cli::ConfigCommand;
use crate::context::AppContext;

/// Name part of a `name=value` cookie, so `show` never prints the secret.
fn cookie_name(cookie: &str) -> &str {
    cookie.split_once('=').map_or(cookie, |(name, _)| name)
}

pub fn run_config(ctx: &mut AppContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::SetSession { cookie } => {
            ctx.file_config.set_session(cookie.trim());
            ctx.file_config.save_to(&ctx.config_path)?;
            ctx.out.success(format!(
                "Session saved to {}",
                ctx.config_path.display()
            ));
        }
        ConfigCommand::SetBaseUrl { url } => {
            ctx.file_config.set_base_url(url.trim());
            ctx.file_config.save_to(&ctx.config_path)?;
            ctx.out.success(format!(
                "Base URL saved to {}",
                ctx.config_path.display()
            ));
        }
        ConfigCommand::Show => {
            let out = &ctx.out;
            out.labeled_indent("Config file", ctx.config_path.display(), 0);
            out.labeled_indent("Cart file", ctx.cart_path.display(), 0);
            out.labeled_indent("Base URL", &ctx.business.api_base_url, 0);
            out.labeled_indent("API", ctx.business.api_url(), 0);
            let session = ctx
                .business
                .session_cookie()
                .map_or_else(|| "(none)".to_owned(), |c| format!("{}=…", cookie_name(c)));
            out.labeled_indent("Session", session, 0);
        }
    }
    Ok(())
}
