//! Per-invocation context: resolved configuration, cart location and output.

use std::path::PathBuf;

use anyhow::Result;
use rentals_business::{AdminConsole, BusinessConfig, UserConsole};
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::output::Output;
use crate::store::FileCartStore;
use crate::terminal::Protocol;

pub struct AppContext {
    pub config_path: PathBuf,
    /// Contents of the config file, as saved.
    pub file_config: Config,
    /// Effective backend settings: flags over file over environment.
    pub business: BusinessConfig,
    pub cart_path: PathBuf,
    pub images: Protocol,
    pub out: Output,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        let file_config = Config::load_from(&config_path)?;

        let business = file_config.resolve(
            BusinessConfig::from_env()?,
            cli.base_url.as_deref(),
            cli.session.as_deref(),
        );

        let cart_path = match &cli.cart_file {
            Some(path) => path.clone(),
            None => FileCartStore::default_path()?,
        };

        debug!(
            "Using backend {} (config {}, cart {})",
            business.api_base_url,
            config_path.display(),
            cart_path.display()
        );

        Ok(Self {
            config_path,
            file_config,
            business,
            cart_path,
            images: Protocol::from(cli.images),
            out: Output::new(),
        })
    }

    /// Context with explicit file locations and inline images off.
    pub fn with_paths(
        business: BusinessConfig,
        config_path: impl Into<PathBuf>,
        cart_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let config_path = config_path.into();
        Ok(Self {
            file_config: Config::load_from(&config_path)?,
            config_path,
            business,
            cart_path: cart_path.into(),
            images: Protocol::None,
            out: Output::new(),
        })
    }

    pub fn admin_console(&self) -> AdminConsole {
        AdminConsole::new(self.business.clone())
    }

    pub fn user_console(&self) -> Result<UserConsole<FileCartStore>> {
        let store = FileCartStore::open(&self.cart_path)?;
        Ok(UserConsole::new(self.business.clone(), store)?)
    }
}
