use std::env::vars;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::error::{ConsoleError, ConsoleResult};

/// Where the backend lives and which session to present to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Raw `Cookie` header value carrying the backend session
    /// (for example `JSESSIONID=...`).
    ///
    /// In the browser build this stays `None`; the browser attaches its own
    /// cookies to credentialed requests.
    pub session_cookie: Option<String>,
}

/// Environment variables understood by [`BusinessConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    rentals_api_base_url: Option<String>,
    rentals_session: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            session_cookie: None,
        }
    }

    pub fn with_session(mut self, session_cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(session_cookie.into());
        self
    }

    /// Build a config from `RENTALS_API_BASE_URL` and `RENTALS_SESSION`,
    /// falling back to [`BusinessConfig::default`] for anything unset.
    pub fn from_env() -> ConsoleResult<Self> {
        Self::from_vars(vars())
    }

    fn from_vars<I, S>(iter: I) -> ConsoleResult<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawEnv =
            serde_env::from_iter(iter).map_err(|e| ConsoleError::Config(e.to_string()))?;
        let mut config = Self::default();

        if let Some(base_url) = raw.rentals_api_base_url {
            info!("Using RENTALS_API_BASE_URL: {base_url}");
            config.api_base_url = base_url;
        }
        if let Some(session) = raw.rentals_session {
            config.session_cookie = Some(session);
        }

        Ok(config)
    }

    /// Prefix of every REST endpoint, e.g. `http://localhost:8080/api/v1`.
    pub fn api_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(&format!("{base}/api/v1"))
    }

    /// Navigation target that ends the backend session.
    pub fn logout_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        format!("{base}/logout")
    }

    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // Same-origin in the browser.
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://localhost:8080".to_owned()
            },
            session_cookie: None,
        }
    }
}
