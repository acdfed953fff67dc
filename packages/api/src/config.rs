//! # Backend location — `ApiConfig`
//!
//! The only setting the client needs is the base URL of the REST API.
//!
//! ## Native
//!
//! Resolved with the `config` crate, later sources overriding earlier ones:
//!
//! 1. default `http://localhost:8000/api`
//! 2. `notes.toml` in the working directory (optional)
//! 3. `NOTES_*` environment variables, after loading `.env` through `dotenvy`
//!
//! ```toml
//! backend_url = "https://notes.example.com/api"
//! ```
//!
//! ## WASM
//!
//! There is no process environment in the browser, so `NOTES_BACKEND_URL` is read
//! at build time instead.

use serde::Deserialize;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub backend_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Layered config from `notes.toml` and the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .add_source(
                File::with_name("notes.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("NOTES"))
            .build()?
            .try_deserialize()
    }

    /// Resolve the config for this platform, falling back to the defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            match Self::from_env() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Invalid configuration, using defaults: {}", e);
                    Self::default()
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            option_env!("NOTES_BACKEND_URL")
                .map(Self::new)
                .unwrap_or_default()
        }
    }
}
