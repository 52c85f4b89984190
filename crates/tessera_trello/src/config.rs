//! Client configuration.
//!
//! Tunables (timeouts, retry backoff, rate windows) come from layered TOML
//! files; credentials come from the environment only and never appear in a
//! configuration file.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tessera_error::{ConfigError, TesseraError, TesseraResult};
use tessera_rate_limit::RateWindow;
use tracing::{debug, instrument};

/// Settings for [`crate::TrelloClient`].
///
/// The credential fields are filled from `TRELLO_API_KEY`, `TRELLO_TOKEN`,
/// and `TRELLO_BOARD_ID` during [`TrelloConfig::load`]; they are skipped
/// during (de)serialization so a config file cannot set them and a
/// serialized dump of the tunables cannot leak them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// Trello API key
    #[serde(skip)]
    pub api_key: String,
    /// Trello API token
    #[serde(skip)]
    pub token: String,
    /// Board all board-scoped operations target
    #[serde(skip)]
    pub board_id: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Delay between retries after an HTTP 429, in milliseconds
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Cap on 429 retries; `None` retries indefinitely
    #[serde(default)]
    pub max_retries: Option<usize>,
    /// Rolling windows enforced before a request leaves the process
    #[serde(default = "default_rate_windows")]
    pub rate_windows: Vec<RateWindow>,
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_retry_backoff_ms() -> u64 {
    1_000
}

/// Trello's published per-token quota: a one second burst window and a ten
/// minute sustained window.
fn default_rate_windows() -> Vec<RateWindow> {
    vec![RateWindow::new(1_000, 10), RateWindow::new(600_000, 300)]
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            token: String::new(),
            board_id: String::new(),
            request_timeout_ms: default_request_timeout_ms(),
            retry_backoff_ms: default_retry_backoff_ms(),
            max_retries: None,
            rate_windows: default_rate_windows(),
        }
    }
}

impl TrelloConfig {
    /// Load tunables from a specific file path. Credentials are left empty;
    /// the caller supplies them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value
    /// fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> TesseraResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                TesseraError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                TesseraError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled
    /// defaults, then fill credentials from the environment.
    ///
    /// Configuration sources in order of precedence (later sources override
    /// earlier):
    /// 1. Bundled defaults (tessera.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/tessera/tessera.toml)
    /// 3. User config in current directory (./tessera.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be parsed, a value fails
    /// validation, or any of `TRELLO_API_KEY`, `TRELLO_TOKEN`, or
    /// `TRELLO_BOARD_ID` is unset.
    #[instrument]
    pub fn load() -> TesseraResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../tessera.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tessera/tessera.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("tessera").required(false));

        let mut config: Self = builder
            .build()
            .map_err(|e| {
                TesseraError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                TesseraError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.api_key = require_env("TRELLO_API_KEY")?;
        config.token = require_env("TRELLO_TOKEN")?;
        config.board_id = require_env("TRELLO_BOARD_ID")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tunable is usable before anything is built from it.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending value.
    pub fn validate(&self) -> TesseraResult<()> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::new("request_timeout_ms must be greater than zero").into());
        }
        if self.retry_backoff_ms == 0 {
            return Err(ConfigError::new("retry_backoff_ms must be greater than zero").into());
        }
        for window in &self.rate_windows {
            if !window.is_valid() {
                return Err(ConfigError::new(format!(
                    "rate window {}ms/{} must have nonzero length and ceiling",
                    window.duration_ms, window.max_requests
                ))
                .into());
            }
        }
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| {
        ConfigError::new(format!(
            "{name} not set: supply it in the environment or a .env file"
        ))
    })
}
