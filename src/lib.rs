//! NutriSearch: a terminal client for nutrition search and food recognition.
//!
//! NutriSearch looks up nutrition facts on a remote nutrition/recognition
//! service:
//! - Text search by food name, with alternatives
//! - Barcode lookup for packaged products
//! - Photo recognition chained into a text search for the detected label
//! - Stored prediction history per user
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  REPL runtime (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and actions                       │
//! │  - Flow controllers with request sequencing         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Transport     │
//! │ (ui/)         │                     │ (transport/)  │
//! │ - Rendering   │                     │ - HTTP client │
//! │ - Theming     │                     │ - Failures    │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Wire model and errors (domain/)                  │
//! │  - Config and paths (infrastructure/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, OTLP-JSON span file          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/nutrisearch/config.toml
//! api_url = "http://localhost:8000"
//! user_id = "temp-user-123"
//! theme = "midnight"
//! trace_level = "debug"
//! trace_file = "~/.local/state/nutrisearch/traces.json"
//! ```
//!
//! The same keys are read from `NUTRISEARCH_*` environment variables (and a
//! `.env` file) by [`Config::from_env`].
//!
//! # Example
//!
//! ```rust,no_run
//! use nutrisearch::app::{run_search, ScreenHandle};
//! use nutrisearch::transport::HttpTransport;
//! use nutrisearch::{initialize, Config};
//!
//! # async fn demo() -> nutrisearch::Result<()> {
//! let config = Config::default();
//! let service = HttpTransport::new(&config.api_base_url)?;
//! let screen = ScreenHandle::new(initialize(&config));
//!
//! let phase = run_search(&service, &screen, "banana").await;
//! println!("{phase:?}: {}", nutrisearch::ui::render(&screen.snapshot(), 80));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod transport;
pub mod ui;

pub use app::{handle_event, Action, AppState, CardRef, Event, Phase, ScreenHandle};
pub use domain::{NutriError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Service used when no `api_url` is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// User id attached to saved recognitions until accounts exist.
pub const DEFAULT_USER_ID: &str = "temp-user-123";

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "NUTRISEARCH_";

/// Recognized configuration keys.
pub const CONFIG_KEYS: [&str; 6] = [
    "api_url",
    "user_id",
    "theme",
    "theme_file",
    "trace_level",
    "trace_file",
];

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the nutrition/recognition service, without trailing `/`.
    pub api_base_url: String,

    /// Opaque user id sent with `recognize-and-save` and history calls.
    pub user_id: String,

    /// Built-in theme name (`daylight`, `midnight`). Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub trace_level: Option<String>,

    /// File receiving exported spans as OTLP JSON.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Builds a configuration from key/value pairs.
    ///
    /// # Parsing Rules
    ///
    /// - Unknown keys are ignored
    /// - Blank values fall back to the defaults
    /// - `api_url` loses any trailing `/`
    /// - `trace_file` has a leading `~` expanded
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use nutrisearch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "https://food.example/api/".to_string());
    /// map.insert("user_id".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_base_url, "https://food.example/api");
    /// assert_eq!(config.user_id, "temp-user-123");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let api_base_url = value("api_url")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            user_id: value("user_id").unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            trace_file: value("trace_file").map(|p| infrastructure::expand_tilde(&p)),
        }
    }

    /// Reads `NUTRISEARCH_*` environment variables, after loading a `.env`
    /// file from the working directory or its parents if there is one.
    #[must_use]
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
        }
        Self::from_map(&env_map(std::env::vars()))
    }

    /// Parses a TOML document holding the configuration keys at top level.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::Config`] for invalid TOML or a key whose value is
    /// an array or table.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e| NutriError::Config(format!("invalid TOML: {e}")))?;

        let mut map = BTreeMap::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(_)
                | toml::Value::Float(_)
                | toml::Value::Boolean(_)
                | toml::Value::Datetime(_) => value.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    return Err(NutriError::Config(format!("key '{key}' must be a plain value")));
                }
            };
            map.insert(key, value);
        }
        Ok(Self::from_map(&map))
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::Config`] if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NutriError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
            .map_err(|e| NutriError::Config(format!("{}: {e}", path.display())))
    }
}

/// Maps `NUTRISEARCH_API_URL`-style variables to configuration keys.
fn env_map(vars: impl IntoIterator<Item = (String, String)>) -> BTreeMap<String, String> {
    vars.into_iter()
        .filter_map(|(name, value)| {
            let key = name.strip_prefix(ENV_PREFIX)?.to_ascii_lowercase();
            CONFIG_KEYS.contains(&key.as_str()).then_some((key, value))
        })
        .collect()
}

/// Creates the state of a new search screen.
///
/// The theme comes from `theme_file`, then `theme_name`, then the default;
/// any failure along the way falls back to the default theme with a debug log.
///
/// # Example
///
/// ```rust
/// use nutrisearch::{initialize, Config, Phase};
///
/// let config = Config {
///     theme_name: Some("midnight".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "midnight");
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_base_url, "initializing nutrisearch screen");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
