//! zfolio: a Zellij plugin portfolio.
//!
//! Two routes share one pane:
//! - **Home** (`/`): biography, project showcase and a typewriter that types
//!   and deletes a list of titles in a loop
//! - **Games** (`/api-project`): search the RAWG video game database, filter
//!   out unrated games, sort, page through results and load details

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Typewriter    │   │ Catalog       │
//! │ (ui/)         │   │ (typewriter/) │   │ (catalog/)    │
//! │ - Rendering   │   │ - Pure step   │   │ - Derive      │
//! │ - Theming     │   │ - Tick timer  │   │ - Query guard │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                  │
//!                                         ┌───────────────┐
//!                                         │ RAWG (rawg/)  │
//!                                         │ - URLs, JSON  │
//!                                         └───────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Result derivation (filter, sort) and the single in-flight query guard
//! - [`domain`]: Games, profile and error types
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: OpenTelemetry tracing with file export
//! - [`rawg`]: RAWG request building and response decoding
//! - [`typewriter`]: Title animation
//! - [`ui`]: Terminal rendering with theme support
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zfolio.wasm" {
//!         api_key "your-rawg-key"
//!         start_route "/api-project"
//!         phrases "Rustacean|Tinkerer"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zfolio::{handle_event, initialize, Action, Config, Event, Route};
//!
//! let config = Config {
//!     api_key: Some("key".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::ShowRoute(Route::Games))?;
//! handle_event(&mut state, &Event::SearchMode)?;
//! for c in "portal".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::WebRequest(_)]));
//! # Ok::<(), zfolio::FolioError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod rawg;
pub mod typewriter;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route};
pub use domain::{FolioError, Result};
pub use ui::Theme;

use domain::Profile;
use rawg::RawgClient;
use std::collections::BTreeMap;
use typewriter::{Timings, Typewriter, TypewriterConfig};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// RAWG API key. Without one every lookup fails with the generic message.
    pub api_key: Option<String>,

    /// Default: `https://api.rawg.io/api`
    pub api_base_url: String,

    /// Results per page. Default: 20
    pub page_size: u32,

    /// Route shown on load. Default: [`Route::Home`]
    pub start_route: Route,

    /// Typewriter phrases. `None` uses the profile titles.
    pub phrases: Option<Vec<String>>,

    pub timings: Timings,

    /// TOML profile path; `~` expands to the sandbox home.
    pub profile_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `zfolio=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: rawg::DEFAULT_BASE_URL.to_string(),
            page_size: rawg::DEFAULT_PAGE_SIZE,
            start_route: Route::Home,
            phrases: None,
            timings: Timings::default(),
            profile_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable or out-of-range values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zfolio::{Config, Route};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("start_route".to_string(), "/api-project".to_string());
    /// map.insert("phrases".to_string(), "Rustacean | Tinkerer".to_string());
    /// map.insert("page_size".to_string(), "ten".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.start_route, Route::Games);
    /// assert_eq!(config.phrases, Some(vec!["Rustacean".to_string(), "Tinkerer".to_string()]));
    /// assert_eq!(config.page_size, 20);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let millis = |key: &str, default: u64| {
            config
                .get(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let start_route = config
            .get("start_route")
            .map_or(defaults.start_route, |path| {
                Route::from_path(path).unwrap_or_else(|| {
                    tracing::debug!(path = %path, "unknown start_route, using home");
                    defaults.start_route
                })
            });

        let phrases = config
            .get("phrases")
            .map(|s| {
                s.split('|')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty());

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|n| (1..=40).contains(n))
            .unwrap_or(defaults.page_size);

        let base = defaults.timings;
        let timings = Timings {
            tick_ms: millis("tick_ms", base.tick_ms).max(1),
            typing_ms: millis("typing_ms", base.typing_ms),
            deleting_ms: millis("deleting_ms", base.deleting_ms),
            wait_after_typing_ms: millis("wait_after_typing_ms", base.wait_after_typing_ms),
            wait_after_deleting_ms: millis("wait_after_deleting_ms", base.wait_after_deleting_ms),
            cursor_flash_ms: millis("cursor_flash_ms", base.cursor_flash_ms),
            typing_jitter_ticks: config
                .get("typing_jitter_ticks")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(base.typing_jitter_ticks),
        };

        Self {
            api_key: non_blank("api_key"),
            api_base_url: non_blank("api_base_url").unwrap_or(defaults.api_base_url),
            page_size,
            start_route,
            phrases,
            timings,
            profile_file: non_blank("profile_file"),
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
        }
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Theme, profile and typewriter settings that fail to load fall back to the
/// built-in defaults with a debug log. An invalid base URL is kept as the
/// client error and reported on each lookup.
///
/// # Example
///
/// ```rust
/// use zfolio::{initialize, Config, Route};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.route, Route::Home);
/// assert!(!state.typewriter.is_mounted());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(start_route = config.start_route.path(), "initializing zfolio plugin");

    let theme = load_theme(config);
    let profile = load_profile(config);

    let phrases = config.phrases.clone().unwrap_or_else(|| profile.titles.clone());
    let typewriter_config = TypewriterConfig::new(phrases, config.timings).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "invalid typewriter configuration, using profile name");
        TypewriterConfig::single(profile.name.clone())
    });

    let client = RawgClient::new(&config.api_base_url, config.api_key.clone(), config.page_size);
    if let Err(e) = &client {
        tracing::warn!(base_url = %config.api_base_url, error = %e, "invalid RAWG base URL");
    }

    AppState::new(
        config.start_route,
        profile,
        Typewriter::new(typewriter_config),
        client,
        theme,
    )
}

fn load_theme(config: &Config) -> Theme {
    if let Some(path) = infrastructure::resolve_user_file(config.theme_file.as_deref()) {
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path.display(), error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_profile(config: &Config) -> Profile {
    let Some(path) = infrastructure::resolve_user_file(config.profile_file.as_deref()) else {
        return Profile::default();
    };

    Profile::from_file(&path).unwrap_or_else(|e| {
        tracing::debug!(profile_file = %path.display(), error = %e, "failed to load profile, using default");
        Profile::default()
    })
}
