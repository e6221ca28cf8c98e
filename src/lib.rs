//! Castlist: a Zellij plugin for browsing a catalog of actor profiles.
//!
//! The plugin shows one catalog page: a fixed list of actors that can be
//! narrowed with a free-text name search and three categorical filters
//! (age bracket, experience tier, genre). Edits to the filters are staged;
//! the displayed list only changes on an explicit search or reset.

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
//! │  Application Layer (app/)                           │
//! │  - Event handling and focus                         │
//! │  - Session transitions (criteria + result)          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Filter Engine │   │ Catalog Store │
//! │ (ui/)         │   │ (filter/)     │   │ (catalog/)    │
//! │ - Layouts     │   │ - Predicates  │   │ - TOML load   │
//! │ - Themes      │   │ - apply()     │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Actor, filter criteria, errors (domain/)         │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry file tracing (observability/)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state, events, actions and the search session
//! - [`catalog`]: The read-only actor catalog
//! - [`domain`]: Actor record, filter criteria and error types
//! - [`filter`]: Pure filter predicates over the catalog
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Layouts, themes and rendering
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/castlist.wasm" {
//!         theme "studio-light"
//!         layout "compact"
//!         catalog_file "~/castlist/actors.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use castlist::domain::{AgeBracket, ExperienceTier, GenreToken};
//! use castlist::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let events = [
//!     Event::SelectAgeFilter(Some(AgeBracket::ThirtyToForty)),
//!     Event::SelectExperienceFilter(Some(ExperienceTier::Experienced)),
//!     Event::SelectGenreFilter(Some(GenreToken::Drama)),
//!     Event::Search,
//! ];
//! for event in &events {
//!     let (_should_render, _actions) = handle_event(&mut state, event)?;
//! }
//!
//! assert_eq!(state.session.result_count(), 1);
//! assert_eq!(state.session.result()[0].name, "Александр Соколов");
//! # Ok::<(), castlist::CastlistError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus, Session};
pub use catalog::Catalog;
pub use domain::{Actor, CastlistError, FilterCriteria, Result};
pub use ui::{LayoutKind, Theme};

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Values are kept as given; they are validated in [`initialize`], where a
/// bad value falls back to its default instead of failing the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name: `hollywood-noir` (default) or `studio-light`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Result list presentation: `poster` (default) or `compact`.
    pub layout: Option<String>,

    /// Path to a TOML catalog replacing the bundled sample.
    pub catalog_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use castlist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "studio-light".to_string());
    /// map.insert("layout".to_string(), "compact".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("studio-light"));
    /// assert_eq!(config.layout.as_deref(), Some("compact"));
    /// assert_eq!(config.catalog_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            layout: get("layout"),
            catalog_file: get("catalog_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// Every option that cannot be honored (unknown theme or layout name,
/// unreadable or invalid theme or catalog file) is logged at debug level and
/// replaced by its default.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = load_catalog(config);
    let theme = load_theme(config);
    let layout = resolve_layout(config);

    tracing::debug!(
        actors = catalog.len(),
        theme = %theme.name,
        layout = %layout,
        "castlist initialized"
    );

    AppState::new(catalog, theme, layout)
}

fn load_catalog(config: &Config) -> Catalog {
    let Some(catalog_file) = &config.catalog_file else {
        return Catalog::builtin();
    };

    let path = expand_tilde(catalog_file);
    Catalog::from_file(&path).unwrap_or_else(|e| {
        tracing::debug!(catalog_file = %path, error = %e, "failed to load catalog, using bundled sample");
        Catalog::builtin()
    })
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
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

fn resolve_layout(config: &Config) -> LayoutKind {
    config.layout.as_ref().map_or_else(LayoutKind::default, |name| {
        name.parse().unwrap_or_else(|e: CastlistError| {
            tracing::debug!(layout = %name, error = %e, "unknown layout, using default");
            LayoutKind::default()
        })
    })
}
