//! Sidebar Explorer: workspace navigation core for a sidebar shell.
//!
//! The sidebar shows a tab strip of workspaces. Each workspace holds a pinned
//! grid and a scrollable list of items. This crate implements everything
//! behind those pixels:
//! - Workspace and item model with single-selection and exclusive pin membership
//! - Workspace directory with current/previous index tracking
//! - Transition direction for add, remove, and switch
//! - Scroll-gesture and page-transition switching
//! - View models for the tab strip, workspace menu, and workspace content

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Headless Host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controller
//! │  - Event handling                                   │
//! │  - Action (notification) emission                   │
//! │  - Scroll gesture tracking                          │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Domain Layer          │   │ UI Layer (ui/)          │
//! │ (domain/)             │   │ - View models           │
//! │ - WorkspaceDirectory  │   │ - Text renderer         │
//! │ - Workspace / Item    │   └─────────────────────────┘
//! │ - Default generation  │
//! └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller state machine with event/action model
//! - [`domain`]: Workspace model, directory, errors, default generation
//! - [`infrastructure`]: Data directory resolution
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # sidebar-explorer.toml
//! trace_level = "debug"
//! data_dir = "~/.local/share/sidebar-explorer"
//! scroll_delta_threshold = 20.0
//! scroll_interval_ms = 500
//! seed = 42
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sidebar_explorer::{handle_event, initialize, Action, Config, Direction, Event};
//!
//! let mut state = initialize(&Config { seed: Some(42), ..Default::default() });
//! handle_event(&mut state, &Event::AddWorkspace)?;
//! handle_event(&mut state, &Event::AddWorkspace)?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::SwitchWorkspace { index: 0 })?;
//! let Action::WorkspaceSwitched(transition) = &actions[0] else { unreachable!() };
//! assert_eq!(transition.direction, Direction::Backward);
//! assert_eq!(state.directory.previous_index(), 2);
//! # Ok::<(), sidebar_explorer::SidebarError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Minimum of One Workspace
//!
//! The directory refuses to remove its last workspace, so there is always a
//! current workspace to show.
//!
//! ## Tolerant Mutations
//!
//! Unknown ids and out-of-range indices are no-ops. The view always derives its
//! arguments from the state it just rendered, so a miss means the two are
//! briefly out of step, not that something is broken.
//!
//! ## State Before Animation
//!
//! Every operation finishes before returning. Actions describe transitions to
//! animate, but nothing in the model waits on them.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ScrollGesture};
pub use domain::{
    Direction, PinChange, Removal, Result, SidebarError, Transition, Workspace,
    WorkspaceDirectory, WorkspaceItem,
};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

/// Host configuration.
///
/// Loaded from a TOML file ([`Config::from_file`]) or a flat key/value map
/// ([`Config::from_map`]). Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive for logging.
    ///
    /// Options include `trace`, `debug`, `info`, `warn`, `error`, or per-module
    /// directives. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the log file. `~` is expanded.
    ///
    /// Default: see [`infrastructure::default_data_dir`].
    pub data_dir: Option<String>,

    /// Minimum absolute horizontal scroll delta that counts as a swipe.
    ///
    /// Default: `20.0`
    pub scroll_delta_threshold: f64,

    /// Minimum milliseconds between two accepted swipes.
    ///
    /// Default: `500`
    pub scroll_interval_ms: u64,

    /// Seed for default workspace generation.
    ///
    /// Unset means a fresh random seed per run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            data_dir: None,
            scroll_delta_threshold: app::gesture::DEFAULT_DELTA_THRESHOLD,
            scroll_interval_ms: 500,
            seed: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Values that fail to parse fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use sidebar_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("scroll_interval_ms".to_string(), "250".to_string());
    /// map.insert("seed".to_string(), "not-a-number".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.scroll_interval_ms, 250);
    /// assert_eq!(config.seed, None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            map.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        Self {
            trace_level: non_empty("trace_level").map(String::from),
            data_dir: non_empty("data_dir").map(String::from),
            scroll_delta_threshold: non_empty("scroll_delta_threshold")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|value| value.is_finite() && *value >= 0.0)
                .unwrap_or(defaults.scroll_delta_threshold),
            scroll_interval_ms: non_empty("scroll_interval_ms")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.scroll_interval_ms),
            seed: non_empty("seed").and_then(|s| s.parse::<u64>().ok()),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`SidebarError::Io`] if the file cannot be read
    /// - [`SidebarError::Toml`] if it is not valid TOML for this struct
    /// - [`SidebarError::Config`] if `scroll_delta_threshold` is negative or not finite
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&raw)?;

        if !config.scroll_delta_threshold.is_finite() || config.scroll_delta_threshold < 0.0 {
            return Err(SidebarError::Config(format!(
                "scroll_delta_threshold must be a non-negative number, got {}",
                config.scroll_delta_threshold
            )));
        }

        tracing::debug!(path = %path.as_ref().display(), "loaded configuration file");
        Ok(config)
    }

    /// Directory where logs are written.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::default_data_dir, infrastructure::expand_tilde)
    }

    #[must_use]
    pub const fn scroll_interval(&self) -> Duration {
        Duration::from_millis(self.scroll_interval_ms)
    }
}

/// Creates the controller state described by `config`.
///
/// The directory starts with one generated default workspace ("Files").
///
/// # Example
///
/// ```rust
/// use sidebar_explorer::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.directory.len(), 1);
/// assert_eq!(state.directory.current_index(), 0);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed = ?config.seed, "initializing sidebar state");

    let rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let gesture = ScrollGesture::new(config.scroll_delta_threshold, config.scroll_interval());

    AppState::new(rng, gesture)
}
