//! User interface layer: view models and a plain-text renderer.
//!
//! Real pixel rendering, animation, and gesture plumbing belong to the host
//! toolkit. This layer only turns controller state into display-ready data.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → SidebarViewModel → render → Text Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain-text rendering of a view model
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::{initialize, Config};
//! use sidebar_explorer::ui::render;
//!
//! let state = initialize(&Config::default());
//! render(&state); // Renders to stdout
//! ```

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use viewmodel::{ItemCell, MenuEntry, SidebarViewModel, TabButton, WorkspaceView};
