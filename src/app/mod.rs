//! Application layer: the navigation controller.
//!
//! This module sits between the view layer (or the headless host in
//! `main.rs`) and the domain model. View triggers arrive as events, the handler
//! mutates the directory or the current workspace, and the resulting
//! notifications go back out as actions.
//!
//! # Architecture
//!
//! ```text
//! View Trigger → Event → handle_event → State Mutation → Actions → View
//!                                            ↓
//!                                  compute_viewmodel → Render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Notifications emitted to the view layer
//! - [`handler`]: Event processing and state transition coordinator
//! - [`gesture`]: Horizontal scroll gesture detection
//! - [`state`]: Controller state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::SwitchWorkspace { index: 0 })?;
//! assert!(!should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), sidebar_explorer::SidebarError>(())
//! ```

pub mod actions;
pub mod gesture;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use gesture::ScrollGesture;
pub use handler::{handle_event, Event};
pub use state::AppState;
