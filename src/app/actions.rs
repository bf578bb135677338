//! Notifications emitted to the view layer.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions describe
//! what changed so the view can animate it; the model itself is already
//! consistent by the time they are delivered, so the view may execute them
//! fire-and-forget.
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::{Action, Direction, Transition};
//! use uuid::Uuid;
//!
//! let action = Action::WorkspaceSwitched(Transition {
//!     workspace_id: Uuid::new_v4(),
//!     index: 2,
//!     direction: Direction::Forward,
//! });
//! assert!(matches!(action, Action::WorkspaceSwitched(_)));
//! ```

use serde::Serialize;
use uuid::Uuid;

use crate::domain::Transition;

/// Outbound notification produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    /// A new tab was appended to the strip.
    ///
    /// Always followed by a [`Action::WorkspaceSwitched`] for the same workspace.
    WorkspaceAdded {
        workspace_id: Uuid,
        index: usize,
    },

    /// A tab was removed from the strip.
    WorkspaceRemoved {
        workspace_id: Uuid,
        /// Position the tab had before removal.
        index: usize,
    },

    /// The active workspace changed; slide its view in from `direction`.
    WorkspaceSwitched(Transition),

    /// The selection inside a workspace changed.
    ItemSelectionChanged {
        workspace_id: Uuid,
        /// `None` when the selection was cleared.
        item_id: Option<Uuid>,
    },

    /// Items moved between or disappeared from a workspace's collections.
    ItemsChanged {
        workspace_id: Uuid,
    },
}
