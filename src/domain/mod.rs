//! Domain layer for the sidebar navigation core.
//!
//! This module contains the workspace model and the index-tracking rules,
//! independent of any view toolkit. Nothing here renders, animates, or blocks:
//! every operation leaves the model fully consistent the moment it returns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: `WorkspaceItem`, the leaf entity
//! - [`workspace`]: `Workspace` and its select/pin/delete rules
//! - [`directory`]: `WorkspaceDirectory` with current/previous tracking
//! - [`generator`]: Default workspace generation
//!
//! # Examples
//!
//! ```
//! use sidebar_explorer::domain::{Workspace, WorkspaceDirectory, WorkspaceItem};
//!
//! let item = WorkspaceItem::new("Project 1", "", "folder");
//! let id = item.id();
//! let mut directory = WorkspaceDirectory::new(Workspace::new("Files", "folder", vec![item], vec![]));
//!
//! directory.current_mut().select_item(id);
//! assert_eq!(directory.current().selected_item_id(), Some(id));
//! ```

pub mod directory;
pub mod error;
pub mod generator;
pub mod item;
pub mod workspace;

pub use directory::{Direction, Removal, Transition, WorkspaceDirectory};
pub use error::{Result, SidebarError};
pub use item::WorkspaceItem;
pub use workspace::{PinChange, Workspace};
