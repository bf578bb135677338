//! View model types representing renderable sidebar state.
//!
//! View models are immutable snapshots computed via
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by a renderer. They contain no business logic, only display-ready
//! data: which tab is highlighted, which menu entry is checked, which cell is
//! selected.
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::ui::viewmodel::MenuEntry;
//!
//! let entry = MenuEntry::Workspace {
//!     index: 0,
//!     name: "Files".to_string(),
//!     icon: "folder".to_string(),
//!     checked: true,
//! };
//! assert_ne!(entry, MenuEntry::AddWorkspace);
//! ```

use serde::Serialize;
use uuid::Uuid;

use crate::domain::WorkspaceItem;

/// Complete sidebar view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarViewModel {
    /// One button per workspace, in directory order.
    pub tabs: Vec<TabButton>,

    /// Workspace list menu, present while it is open.
    pub menu: Option<Vec<MenuEntry>>,

    /// Content of the current workspace.
    pub workspace: WorkspaceView,
}

/// A workspace button in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabButton {
    pub index: usize,
    pub workspace_id: Uuid,
    pub name: String,
    pub icon: String,
    /// Whether this is the current workspace.
    pub is_selected: bool,
}

/// An entry of the workspace list menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MenuEntry {
    /// Picks the workspace at `index`.
    Workspace {
        index: usize,
        name: String,
        icon: String,
        /// Shown with a check mark when current.
        checked: bool,
    },
    /// Trailing "Add Workspace" entry, after a separator.
    AddWorkspace,
}

/// Content area for the current workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceView {
    pub workspace_id: Uuid,
    pub title: String,
    pub icon: String,
    /// Pinned grid cells, most recently pinned first.
    pub pinned: Vec<ItemCell>,
    /// List rows in display order.
    pub items: Vec<ItemCell>,
    /// Position of the selected item in `pinned`, if it lives there.
    pub selected_pinned_index: Option<usize>,
    /// Position of the selected item in `items`, if it lives there.
    pub selected_list_index: Option<usize>,
}

/// A single list row or pinned tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCell {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub is_selected: bool,
}

impl From<&WorkspaceItem> for ItemCell {
    fn from(item: &WorkspaceItem) -> Self {
        Self {
            id: item.id(),
            title: item.title.clone(),
            description: item.description.clone(),
            icon: item.icon.clone(),
            is_selected: item.is_selected(),
        }
    }
}
