//! Workspace model and its item mutation rules.
//!
//! A [`Workspace`] owns two ordered item collections: the scrollable list and
//! the pinned grid. Every mutation keeps two invariants:
//!
//! - **Exclusive membership**: an item id lives in at most one collection.
//! - **Single selection**: at most one item has its selection flag set, and it
//!   is the item referenced by [`Workspace::selected_item_id`].
//!
//! Lookups by an unknown id are silent no-ops. Callers derive ids from the
//! items they just rendered, so a miss means the view is one step behind the
//! model and nothing should happen.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use super::item::WorkspaceItem;

/// Which way [`Workspace::toggle_pinned`] moved an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PinChange {
    /// Moved from the list to the front of the pinned grid.
    Pinned,
    /// Moved from the pinned grid to the front of the list.
    Unpinned,
}

/// A named, iconified container of listed and pinned items.
///
/// # Examples
///
/// ```
/// use sidebar_explorer::{PinChange, Workspace, WorkspaceItem};
///
/// let notes = WorkspaceItem::new("Notes", "", "note.text");
/// let id = notes.id();
/// let mut workspace = Workspace::new("Files", "folder", vec![notes], vec![]);
///
/// assert_eq!(workspace.toggle_pinned(id), Some(PinChange::Pinned));
/// assert!(workspace.list_items().is_empty());
/// assert_eq!(workspace.pinned_items()[0].id(), id);
/// ```
///
/// Workspaces are only built through the checked constructors:
///
/// ```compile_fail
/// use sidebar_explorer::Workspace;
///
/// let _: Workspace = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Workspace {
    id: Uuid,
    pub name: String,
    /// Symbolic icon name.
    pub icon: String,
    list_items: Vec<WorkspaceItem>,
    /// Most recently pinned first.
    pinned_items: Vec<WorkspaceItem>,
    selected_item_id: Option<Uuid>,
}

impl Workspace {
    /// Creates a workspace with a fresh id and no selection.
    ///
    /// Selection flags carried by the supplied items are cleared. Each id is
    /// kept only at its first occurrence, scanning the list before the pinned
    /// grid, so a repeated item survives once and in one collection.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        list_items: Vec<WorkspaceItem>,
        pinned_items: Vec<WorkspaceItem>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, icon, list_items, pinned_items)
    }

    /// Creates a workspace with an explicit id.
    #[must_use]
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        icon: impl Into<String>,
        mut list_items: Vec<WorkspaceItem>,
        mut pinned_items: Vec<WorkspaceItem>,
    ) -> Self {
        let mut seen = HashSet::new();
        list_items.retain(|item| seen.insert(item.id()));
        pinned_items.retain(|item| seen.insert(item.id()));
        for item in list_items.iter_mut().chain(pinned_items.iter_mut()) {
            item.is_selected = false;
        }

        let workspace = Self {
            id,
            name: name.into(),
            icon: icon.into(),
            list_items,
            pinned_items,
            selected_item_id: None,
        };
        workspace.debug_check_invariants();
        workspace
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Listed items in display order.
    #[must_use]
    pub fn list_items(&self) -> &[WorkspaceItem] {
        &self.list_items
    }

    /// Pinned items, most recently pinned first.
    #[must_use]
    pub fn pinned_items(&self) -> &[WorkspaceItem] {
        &self.pinned_items
    }

    #[must_use]
    pub const fn selected_item_id(&self) -> Option<Uuid> {
        self.selected_item_id
    }

    /// Returns the selected item, wherever it lives.
    #[must_use]
    pub fn selected_item(&self) -> Option<&WorkspaceItem> {
        let id = self.selected_item_id?;
        self.find(id)
    }

    /// Looks an item up by id in the list first, then in the pinned grid.
    #[must_use]
    pub fn find(&self, id: Uuid) -> Option<&WorkspaceItem> {
        self.list_items
            .iter()
            .chain(self.pinned_items.iter())
            .find(|item| item.id() == id)
    }

    /// Selects the item with the given id, clearing any previous selection.
    ///
    /// The previous selection is cleared even when `id` matches nothing, in
    /// which case the workspace ends up with no selection at all.
    ///
    /// Returns `true` if an item was selected.
    pub fn select_item(&mut self, id: Uuid) -> bool {
        for item in self.list_items.iter_mut().chain(self.pinned_items.iter_mut()) {
            item.is_selected = false;
        }
        self.selected_item_id = None;

        let target = self
            .list_items
            .iter_mut()
            .find(|item| item.id() == id)
            .or_else(|| self.pinned_items.iter_mut().find(|item| item.id() == id));

        let found = if let Some(item) = target {
            item.is_selected = true;
            self.selected_item_id = Some(id);
            true
        } else {
            false
        };

        tracing::trace!(workspace = %self.name, item_id = %id, found, "item selection applied");
        self.debug_check_invariants();
        found
    }

    /// Moves an item between the list and the pinned grid.
    ///
    /// The moved item always lands at the front of its destination collection.
    /// Items left behind keep their relative order. Selection travels with the
    /// item.
    ///
    /// Returns `None` if `id` is in neither collection.
    pub fn toggle_pinned(&mut self, id: Uuid) -> Option<PinChange> {
        let change = if let Some(index) = position_of(&self.list_items, id) {
            let item = self.list_items.remove(index);
            self.pinned_items.insert(0, item);
            PinChange::Pinned
        } else if let Some(index) = position_of(&self.pinned_items, id) {
            let item = self.pinned_items.remove(index);
            self.list_items.insert(0, item);
            PinChange::Unpinned
        } else {
            tracing::trace!(workspace = %self.name, item_id = %id, "toggle pin ignored, unknown item");
            return None;
        };

        tracing::debug!(workspace = %self.name, item_id = %id, change = ?change, "item pin toggled");
        self.debug_check_invariants();
        Some(change)
    }

    /// Removes an item from whichever collection holds it.
    ///
    /// Deleting the selected item clears the selection; it is not handed to a
    /// neighbour. Returns the removed item, or `None` if `id` is unknown.
    pub fn delete_item(&mut self, id: Uuid) -> Option<WorkspaceItem> {
        let removed = if let Some(index) = position_of(&self.list_items, id) {
            Some(self.list_items.remove(index))
        } else {
            position_of(&self.pinned_items, id).map(|index| self.pinned_items.remove(index))
        };

        if self.selected_item_id == Some(id) {
            self.selected_item_id = None;
        }

        if removed.is_some() {
            tracing::debug!(workspace = %self.name, item_id = %id, "item deleted");
        }
        self.debug_check_invariants();
        removed
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            for pinned in &self.pinned_items {
                debug_assert!(
                    position_of(&self.list_items, pinned.id()).is_none(),
                    "item {} is both listed and pinned",
                    pinned.id()
                );
            }

            let mut selected = self
                .list_items
                .iter()
                .chain(self.pinned_items.iter())
                .filter(|item| item.is_selected());
            let first = selected.next();
            debug_assert!(selected.next().is_none(), "more than one item selected");
            debug_assert_eq!(
                first.map(WorkspaceItem::id),
                self.selected_item_id,
                "selection flag and selected id disagree"
            );
        }
    }
}

impl PartialEq for Workspace {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Workspace {}

fn position_of(items: &[WorkspaceItem], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
