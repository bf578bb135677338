//! Workspace item model.
//!
//! A [`WorkspaceItem`] is the unit of content shown in a workspace, either as a
//! row of the scrollable list or as a tile of the pinned grid.

use serde::Serialize;
use uuid::Uuid;

/// A titled, iconified unit of content with a stable identity.
///
/// Equality is by `id` only: two values with the same id are the same item even
/// if one of them carries a stale selection flag.
///
/// `is_selected` is only changed through [`Workspace::select_item`](super::Workspace::select_item),
/// which is why it has no public setter.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceItem {
    id: Uuid,
    pub title: String,
    pub description: String,
    /// Symbolic icon name.
    pub icon: String,
    pub(crate) is_selected: bool,
}

impl WorkspaceItem {
    /// Creates an unselected item with a fresh random id.
    ///
    /// # Examples
    ///
    /// ```
    /// use sidebar_explorer::WorkspaceItem;
    ///
    /// let item = WorkspaceItem::new("Notes 1.txt", "Created today", "note.text");
    /// assert_eq!(item.title, "Notes 1.txt");
    /// assert!(!item.is_selected());
    /// ```
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, icon)
    }

    /// Creates an unselected item with an explicit id.
    #[must_use]
    pub fn with_id(
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            is_selected: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }
}

impl PartialEq for WorkspaceItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WorkspaceItem {}
