//! Ordered workspace collection with current/previous position tracking.
//!
//! [`WorkspaceDirectory`] is the navigation controller's model: it owns every
//! workspace, knows which one is current, and remembers which one was current
//! before the last change so the view can pick a slide direction.
//!
//! # Index rules
//!
//! - `current_index` always addresses an existing workspace.
//! - The directory never drops below one workspace.
//! - `previous_index` is only used to derive a [`Direction`]. It may point past
//!   the end after a removal.
//!
//! # Checked and tolerant operations
//!
//! Every mutation comes in two flavours. The `try_*` variants report why a
//! request was refused through [`SidebarError`]. The plain variants wrap them
//! and return `None` for a refused request, which is what the view layer uses:
//! it only ever passes indices taken from its own snapshot of the directory.

use serde::Serialize;
use uuid::Uuid;

use super::error::{Result, SidebarError};
use super::workspace::Workspace;

/// Slide direction for a workspace transition.
///
/// Purely presentational: it tells the view which side the incoming workspace
/// enters from and carries no meaning for state correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Incoming workspace slides in from the right.
    Forward,
    /// Incoming workspace slides in from the left.
    Backward,
}

impl Direction {
    /// Direction of a move from `previous` to `current`.
    ///
    /// ```
    /// use sidebar_explorer::Direction;
    ///
    /// assert_eq!(Direction::between(1, 3), Direction::Forward);
    /// assert_eq!(Direction::between(3, 0), Direction::Backward);
    /// ```
    #[must_use]
    pub const fn between(previous: usize, current: usize) -> Self {
        if current > previous {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// A change of the active workspace, as reported to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Id of the workspace that is now current.
    pub workspace_id: Uuid,
    /// Its position in the directory.
    pub index: usize,
    pub direction: Direction,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct Removal {
    /// The workspace taken out of the directory.
    pub removed: Workspace,
    /// Set when the removed workspace was current and another one took its place.
    pub transition: Option<Transition>,
}

/// Ordered, non-empty sequence of workspaces with a current position.
///
/// # Examples
///
/// ```
/// use sidebar_explorer::{Direction, Workspace, WorkspaceDirectory};
///
/// let mut directory = WorkspaceDirectory::new(Workspace::new("Files", "folder", vec![], vec![]));
/// directory.add(Workspace::new("Projects", "macwindow", vec![], vec![]));
/// assert_eq!(directory.current_index(), 1);
///
/// let transition = directory.switch_to(0).unwrap();
/// assert_eq!(transition.direction, Direction::Backward);
/// assert_eq!(directory.previous_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct WorkspaceDirectory {
    workspaces: Vec<Workspace>,
    current_index: usize,
    previous_index: usize,
}

impl WorkspaceDirectory {
    /// Creates a directory holding a single current workspace.
    #[must_use]
    pub fn new(initial: Workspace) -> Self {
        Self {
            workspaces: vec![initial],
            current_index: 0,
            previous_index: 0,
        }
    }

    /// Creates a directory from an existing sequence.
    ///
    /// # Errors
    ///
    /// - [`SidebarError::LastWorkspace`] if `workspaces` is empty
    /// - [`SidebarError::IndexOutOfRange`] if `current_index` is past the end
    /// - [`SidebarError::DuplicateWorkspace`] if two workspaces share an id
    pub fn from_workspaces(workspaces: Vec<Workspace>, current_index: usize) -> Result<Self> {
        if workspaces.is_empty() {
            return Err(SidebarError::LastWorkspace);
        }
        if current_index >= workspaces.len() {
            return Err(SidebarError::IndexOutOfRange {
                index: current_index,
                len: workspaces.len(),
            });
        }
        for (i, workspace) in workspaces.iter().enumerate() {
            if workspaces[..i].iter().any(|other| other.id() == workspace.id()) {
                return Err(SidebarError::DuplicateWorkspace(workspace.id()));
            }
        }

        Ok(Self {
            workspaces,
            current_index,
            previous_index: current_index,
        })
    }

    #[must_use]
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    /// Returns `true` if the directory holds no workspaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn previous_index(&self) -> usize {
        self.previous_index
    }

    #[must_use]
    pub fn current(&self) -> &Workspace {
        &self.workspaces[self.current_index]
    }

    /// Mutable access to the current workspace, for item-level operations.
    pub fn current_mut(&mut self) -> &mut Workspace {
        &mut self.workspaces[self.current_index]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Workspace> {
        self.workspaces.get(index)
    }

    #[must_use]
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.workspaces.iter().position(|workspace| workspace.id() == id)
    }

    /// Appends a workspace and makes it current.
    ///
    /// # Errors
    ///
    /// [`SidebarError::DuplicateWorkspace`] if a workspace with the same id is
    /// already in the directory.
    pub fn try_add(&mut self, workspace: Workspace) -> Result<Transition> {
        if self.position(workspace.id()).is_some() {
            return Err(SidebarError::DuplicateWorkspace(workspace.id()));
        }

        let workspace_id = workspace.id();
        self.workspaces.push(workspace);
        self.previous_index = self.current_index;
        self.current_index = self.workspaces.len() - 1;

        tracing::debug!(
            index = self.current_index,
            previous_index = self.previous_index,
            count = self.workspaces.len(),
            "workspace added"
        );
        self.debug_check_invariants();

        Ok(Transition {
            workspace_id,
            index: self.current_index,
            direction: Direction::Forward,
        })
    }

    /// Tolerant form of [`try_add`](Self::try_add).
    pub fn add(&mut self, workspace: Workspace) -> Option<Transition> {
        self.try_add(workspace)
            .map_err(|e| tracing::debug!(error = %e, "add workspace ignored"))
            .ok()
    }

    /// Removes the workspace at `index`, retargeting the current position.
    ///
    /// The current position is retargeted before the removal:
    ///
    /// - removing the current workspace selects its predecessor, or the new
    ///   head when the current workspace was first;
    /// - removing a workspace before the current one shifts the position left
    ///   so it keeps pointing at the same workspace;
    /// - removing a workspace after the current one leaves it alone.
    ///
    /// When the current workspace was removed, the returned transition slides
    /// forward if it was the head (its successor comes in from the right) and
    /// backward otherwise.
    ///
    /// # Errors
    ///
    /// - [`SidebarError::IndexOutOfRange`] if `index` is past the end
    /// - [`SidebarError::LastWorkspace`] if only one workspace is left
    pub fn try_remove(&mut self, index: usize) -> Result<Removal> {
        let len = self.workspaces.len();
        if index >= len {
            return Err(SidebarError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(SidebarError::LastWorkspace);
        }

        self.previous_index = self.current_index;
        let removing_current = index == self.current_index;

        if removing_current {
            self.current_index = index.saturating_sub(1);
        } else if index < self.current_index {
            self.current_index -= 1;
        }

        let removed = self.workspaces.remove(index);

        if self.current_index >= self.workspaces.len() {
            self.current_index = self.workspaces.len().saturating_sub(1);
        }

        let transition = removing_current.then(|| Transition {
            workspace_id: self.current().id(),
            index: self.current_index,
            direction: if index == 0 {
                Direction::Forward
            } else {
                Direction::Backward
            },
        });

        tracing::debug!(
            removed_index = index,
            removed = %removed.name,
            index = self.current_index,
            previous_index = self.previous_index,
            count = self.workspaces.len(),
            "workspace removed"
        );
        self.debug_check_invariants();

        Ok(Removal { removed, transition })
    }

    /// Tolerant form of [`try_remove`](Self::try_remove).
    pub fn remove(&mut self, index: usize) -> Option<Removal> {
        self.try_remove(index)
            .map_err(|e| tracing::debug!(error = %e, "remove workspace ignored"))
            .ok()
    }

    /// Makes the workspace at `index` current.
    ///
    /// # Errors
    ///
    /// - [`SidebarError::AlreadyCurrent`] if `index` is the current position
    /// - [`SidebarError::IndexOutOfRange`] if `index` is past the end
    pub fn try_switch_to(&mut self, index: usize) -> Result<Transition> {
        if index == self.current_index {
            return Err(SidebarError::AlreadyCurrent { index });
        }
        if index >= self.workspaces.len() {
            return Err(SidebarError::IndexOutOfRange {
                index,
                len: self.workspaces.len(),
            });
        }

        self.previous_index = self.current_index;
        self.current_index = index;
        let direction = Direction::between(self.previous_index, self.current_index);

        tracing::debug!(
            index,
            previous_index = self.previous_index,
            direction = ?direction,
            "switched workspace"
        );
        self.debug_check_invariants();

        Ok(Transition {
            workspace_id: self.current().id(),
            index,
            direction,
        })
    }

    /// Tolerant form of [`try_switch_to`](Self::try_switch_to).
    pub fn switch_to(&mut self, index: usize) -> Option<Transition> {
        self.try_switch_to(index)
            .map_err(|e| tracing::trace!(error = %e, "switch workspace ignored"))
            .ok()
    }

    fn debug_check_invariants(&self) {
        debug_assert!(!self.workspaces.is_empty(), "directory emptied");
        debug_assert!(
            self.current_index < self.workspaces.len(),
            "current index {} out of bounds ({} workspaces)",
            self.current_index,
            self.workspaces.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Workspace {
        Workspace::new(name, "folder", vec![], vec![])
    }

    fn directory(count: usize, current: usize) -> WorkspaceDirectory {
        let workspaces = (0..count).map(|i| named(&format!("ws{i}"))).collect();
        WorkspaceDirectory::from_workspaces(workspaces, current).unwrap()
    }

    fn names(directory: &WorkspaceDirectory) -> Vec<&str> {
        directory.workspaces().iter().map(|ws| ws.name.as_str()).collect()
    }

    #[test]
    fn add_appends_and_becomes_current() {
        let mut dir = directory(2, 0);
        let added = named("new");
        let id = added.id();

        let transition = dir.add(added).unwrap();
        assert_eq!(dir.current_index(), 2);
        assert_eq!(dir.previous_index(), 0);
        assert_eq!(transition.workspace_id, id);
        assert_eq!(transition.direction, Direction::Forward);
    }

    #[test]
    fn add_refuses_duplicate_id() {
        let mut dir = directory(1, 0);
        let copy = dir.current().clone();

        assert!(matches!(dir.try_add(copy), Err(SidebarError::DuplicateWorkspace(_))));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn removing_current_moves_to_predecessor() {
        let mut dir = directory(4, 2);
        let removal = dir.remove(2).unwrap();

        assert_eq!(removal.removed.name, "ws2");
        assert_eq!(dir.current_index(), 1);
        assert_eq!(dir.previous_index(), 2);
        assert_eq!(dir.current().name, "ws1");
        let transition = removal.transition.unwrap();
        assert_eq!(transition.direction, Direction::Backward);
        assert_eq!(transition.index, 1);
    }

    #[test]
    fn removing_before_current_tracks_same_workspace() {
        let mut dir = directory(4, 2);
        let removal = dir.remove(0).unwrap();

        assert_eq!(dir.current_index(), 1);
        assert_eq!(dir.current().name, "ws2");
        assert!(removal.transition.is_none());
    }

    #[test]
    fn removing_after_current_leaves_position() {
        let mut dir = directory(4, 2);
        dir.remove(3).unwrap();

        assert_eq!(dir.current_index(), 2);
        assert_eq!(names(&dir), ["ws0", "ws1", "ws2"]);
    }

    #[test]
    fn removing_current_head_selects_new_head() {
        let mut dir = directory(3, 0);
        let removal = dir.remove(0).unwrap();

        assert_eq!(dir.current_index(), 0);
        assert_eq!(dir.current().name, "ws1");
        assert_eq!(removal.transition.unwrap().direction, Direction::Forward);
    }

    #[test]
    fn removing_current_tail_stays_in_bounds() {
        let mut dir = directory(3, 2);
        dir.remove(2).unwrap();

        assert_eq!(dir.current_index(), 1);
        assert_eq!(dir.current().name, "ws1");
    }

    #[test]
    fn last_workspace_is_never_removed() {
        let mut dir = directory(1, 0);

        assert!(matches!(dir.try_remove(0), Err(SidebarError::LastWorkspace)));
        assert!(dir.remove(0).is_none());
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.current_index(), 0);
        assert!(!dir.is_empty());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut dir = directory(3, 1);

        assert!(matches!(
            dir.try_remove(3),
            Err(SidebarError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(dir.len(), 3);
        assert_eq!(dir.current_index(), 1);
        assert_eq!(dir.previous_index(), 1);
    }

    #[test]
    fn switch_reports_direction() {
        let mut dir = directory(4, 1);

        let forward = dir.switch_to(3).unwrap();
        assert_eq!(dir.previous_index(), 1);
        assert_eq!(dir.current_index(), 3);
        assert_eq!(forward.direction, Direction::Forward);

        let backward = dir.switch_to(0).unwrap();
        assert_eq!(backward.direction, Direction::Backward);
        assert_eq!(dir.previous_index(), 3);
    }

    #[test]
    fn switch_to_current_changes_nothing() {
        let mut dir = directory(3, 1);
        dir.switch_to(2);
        dir.switch_to(1);

        assert!(matches!(dir.try_switch_to(1), Err(SidebarError::AlreadyCurrent { index: 1 })));
        assert_eq!(dir.current_index(), 1);
        assert_eq!(dir.previous_index(), 2);
    }

    #[test]
    fn switch_out_of_range_is_noop() {
        let mut dir = directory(2, 0);

        assert!(dir.switch_to(5).is_none());
        assert_eq!(dir.current_index(), 0);
    }

    #[test]
    fn back_to_back_operations_keep_indices_valid() {
        let mut dir = directory(1, 0);
        for i in 0..5 {
            dir.add(named(&format!("extra{i}")));
        }
        dir.switch_to(2);
        dir.remove(0);
        dir.remove(4);
        dir.remove(1);
        dir.switch_to(0);
        dir.remove(0);

        assert!(dir.current_index() < dir.len());
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn from_workspaces_validates_input() {
        assert!(matches!(
            WorkspaceDirectory::from_workspaces(vec![], 0),
            Err(SidebarError::LastWorkspace)
        ));
        assert!(matches!(
            WorkspaceDirectory::from_workspaces(vec![named("a")], 1),
            Err(SidebarError::IndexOutOfRange { index: 1, len: 1 })
        ));
        let ws = named("a");
        assert!(matches!(
            WorkspaceDirectory::from_workspaces(vec![ws.clone(), ws], 0),
            Err(SidebarError::DuplicateWorkspace(_))
        ));
    }
}
