//! Navigation controller state and view model computation.
//!
//! [`AppState`] owns the [`WorkspaceDirectory`] together with the few pieces of
//! transient UI state the controller needs: the random source for default
//! workspaces, the scroll gesture tracker, and whether the workspace menu is
//! open. View models are computed on demand from a state snapshot.
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::{initialize, Config};
//!
//! let config = Config { seed: Some(1), ..Default::default() };
//! let state = initialize(&config);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.tabs.len(), 1);
//! assert_eq!(viewmodel.workspace.title, "Files");
//! ```

use rand::rngs::StdRng;

use super::gesture::ScrollGesture;
use crate::domain::generator::next_default_workspace;
use crate::domain::{Transition, Workspace, WorkspaceDirectory, WorkspaceItem};
use crate::ui::viewmodel::{ItemCell, MenuEntry, SidebarViewModel, TabButton, WorkspaceView};

/// Central navigation state container.
///
/// Mutated only by the event handler, read by the view layer.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every workspace plus current/previous tracking.
    pub directory: WorkspaceDirectory,

    /// Whether the workspace list menu is showing.
    ///
    /// Any directory change closes it.
    pub menu_open: bool,

    pub(crate) gesture: ScrollGesture,

    rng: StdRng,
}

impl AppState {
    /// Creates a state seeded with the first default workspace drawn from `rng`.
    #[must_use]
    pub fn new(mut rng: StdRng, gesture: ScrollGesture) -> Self {
        let initial = next_default_workspace(0, &mut rng);
        Self::with_directory(WorkspaceDirectory::new(initial), rng, gesture)
    }

    /// Creates a state around an existing directory.
    #[must_use]
    pub fn with_directory(directory: WorkspaceDirectory, rng: StdRng, gesture: ScrollGesture) -> Self {
        Self {
            directory,
            menu_open: false,
            gesture,
            rng,
        }
    }

    #[must_use]
    pub fn current_workspace(&self) -> &Workspace {
        self.directory.current()
    }

    /// Generates the next default workspace and appends it as current.
    ///
    /// Generated workspaces always carry a fresh id, so this cannot be refused.
    pub fn add_default_workspace(&mut self) -> Option<Transition> {
        let workspace = next_default_workspace(self.directory.len(), &mut self.rng);
        self.directory.add(workspace)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// The tab strip lists every workspace in order, the menu (when open) adds
    /// an "Add Workspace" entry after them, and the workspace view reports where
    /// the selected item sits in either collection.
    #[must_use]
    pub fn compute_viewmodel(&self) -> SidebarViewModel {
        let current_index = self.directory.current_index();

        let tabs = self
            .directory
            .workspaces()
            .iter()
            .enumerate()
            .map(|(index, workspace)| TabButton {
                index,
                workspace_id: workspace.id(),
                name: workspace.name.clone(),
                icon: workspace.icon.clone(),
                is_selected: index == current_index,
            })
            .collect();

        let menu = self.menu_open.then(|| self.compute_menu());

        SidebarViewModel {
            tabs,
            menu,
            workspace: Self::compute_workspace_view(self.current_workspace()),
        }
    }

    fn compute_menu(&self) -> Vec<MenuEntry> {
        let current_index = self.directory.current_index();
        self.directory
            .workspaces()
            .iter()
            .enumerate()
            .map(|(index, workspace)| MenuEntry::Workspace {
                index,
                name: workspace.name.clone(),
                icon: workspace.icon.clone(),
                checked: index == current_index,
            })
            .chain(std::iter::once(MenuEntry::AddWorkspace))
            .collect()
    }

    fn compute_workspace_view(workspace: &Workspace) -> WorkspaceView {
        let cells = |items: &[WorkspaceItem]| items.iter().map(ItemCell::from).collect::<Vec<_>>();
        let selected_id = workspace.selected_item_id();
        let selected_in = |items: &[WorkspaceItem]| {
            selected_id.and_then(|id| items.iter().position(|item| item.id() == id))
        };

        WorkspaceView {
            workspace_id: workspace.id(),
            title: workspace.name.clone(),
            icon: workspace.icon.clone(),
            pinned: cells(workspace.pinned_items()),
            items: cells(workspace.list_items()),
            selected_pinned_index: selected_in(workspace.pinned_items()),
            selected_list_index: selected_in(workspace.list_items()),
        }
    }
}
