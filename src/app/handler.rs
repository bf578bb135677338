//! Event handling and state transition logic.
//!
//! This module implements the navigation controller: it receives the view
//! layer's trigger calls as [`Event`]s, applies them to [`AppState`], and
//! returns the notifications the view needs as [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! View trigger → Event → handle_event → Directory / Workspace mutation → Actions → View
//! ```
//!
//! Directory events (add, remove, switch, scroll, page transition) go through
//! [`WorkspaceDirectory`](crate::domain::WorkspaceDirectory). Item events
//! (select, pin, delete) go to the current workspace.
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config { seed: Some(3), ..Default::default() });
//! let (render, actions) = handle_event(&mut state, &Event::AddWorkspace)?;
//! assert!(render);
//! assert!(matches!(actions[1], Action::WorkspaceSwitched(_)));
//! # Ok::<(), sidebar_explorer::SidebarError>(())
//! ```

use std::time::Duration;

use uuid::Uuid;

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Transition, Workspace};

/// Inbound trigger calls from the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Generate the next default workspace and make it current.
    AddWorkspace,
    /// Append a caller-supplied workspace and make it current.
    InsertWorkspace(Workspace),
    /// Delete the workspace at this tab position.
    RemoveWorkspace { index: usize },
    /// Tab click or menu pick.
    SwitchWorkspace { index: usize },
    /// A paging container finished a live swipe and settled on `index`.
    PageTransitionEnded { index: usize },
    /// Raw horizontal scroll input.
    Scroll {
        delta_x: f64,
        /// Monotonic timestamp of the event.
        at: Duration,
    },
    /// Open or close the workspace list menu.
    ToggleWorkspaceMenu,
    SelectItem { id: Uuid },
    TogglePin { id: Uuid },
    DeleteItem { id: Uuid },
}

/// Processes an event, mutates state, and returns the notifications to deliver.
///
/// The returned flag tells the view whether it needs to re-render. Requests
/// that refer to indices or ids the model no longer has are ignored and yield
/// `(false, vec![])`.
///
/// # Errors
///
/// None of the current events fail; the `Result` keeps the signature stable
/// for hosts that propagate handler errors.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::AddWorkspace => {
            let transition = state.add_default_workspace();
            Ok(added(state, transition))
        }
        Event::InsertWorkspace(workspace) => {
            let transition = state.directory.add(workspace.clone());
            Ok(added(state, transition))
        }
        Event::RemoveWorkspace { index } => {
            let Some(removal) = state.directory.remove(*index) else {
                return Ok((false, vec![]));
            };
            state.menu_open = false;

            let mut actions = vec![Action::WorkspaceRemoved {
                workspace_id: removal.removed.id(),
                index: *index,
            }];
            if let Some(transition) = removal.transition {
                actions.push(Action::WorkspaceSwitched(transition));
            }
            Ok((true, actions))
        }
        Event::SwitchWorkspace { index } | Event::PageTransitionEnded { index } => {
            Ok(switched(state, *index))
        }
        Event::Scroll { delta_x, at } => {
            let current = state.directory.current_index();
            let count = state.directory.len();
            match state.gesture.on_scroll(*delta_x, *at, current, count) {
                Some(target) => Ok(switched(state, target)),
                None => Ok((false, vec![])),
            }
        }
        Event::ToggleWorkspaceMenu => {
            state.menu_open = !state.menu_open;
            tracing::debug!(menu_open = state.menu_open, "workspace menu toggled");
            Ok((true, vec![]))
        }
        Event::SelectItem { id } => {
            let workspace = state.directory.current_mut();
            let had_selection = workspace.selected_item_id();
            let found = workspace.select_item(*id);
            let item_id = found.then_some(*id);

            if had_selection == item_id {
                return Ok((false, vec![]));
            }
            Ok((
                true,
                vec![Action::ItemSelectionChanged {
                    workspace_id: workspace.id(),
                    item_id,
                }],
            ))
        }
        Event::TogglePin { id } => {
            let workspace = state.directory.current_mut();
            if workspace.toggle_pinned(*id).is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![Action::ItemsChanged { workspace_id: workspace.id() }]))
        }
        Event::DeleteItem { id } => {
            let workspace = state.directory.current_mut();
            let had_selection = workspace.selected_item_id();
            if workspace.delete_item(*id).is_none() {
                return Ok((false, vec![]));
            }

            let workspace_id = workspace.id();
            let mut actions = vec![Action::ItemsChanged { workspace_id }];
            if had_selection == Some(*id) {
                actions.push(Action::ItemSelectionChanged {
                    workspace_id,
                    item_id: None,
                });
            }
            Ok((true, actions))
        }
    }
}

fn added(state: &mut AppState, transition: Option<Transition>) -> (bool, Vec<Action>) {
    let Some(transition) = transition else {
        return (false, vec![]);
    };
    state.menu_open = false;
    (
        true,
        vec![
            Action::WorkspaceAdded {
                workspace_id: transition.workspace_id,
                index: transition.index,
            },
            Action::WorkspaceSwitched(transition),
        ],
    )
}

fn switched(state: &mut AppState, index: usize) -> (bool, Vec<Action>) {
    match state.directory.switch_to(index) {
        Some(transition) => {
            state.menu_open = false;
            (true, vec![Action::WorkspaceSwitched(transition)])
        }
        None => (false, vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gesture::ScrollGesture;
    use crate::domain::{Direction, WorkspaceDirectory, WorkspaceItem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_with(count: usize, current: usize) -> AppState {
        let workspaces = (0..count)
            .map(|i| {
                Workspace::new(
                    format!("ws{i}"),
                    "folder",
                    vec![WorkspaceItem::new("A", "", "doc"), WorkspaceItem::new("B", "", "doc")],
                    vec![WorkspaceItem::new("P", "", "star.fill")],
                )
            })
            .collect();
        let directory = WorkspaceDirectory::from_workspaces(workspaces, current).unwrap();
        AppState::with_directory(directory, StdRng::seed_from_u64(5), ScrollGesture::default())
    }

    fn run(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn add_emits_added_then_forward_switch() {
        let mut state = state_with(2, 0);
        let (render, actions) = run(&mut state, Event::AddWorkspace);

        assert!(render);
        assert_eq!(state.directory.current_index(), 2);
        assert!(matches!(actions[0], Action::WorkspaceAdded { index: 2, .. }));
        let Action::WorkspaceSwitched(transition) = &actions[1] else {
            panic!("expected switch, got {actions:?}");
        };
        assert_eq!(transition.direction, Direction::Forward);
        assert_eq!(state.current_workspace().name, "Notifications");
    }

    #[test]
    fn insert_supplied_workspace() {
        let mut state = state_with(1, 0);
        let custom = Workspace::new("Custom", "star", vec![], vec![]);
        let id = custom.id();

        let (_, actions) = run(&mut state, Event::InsertWorkspace(custom.clone()));
        assert_eq!(state.current_workspace().id(), id);
        assert_eq!(actions.len(), 2);

        let (render, actions) = run(&mut state, Event::InsertWorkspace(custom));
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.directory.len(), 2);
    }

    #[test]
    fn removing_current_emits_switch() {
        let mut state = state_with(4, 2);
        let (render, actions) = run(&mut state, Event::RemoveWorkspace { index: 2 });

        assert!(render);
        assert_eq!(state.directory.current_index(), 1);
        assert!(matches!(actions[0], Action::WorkspaceRemoved { index: 2, .. }));
        assert!(matches!(
            actions[1],
            Action::WorkspaceSwitched(Transition { index: 1, direction: Direction::Backward, .. })
        ));
    }

    #[test]
    fn removing_other_workspace_only_updates_strip() {
        let mut state = state_with(4, 2);
        let (render, actions) = run(&mut state, Event::RemoveWorkspace { index: 0 });

        assert!(render);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.directory.current_index(), 1);
        assert_eq!(state.current_workspace().name, "ws2");
    }

    #[test]
    fn removing_last_workspace_is_refused() {
        let mut state = state_with(1, 0);
        let (render, actions) = run(&mut state, Event::RemoveWorkspace { index: 0 });

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.directory.len(), 1);
    }

    #[test]
    fn switch_to_current_emits_nothing() {
        let mut state = state_with(3, 1);
        let (render, actions) = run(&mut state, Event::SwitchWorkspace { index: 1 });

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.directory.previous_index(), 1);
    }

    #[test]
    fn page_transition_end_uses_switch_rules() {
        let mut state = state_with(3, 2);
        let (_, actions) = run(&mut state, Event::PageTransitionEnded { index: 0 });

        assert!(matches!(
            actions[0],
            Action::WorkspaceSwitched(Transition { index: 0, direction: Direction::Backward, .. })
        ));
        let (render, _) = run(&mut state, Event::PageTransitionEnded { index: 0 });
        assert!(!render);
    }

    #[test]
    fn scroll_switches_to_neighbour() {
        let mut state = state_with(3, 1);
        let (_, actions) = run(
            &mut state,
            Event::Scroll { delta_x: -25.0, at: Duration::from_secs(1) },
        );

        assert_eq!(state.directory.current_index(), 2);
        assert!(matches!(
            actions[0],
            Action::WorkspaceSwitched(Transition { direction: Direction::Forward, .. })
        ));

        let (render, _) = run(
            &mut state,
            Event::Scroll { delta_x: 25.0, at: Duration::from_millis(1200) },
        );
        assert!(!render);
        assert_eq!(state.directory.current_index(), 2);
    }

    #[test]
    fn directory_changes_close_menu() {
        let mut state = state_with(3, 0);
        run(&mut state, Event::ToggleWorkspaceMenu);
        assert!(state.menu_open);

        run(&mut state, Event::SwitchWorkspace { index: 2 });
        assert!(!state.menu_open);
    }

    #[test]
    fn select_reports_changes_only() {
        let mut state = state_with(1, 0);
        let id = state.current_workspace().list_items()[0].id();

        let (_, actions) = run(&mut state, Event::SelectItem { id });
        assert_eq!(
            actions,
            [Action::ItemSelectionChanged {
                workspace_id: state.current_workspace().id(),
                item_id: Some(id),
            }]
        );

        let (render, actions) = run(&mut state, Event::SelectItem { id });
        assert!(!render);
        assert!(actions.is_empty());

        let (_, actions) = run(&mut state, Event::SelectItem { id: Uuid::new_v4() });
        assert!(matches!(actions[0], Action::ItemSelectionChanged { item_id: None, .. }));
        assert_eq!(state.current_workspace().selected_item_id(), None);
    }

    #[test]
    fn pin_and_delete_target_current_workspace() {
        let mut state = state_with(2, 1);
        let id = state.current_workspace().list_items()[1].id();

        let (render, _) = run(&mut state, Event::TogglePin { id });
        assert!(render);
        assert_eq!(state.current_workspace().pinned_items()[0].id(), id);
        assert_eq!(state.directory.workspaces()[0].pinned_items().len(), 1);

        run(&mut state, Event::SelectItem { id });
        let (_, actions) = run(&mut state, Event::DeleteItem { id });
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[1], Action::ItemSelectionChanged { item_id: None, .. }));
        assert_eq!(state.current_workspace().pinned_items().len(), 1);

        let (render, actions) = run(&mut state, Event::DeleteItem { id });
        assert!(!render);
        assert!(actions.is_empty());
    }
}
