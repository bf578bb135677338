//! Plain-text rendering of the sidebar view model.
//!
//! This is the headless host's stand-in for a real view layer. It draws the
//! tab strip, the optional workspace menu, the pinned grid, and the list as
//! text lines so state changes can be followed in a terminal or asserted on in
//! tests.
//!
//! # Example
//!
//! ```rust
//! use sidebar_explorer::{initialize, Config};
//! use sidebar_explorer::ui::render_to_string;
//!
//! let state = initialize(&Config { seed: Some(2), ..Default::default() });
//! let text = render_to_string(&state.compute_viewmodel());
//! assert!(text.starts_with("[*Files*]"));
//! ```

use std::fmt::Write as _;

use crate::app::AppState;
use crate::ui::viewmodel::{ItemCell, MenuEntry, SidebarViewModel};

/// Pinned tiles per grid row.
const PINNED_COLUMNS: usize = 3;

/// Renders the sidebar to stdout.
pub fn render(state: &AppState) {
    print!("{}", render_to_string(&state.compute_viewmodel()));
}

/// Renders a view model to a string, one UI element per line.
#[must_use]
pub fn render_to_string(vm: &SidebarViewModel) -> String {
    let mut out = String::new();

    let strip: Vec<String> = vm
        .tabs
        .iter()
        .map(|tab| {
            if tab.is_selected {
                format!("[*{}*]", tab.name)
            } else {
                format!("[{}]", tab.name)
            }
        })
        .collect();
    let _ = writeln!(out, "{} [+]", strip.join(" "));

    if let Some(menu) = &vm.menu {
        for entry in menu {
            match entry {
                MenuEntry::Workspace { index, name, icon, checked } => {
                    let mark = if *checked { '✓' } else { ' ' };
                    let _ = writeln!(out, "  {mark} {index}: {name} ({icon})");
                }
                MenuEntry::AddWorkspace => {
                    let _ = writeln!(out, "  ----------");
                    let _ = writeln!(out, "  + Add Workspace");
                }
            }
        }
    }

    let _ = writeln!(out, "== {} ==", vm.workspace.title);

    if !vm.workspace.pinned.is_empty() {
        for (row, chunk) in vm.workspace.pinned.chunks(PINNED_COLUMNS).enumerate() {
            let tiles: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| format!("p{} {}", row * PINNED_COLUMNS + col, tile(cell)))
                .collect();
            let _ = writeln!(out, "  {}", tiles.join("  "));
        }
        let _ = writeln!(out, "  ----------");
    }

    for (index, cell) in vm.workspace.items.iter().enumerate() {
        let marker = if cell.is_selected { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} l{index} {} - {}", cell.title, cell.description);
    }

    out
}

fn tile(cell: &ItemCell) -> String {
    if cell.is_selected {
        format!("<{}>", cell.title)
    } else {
        format!("[{}]", cell.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{TabButton, WorkspaceView};
    use uuid::Uuid;

    fn cell(title: &str, is_selected: bool) -> ItemCell {
        ItemCell {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            icon: "doc".to_string(),
            is_selected,
        }
    }

    fn tab(index: usize, name: &str, is_selected: bool) -> TabButton {
        TabButton {
            index,
            workspace_id: Uuid::new_v4(),
            name: name.to_string(),
            icon: "folder".to_string(),
            is_selected,
        }
    }

    #[test]
    fn renders_strip_grid_and_list() {
        let vm = SidebarViewModel {
            tabs: vec![tab(0, "Files", false), tab(1, "Projects", true)],
            menu: None,
            workspace: WorkspaceView {
                workspace_id: Uuid::new_v4(),
                title: "Projects".to_string(),
                icon: "macwindow".to_string(),
                pinned: vec![cell("Star", true), cell("Link", false)],
                items: vec![cell("Notes", false)],
                selected_pinned_index: Some(0),
                selected_list_index: None,
            },
        };

        let text = render_to_string(&vm);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[Files] [*Projects*] [+]");
        assert_eq!(lines[1], "== Projects ==");
        assert_eq!(lines[2], "  p0 <Star>  p1 [Link]");
        assert_eq!(lines[4], "  l0 Notes - desc");
    }

    #[test]
    fn renders_open_menu() {
        let vm = SidebarViewModel {
            tabs: vec![tab(0, "Files", true)],
            menu: Some(vec![
                MenuEntry::Workspace {
                    index: 0,
                    name: "Files".to_string(),
                    icon: "folder".to_string(),
                    checked: true,
                },
                MenuEntry::AddWorkspace,
            ]),
            workspace: WorkspaceView {
                workspace_id: Uuid::new_v4(),
                title: "Files".to_string(),
                icon: "folder".to_string(),
                pinned: vec![],
                items: vec![cell("Doc", true)],
                selected_pinned_index: None,
                selected_list_index: Some(0),
            },
        };

        let text = render_to_string(&vm);
        assert!(text.contains("  ✓ 0: Files (folder)\n"));
        assert!(text.contains("  + Add Workspace\n"));
        assert!(text.ends_with("> l0 Doc - desc\n"));
    }
}
