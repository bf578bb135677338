//! Headless host for the sidebar navigation core.
//!
//! Stands in for the desktop view layer: it reads one command per line from
//! stdin, translates it into an [`Event`], runs the library's event handler,
//! executes the returned actions by printing them, and re-renders the sidebar
//! as text when the handler asks for it.
//!
//! # Usage
//!
//! ```text
//! sidebar-explorer [config.toml]
//! sidebar-explorer [key=value ...]
//! ```
//!
//! `key=value` arguments set the same options as the TOML file, e.g.
//! `seed=42 trace_level=debug`.
//!
//! # Commands
//!
//! - `add`: add the next default workspace
//! - `remove <index>`: remove the workspace at a tab position
//! - `switch <index>`: switch to a tab position
//! - `page <index>`: report a finished page swipe
//! - `scroll <delta_x>`: horizontal scroll (timestamped on arrival)
//! - `menu`: toggle the workspace list menu
//! - `select <ref>` / `pin <ref>` / `delete <ref>`: item operations, where
//!   `<ref>` is `l<n>` for list row n or `p<n>` for pinned tile n
//! - `dump`: print the current workspace as JSON
//! - `quit`: exit

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Instant;

use uuid::Uuid;

use sidebar_explorer::{handle_event, Action, AppState, Config, Event};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Add,
    Remove(usize),
    Switch(usize),
    Page(usize),
    Scroll(f64),
    Menu,
    Select(ItemRef),
    Pin(ItemRef),
    Delete(ItemRef),
    Dump,
    Quit,
}

/// Position of an item in the current workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemRef {
    List(usize),
    Pinned(usize),
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or_else(|| "empty command".to_string())?;
    let arg = parts.next();

    let index = |arg: Option<&str>| -> Result<usize, String> {
        let raw = arg.ok_or_else(|| format!("{name}: missing index"))?;
        raw.parse().map_err(|_| format!("{name}: invalid index '{raw}'"))
    };
    let item = |arg: Option<&str>| -> Result<ItemRef, String> {
        let raw = arg.ok_or_else(|| format!("{name}: missing item reference"))?;
        let mut chars = raw.chars();
        let kind = chars.next();
        let position = chars
            .as_str()
            .parse()
            .map_err(|_| format!("{name}: invalid item reference '{raw}'"))?;
        match kind {
            Some('l') => Ok(ItemRef::List(position)),
            Some('p') => Ok(ItemRef::Pinned(position)),
            _ => Err(format!("{name}: item reference must start with 'l' or 'p'")),
        }
    };

    match name {
        "add" => Ok(Command::Add),
        "remove" => index(arg).map(Command::Remove),
        "switch" => index(arg).map(Command::Switch),
        "page" => index(arg).map(Command::Page),
        "scroll" => {
            let raw = arg.ok_or_else(|| "scroll: missing delta".to_string())?;
            raw.parse()
                .map(Command::Scroll)
                .map_err(|_| format!("scroll: invalid delta '{raw}'"))
        }
        "menu" => Ok(Command::Menu),
        "select" => item(arg).map(Command::Select),
        "pin" => item(arg).map(Command::Pin),
        "delete" => item(arg).map(Command::Delete),
        "dump" => Ok(Command::Dump),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'")),
    }
}

/// Host state wrapper around the library's `AppState`.
struct Host {
    app: AppState,
    started: Instant,
}

impl Host {
    fn new(config: &Config) -> Self {
        Self {
            app: sidebar_explorer::initialize(config),
            started: Instant::now(),
        }
    }

    /// Resolves an item reference against the current workspace.
    ///
    /// A stale reference maps to a random id so the core sees it as unknown.
    fn resolve(&self, item: ItemRef) -> Uuid {
        let workspace = self.app.current_workspace();
        let found = match item {
            ItemRef::List(n) => workspace.list_items().get(n),
            ItemRef::Pinned(n) => workspace.pinned_items().get(n),
        };
        found.map_or_else(Uuid::new_v4, |item| item.id())
    }

    fn to_event(&self, command: Command) -> Option<Event> {
        Some(match command {
            Command::Add => Event::AddWorkspace,
            Command::Remove(index) => Event::RemoveWorkspace { index },
            Command::Switch(index) => Event::SwitchWorkspace { index },
            Command::Page(index) => Event::PageTransitionEnded { index },
            Command::Scroll(delta_x) => Event::Scroll {
                delta_x,
                at: self.started.elapsed(),
            },
            Command::Menu => Event::ToggleWorkspaceMenu,
            Command::Select(item) => Event::SelectItem { id: self.resolve(item) },
            Command::Pin(item) => Event::TogglePin { id: self.resolve(item) },
            Command::Delete(item) => Event::DeleteItem { id: self.resolve(item) },
            Command::Dump | Command::Quit => return None,
        })
    }

    fn dump(&self) {
        match serde_json::to_string_pretty(self.app.current_workspace()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize workspace");
                eprintln!("dump failed: {e}");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::WorkspaceAdded { index, .. } => println!("+ workspace added at {index}"),
            Action::WorkspaceRemoved { index, .. } => println!("- workspace removed from {index}"),
            Action::WorkspaceSwitched(transition) => println!(
                "> switched to {} ({:?})",
                transition.index, transition.direction
            ),
            Action::ItemSelectionChanged { item_id, .. } => match item_id {
                Some(id) => println!("* selected {id}"),
                None => println!("* selection cleared"),
            },
            Action::ItemsChanged { .. } => println!("~ items changed"),
        }
    }
}

/// Builds the configuration from command-line arguments.
///
/// A single argument without `=` is a TOML file path. Otherwise every argument
/// must be a `key=value` pair.
fn load_config(args: &[String]) -> Result<Config, String> {
    match args {
        [] => Ok(Config::default()),
        [path] if !path.contains('=') => {
            Config::from_file(path).map_err(|e| format!("failed to load {path}: {e}"))
        }
        pairs => {
            let mut map = BTreeMap::new();
            for pair in pairs {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("expected key=value, got '{pair}'"))?;
                map.insert(key.trim().to_string(), value.to_string());
            }
            Ok(Config::from_map(&map))
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    sidebar_explorer::observability::init_tracing(&config);

    let span = tracing::debug_span!("host_session");
    let _guard = span.entered();

    let mut host = Host::new(&config);
    sidebar_explorer::ui::render(&host.app);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stdin");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        tracing::debug!(command = ?command, "command received");

        match command {
            Command::Quit => break,
            Command::Dump => host.dump(),
            _ => {
                let Some(event) = host.to_event(command) else {
                    continue;
                };
                match handle_event(&mut host.app, &event) {
                    Ok((should_render, actions)) => {
                        for action in &actions {
                            host.execute_action(action);
                        }
                        if should_render {
                            sidebar_explorer::ui::render(&host.app);
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "error handling event"),
                }
            }
        }
    }

    ExitCode::SUCCESS
}
