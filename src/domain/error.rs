//! Error types for the sidebar navigation core.
//!
//! This module defines the centralized error type [`SidebarError`] and a type alias
//! [`Result`] used throughout the crate. Navigation operations driven by the view
//! layer never surface these errors (they degrade to no-ops), but the checked
//! directory operations report them for callers that want to know why nothing
//! happened.

use thiserror::Error;

/// The main error type for sidebar operations.
///
/// The first three variants describe refused directory operations. The rest
/// cover configuration loading.
///
/// # Examples
///
/// ```
/// use sidebar_explorer::SidebarError;
///
/// let err = SidebarError::IndexOutOfRange { index: 4, len: 2 };
/// assert_eq!(err.to_string(), "Workspace index 4 out of range (2 workspaces)");
/// ```
#[derive(Debug, Error)]
pub enum SidebarError {
    /// A workspace index does not address an existing workspace.
    #[error("Workspace index {index} out of range ({len} workspaces)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of workspaces at the time of the request.
        len: usize,
    },

    /// Removing the workspace would leave the directory empty.
    ///
    /// The directory always keeps at least one workspace.
    #[error("Cannot remove the last workspace")]
    LastWorkspace,

    /// The requested workspace is already the current one.
    #[error("Workspace {index} is already current")]
    AlreadyCurrent {
        /// The requested (and current) index.
        index: usize,
    },

    /// A workspace with this id is already in the directory.
    #[error("Workspace {0} already exists")]
    DuplicateWorkspace(uuid::Uuid),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized `Result` type for sidebar operations.
pub type Result<T> = std::result::Result<T, SidebarError>;
