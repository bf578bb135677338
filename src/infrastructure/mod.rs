//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently limited to resolving where the host keeps its data (logs) and
//! expanding user-supplied paths.

pub mod paths;

pub use paths::{default_data_dir, expand_tilde};
