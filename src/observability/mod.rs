//! Logging setup with a size-rotated log file.
//!
//! The crate logs through `tracing` macros everywhere. This module installs the
//! subscriber that filters those events and writes them as plain text lines to
//! a log file under the data directory.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → sidebar-explorer.log
//! ```
//!
//! # Configuration
//!
//! The level comes from the `trace_level` config option (default `"info"`) and
//! accepts any `EnvFilter` directive, e.g. `"sidebar_explorer::domain=trace"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber initialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
