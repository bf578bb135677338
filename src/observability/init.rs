//! Tracing subscriber initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::Config;

/// Log file name inside the data directory.
const LOG_FILE_NAME: &str = "sidebar-explorer.log";

/// Installs the global subscriber writing to a rotating log file.
///
/// The filter is built from `config.trace_level` (default `"info"`); an
/// unparsable directive falls back to `"info"`. Logs go to
/// `<data_dir>/sidebar-explorer.log`.
///
/// Logging is optional: if the data directory cannot be created the function
/// returns without installing anything. Calling it again after a subscriber is
/// installed has no effect.
///
/// # Example
///
/// ```rust
/// use sidebar_explorer::observability::init_tracing;
/// use sidebar_explorer::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(dir.path().display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
