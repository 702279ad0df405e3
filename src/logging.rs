//! Logging Setup
//! env_logger backend for the `log` macros used across the crate.

use env_logger::{Builder, Env};

/// Install the global logger. `level` takes precedence over `RUST_LOG`;
/// without either, `info` is used.
pub fn init(level: Option<&str>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    // A second call (e.g. from tests) keeps the first logger
    let _ = builder
        .format_timestamp_millis()
        .format_module_path(true)
        .try_init();
}
