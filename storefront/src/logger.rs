//! Logging Infrastructure
//!
//! Structured logging setup for hosts embedding the storefront
//! engines. Library code only emits `tracing` events; calling this is
//! the host's choice.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with an explicit default level
pub fn init_logger_with_level(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
