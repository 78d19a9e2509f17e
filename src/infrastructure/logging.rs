//! Logging configuration
//!
//! Initializes tracing for the application.

/// Initializes logging with the specified default level. The `RUST_LOG`
/// environment filter wins when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
