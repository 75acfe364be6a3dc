use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
///
/// stdout is reserved for the rendered page.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
