use tracing_subscriber::EnvFilter;

/// Initialize structured logging with JSON format at `info`
pub fn init() {
    init_with_level("info")
}

/// Initialize JSON logging for a gateway service. `RUST_LOG` takes
/// precedence over `level`; a second call is a no-op.
pub fn init_with_level(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(true)
        .json()
        .try_init();
}

/// Initialize logging for tests (plain format)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
