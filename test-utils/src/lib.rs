use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber.
///
/// Output goes through the test harness writer so it is only shown for failing
/// tests. Filtering follows `RUST_LOG`, defaulting to `limitation_core=debug`.
/// Safe to call from every test; only the first call installs anything.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("limitation_core=debug"));

    let installed = tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .pretty()
        .try_init()
        .is_ok();

    if installed {
        tracing::trace!("test logging initialised");
    }
}
