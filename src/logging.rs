use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. stdout is reserved for results.
///
/// `RUST_LOG` wins when set; otherwise `verbose` raises this crate to debug.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,cv_links=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
