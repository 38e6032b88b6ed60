use tracing_subscriber::EnvFilter;

/// Installs the stderr diagnostics subscriber. Warnings and fatal reports
/// share the error stream with the payload's own output, so the format stays
/// compact. Call once per process.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
