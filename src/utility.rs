use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber for the binaries.
///
/// The filter is taken from `RUST_LOG` and falls back to `info`. Events go
/// to stderr, stdout is left to the command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
