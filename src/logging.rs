use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only the game transcript.
/// `RUST_LOG` takes precedence over the quiet default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brainbout=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
