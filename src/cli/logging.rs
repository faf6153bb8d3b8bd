//! Logging setup for the binary

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging on stderr
///
/// `RUST_LOG` overrides the default level.
pub fn init_cli_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
