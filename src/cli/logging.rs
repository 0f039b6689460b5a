//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "PR_MANAGER_LOG";

/// Install the stderr subscriber.
///
/// `PR_MANAGER_LOG` wins when set; otherwise only warnings are shown,
/// or crate debug output in verbose mode.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "warn,pr_manager=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
