/// Diagnostic logging
///
/// Console output for the learner goes through the session; this is for the
/// rest (paths touched, degraded loads, failed writes). Goes to stderr so it
/// never mixes into traces.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Defaults to `error` since degraded paths already print their own
/// warnings; `RUST_LOG=warn` (or lower) adds the details. Calling twice is
/// harmless.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
