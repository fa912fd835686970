pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber, filtered through `RUST_LOG`
/// with an `info` default. Repeated calls are no-ops so tests and benches
/// can share it.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .try_init()
        .ok();
}
