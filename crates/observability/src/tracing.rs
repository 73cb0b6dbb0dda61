//! Subscriber setup for the `stockfile` binary.
//!
//! Events are written as JSON lines on stderr, leaving stdout to the demo
//! output. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the process-wide JSON subscriber.
///
/// Only the first call installs it; later calls leave it in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        ::tracing::info!("still logging after repeated init");
    }
}
