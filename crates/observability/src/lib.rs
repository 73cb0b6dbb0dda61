//! Logging setup shared by stockfile binaries.

/// Install process-wide logging; repeated calls are no-ops.
pub fn init() {
    tracing::init();
}

/// JSON subscriber on stderr, filtered by `RUST_LOG`.
pub mod tracing;
