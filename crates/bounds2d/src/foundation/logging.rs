//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Reads the `RUST_LOG` environment variable for filtering. Call once at
/// startup; library code only ever logs through the [`log`] facade.
pub fn init() {
    env_logger::init();
}
