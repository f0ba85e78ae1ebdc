//! Tracing setup for binaries and examples embedding the pipeline.

use tracing_subscriber::EnvFilter;

/// Initializes a formatted tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `info` with `debug` for this
/// crate. Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,orderflow=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
