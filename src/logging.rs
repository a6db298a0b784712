//! Purpose: Install the process-wide `tracing` subscriber.
//! Exports: `init_tracing`.
//! Role: Shared by every binary so diagnostics look the same everywhere.
//! Invariants: Diagnostics go to stderr; stdout carries only prompt and verdict text.
//! Invariants: `RUST_LOG` overrides the default `warn` filter; repeated init is a no-op.
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
