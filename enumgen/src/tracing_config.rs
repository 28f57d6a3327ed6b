//! Tracing configuration.
//!
//! ```bash
//! ENUMGEN_LOG=debug enumgen generate months.toml
//! ENUMGEN_LOG="enumgen_codegen=trace" enumgen generate months.toml
//! ```
//!
//! The subscriber is only initialised when `ENUMGEN_LOG` (or `RUST_LOG`) is
//! set, so nothing is installed in normal usage.

use tracing_subscriber::EnvFilter;

const LOG_VAR: &str = "ENUMGEN_LOG";

/// Build an `EnvFilter` from `ENUMGEN_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_VAR) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
///
/// All output goes to stderr so it never mixes with documents printed to
/// stdout.
pub fn init_tracing() {
    let has_own = std::env::var(LOG_VAR).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
