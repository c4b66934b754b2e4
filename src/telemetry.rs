//! Tracing bootstrap for hosts embedding `scatter-rs`.
//!
//! Setup stays explicit and opt-in: call [`init_default_tracing`] or install
//! your own subscriber before constructing an engine.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Only active with the `telemetry` feature. Returns `false` when the feature
/// is disabled or another global subscriber is already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
