//! Opt-in `tracing` setup for hosts that do not install their own subscriber.
//!
//! The engine only emits events: `debug!` for range changes and animations,
//! `trace!` for per-frame and tick-cache detail, `warn!` when a tick walk is
//! cut short. Hosts with their own subscriber can ignore this module.

/// Filter used when `RUST_LOG` is unset: this crate at `info`, everything
/// else silent.
pub const DEFAULT_FILTER: &str = "timeline_axis=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
