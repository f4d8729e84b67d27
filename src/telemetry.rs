//! Opt-in `tracing` setup for hosts embedding `line-chart`.
//!
//! The library only emits events: `debug` when a chart recomputes its scale
//! state, `trace` per built frame and `warn` when samples are dropped. Hosts
//! that already install a subscriber can ignore this module.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
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
        install(filter)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Same as [`init_default_tracing`] with explicit filter directives such as
/// `"line_chart=debug"`. Invalid directives return `false`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        }
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::init_tracing_with_filter;

    #[cfg(feature = "telemetry")]
    #[test]
    fn invalid_filter_directive_installs_nothing() {
        assert!(!init_tracing_with_filter("line_chart=loudest"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn tracing_setup_is_a_no_op_without_the_feature() {
        assert!(!super::init_default_tracing());
        assert!(!init_tracing_with_filter("line_chart=debug"));
    }
}
