//! Log output for the `resio` binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the executable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g. `resource_io=debug`.
pub const LOG_ENV: &str = "RESIO_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Pick the filter directive: `--verbose` wins, then the explicit filter,
/// then the default level.
pub fn directive(verbose: bool, filter: Option<&str>) -> String {
    if verbose {
        return VERBOSE_LEVEL.to_string();
    }
    filter
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Install a compact stderr subscriber.
///
/// Invalid directives fall back to the default level. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init(verbose: bool, filter: Option<&str>) {
    let directive = directive(verbose, filter);
    let env_filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    tracing::debug!(%directive, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_verbose_wins() {
        assert_eq!(directive(true, Some("error")), "debug");
    }

    #[test]
    fn test_directive_uses_filter() {
        assert_eq!(directive(false, Some("resource_io=trace")), "resource_io=trace");
    }

    #[test]
    fn test_directive_default() {
        assert_eq!(directive(false, None), "warn");
        assert_eq!(directive(false, Some("  ")), "warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false, Some("not a [valid directive"));
        init(true, None);
    }
}
