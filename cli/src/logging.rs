use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is unset or unparsable
const DEFAULT_LEVEL: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives
///
/// The default level only applies when no directives are given, so
/// `RUST_LOG=debug` turns on the harness and optimizer `debug!` events.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the stderr subscriber so stdout only carries results
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter_from(directives.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn with_filter<T>(directives: Option<&str>, check: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(filter_from(directives));
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn test_default_level_is_info() {
        assert!(with_filter(None, || tracing::enabled!(Level::INFO)));
        assert!(!with_filter(None, || tracing::enabled!(Level::DEBUG)));
    }

    #[test]
    fn test_global_debug_directive_enables_debug() {
        assert!(with_filter(Some("debug"), || tracing::enabled!(Level::DEBUG)));
        assert!(!with_filter(Some("debug"), || tracing::enabled!(Level::TRACE)));
    }

    #[test]
    fn test_warn_directive_lowers_verbosity() {
        assert!(!with_filter(Some("warn"), || tracing::enabled!(Level::INFO)));
        assert!(with_filter(Some("warn"), || tracing::enabled!(Level::WARN)));
    }

    #[test]
    fn test_invalid_directive_falls_back_to_info() {
        assert!(with_filter(Some("chsh=loud"), || tracing::enabled!(Level::INFO)));
        assert!(!with_filter(Some("chsh=loud"), || tracing::enabled!(Level::DEBUG)));
    }
}
