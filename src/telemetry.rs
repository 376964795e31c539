//! Tracing subscriber setup for host binaries.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global `fmt` subscriber.
///
/// Returns `false` if a subscriber was already installed; the existing one stays.
/// An unparsable filter falls back to `info`.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = config.filter().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(json = config.json, level = %config.level, "Tracing initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_a_no_op() {
        let config = LoggingConfig::default();
        // Another test binary thread may have installed one already.
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
