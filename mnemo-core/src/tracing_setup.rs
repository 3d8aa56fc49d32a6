//! Tracing setup: structured logging via `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `MNEMO_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("MNEMO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing from the observability config.
///
/// `MNEMO_LOG` wins over `log_level` when it is set and parses.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = config_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn config_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env("MNEMO_LOG").unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}
