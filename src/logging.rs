//! Logging setup for the demo binary.
//!
//! `RUST_LOG` takes precedence over the `[logging]` config section:
//! ```bash
//! RUST_LOG=snippets=debug cargo run --bin snippets
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::error::ConfigError;

static INIT: Once = Once::new();

/// Build the filter: `RUST_LOG` if set, otherwise the config directives.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    filter_from(std::env::var("RUST_LOG").ok(), config)
}

/// `env` wins over `config` when present. Like `EnvFilter::from_default_env`,
/// bad directives in `env` are skipped rather than rejected.
pub fn filter_from(env: Option<String>, config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Some(env) = env {
        return Ok(EnvFilter::builder().parse_lossy(env));
    }

    let directives = config.filter_directives();
    EnvFilter::try_new(&directives).map_err(|err| ConfigError::InvalidLogFilter {
        filter: directives.clone(),
        reason: err.to_string(),
    })
}

/// Install the global subscriber. Only the first call takes effect.
/// Logs go to stderr so snippet output on stdout stays clean.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = build_filter(config)?;

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        // another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });

    Ok(())
}
