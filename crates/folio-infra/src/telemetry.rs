//! Tracing subscriber setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryConfig;

pub const DEFAULT_FILTER: &str = "info,folio_core=debug,folio_infra=debug";

fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    config
        .filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TryInitError> {
    let filter = env_filter(config);

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    tracing::info!(json_logs = config.json_logs, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_falls_back_to_default() {
        let config = TelemetryConfig {
            json_logs: false,
            filter: Some("folio_core=loudest".to_string()),
        };
        assert_eq!(env_filter(&config).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }

    #[test]
    fn test_init_only_once() {
        let config = TelemetryConfig::default();
        assert!(init_telemetry(&config).is_ok());
        assert!(init_telemetry(&config).is_err());
    }
}
