//! Tracing and logging setup shared by the vending binaries.

/// Environment configuration (filter, output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide observability from the environment.
///
/// An unusable `VENDING_LOG_FORMAT` falls back to the default format and is
/// reported once the subscriber is up.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => tracing::init_with(&config),
        Err(err) => {
            let config = ObservabilityConfig {
                filter: config::filter_from_lookup(|key| std::env::var(key).ok()),
                ..ObservabilityConfig::default()
            };
            tracing::init_with(&config);
            ::tracing::warn!("{err}; using default log format");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        tracing::init_with(&ObservabilityConfig::default());
        tracing::init_with(&ObservabilityConfig {
            format: LogFormat::Compact,
            ..ObservabilityConfig::default()
        });
        init();
    }
}
