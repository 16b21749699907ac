//! Environment-driven observability configuration.

use core::str::FromStr;

use thiserror::Error;

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "VENDING_LOG_FORMAT";

/// Output format of the process-wide subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
    /// Single-line, human-oriented output.
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected one of: json, pretty, compact)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives (e.g. `info,vending::machine=debug`).
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `VENDING_LOG_FORMAT` from the process environment.
    pub fn from_env() -> Result<Self, UnknownLogFormat> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, UnknownLogFormat> {
        let filter = filter_from_lookup(&lookup);

        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

/// Filter directives from `RUST_LOG`; unset or blank yields [`DEFAULT_FILTER`].
///
/// Independent of the format variable, so it still applies when that one is
/// rejected.
pub fn filter_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("RUST_LOG")
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
