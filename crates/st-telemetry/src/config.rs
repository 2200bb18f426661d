//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or an `EnvFilter` directive
    pub log_level: String,

    /// Whether to write logs to the console at all
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "server-time".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ST_SERVICE_NAME`: Service name (default: server-time)
    /// - `ST_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `ST_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `ST_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("ST_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("ST_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("ST_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: lookup("ST_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Override the level, e.g. from a `--verbose` flag.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.service_name, "server-time");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_st_log_level_wins_over_rust_log() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "warn"),
            ("ST_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.log_level, "debug");

        let config = TelemetryConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_boolean_flags() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("ST_JSON_LOGS", "1"),
            ("ST_CONSOLE_OUTPUT", "FALSE"),
            ("ST_SERVICE_NAME", "reward-clock"),
        ]));
        assert!(config.json_logs);
        assert!(!config.console_output);
        assert_eq!(config.service_name, "reward-clock");
    }
}
