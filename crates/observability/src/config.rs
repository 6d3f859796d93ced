//! Observability settings.

use anyhow::{Context, bail};

/// Environment variable holding the tracing filter (falls back to `RUST_LOG`).
pub const LOG_FILTER_ENV: &str = "ARMORY_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "ARMORY_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl core::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => bail!("unknown log format {other:?} (expected json, pretty or compact)"),
        }
    }
}

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,armory_equipment=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Read settings from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, so callers and tests need not touch
    /// the real environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_ENV).or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.filter = filter;
            }
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.format = format
                .parse()
                .with_context(|| format!("reading {LOG_FORMAT_ENV}"))?;
        }

        Ok(config)
    }
}
