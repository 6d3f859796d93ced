//! Tracing/logging setup shared by every binary that embeds the equipment core.

pub mod config;
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops. An invalid
/// environment falls back to the defaults and says so once a subscriber is up.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => tracing::init(&config),
        Err(err) => {
            tracing::init(&ObservabilityConfig::default());
            ::tracing::warn!(error = %err, "invalid observability settings; using defaults");
        }
    }
}
