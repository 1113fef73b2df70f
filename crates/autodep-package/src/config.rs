//! Record configuration (TOML)
//!
//! Controls how creation timestamps are rendered when a record is built.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Record configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RecordConfig {
    /// Timestamp formatting
    #[serde(default)]
    pub timestamps: TimestampConfig,
}

/// Timestamp formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TimestampConfig {
    /// Fractional second digits (default: secs)
    #[serde(default)]
    pub precision: TimestampPrecision,

    /// Render UTC as "Z" instead of "+00:00" (default: true)
    #[serde(default = "default_use_z")]
    pub use_z: bool,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            precision: TimestampPrecision::default(),
            use_z: default_use_z(),
        }
    }
}

fn default_use_z() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPrecision {
    #[default]
    Secs,
    Millis,
    Micros,
}

impl From<TimestampPrecision> for SecondsFormat {
    fn from(precision: TimestampPrecision) -> Self {
        match precision {
            TimestampPrecision::Secs => SecondsFormat::Secs,
            TimestampPrecision::Millis => SecondsFormat::Millis,
            TimestampPrecision::Micros => SecondsFormat::Micros,
        }
    }
}

impl RecordConfig {
    /// Parse config from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Current time formatted as RFC3339
    pub fn now(&self) -> String {
        self.format(Utc::now())
    }

    pub fn format(&self, time: DateTime<Utc>) -> String {
        time.to_rfc3339_opts(self.timestamps.precision.into(), self.timestamps.use_z)
    }
}
