//! Legacy sync configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::AclSettings;

/// Mainframe sync timing
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyConfig {
    /// Lag reported until the nightly batch picks an update up
    #[serde(default = "default_sync_interval_hours")]
    pub sync_interval_hours: u32,

    /// Simulated round trip for one transmission
    #[serde(default = "default_transmit_latency_ms")]
    pub transmit_latency_ms: u64,

    /// Simulated per-record delay inside a batch run
    #[serde(default = "default_batch_item_latency_ms")]
    pub batch_item_latency_ms: u64,

    /// Period of the automatic batch timer; disabled when unset
    pub auto_sync_secs: Option<u64>,
}

impl LegacyConfig {
    pub fn transmit_latency(&self) -> Duration {
        Duration::from_millis(self.transmit_latency_ms)
    }

    pub fn auto_sync_period(&self) -> Option<Duration> {
        self.auto_sync_secs.map(Duration::from_secs)
    }

    /// Settings for the anti-corruption layer
    pub fn acl_settings(&self) -> AclSettings {
        AclSettings {
            sync_interval_hours: self.sync_interval_hours,
            batch_item_latency: Duration::from_millis(self.batch_item_latency_ms),
        }
    }

    /// Validate legacy configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sync_interval_hours == 0 {
            return Err(ValidationError::InvalidSyncInterval);
        }
        if self.auto_sync_secs == Some(0) {
            return Err(ValidationError::InvalidAutoSyncPeriod);
        }
        Ok(())
    }
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            sync_interval_hours: default_sync_interval_hours(),
            transmit_latency_ms: default_transmit_latency_ms(),
            batch_item_latency_ms: default_batch_item_latency_ms(),
            auto_sync_secs: None,
        }
    }
}

fn default_sync_interval_hours() -> u32 {
    96
}

fn default_transmit_latency_ms() -> u64 {
    500
}

fn default_batch_item_latency_ms() -> u64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_defaults() {
        let config = LegacyConfig::default();
        assert_eq!(config.sync_interval_hours, 96);
        assert_eq!(config.transmit_latency(), Duration::from_millis(500));
        assert!(config.auto_sync_period().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_acl_settings_carry_timings() {
        let config = LegacyConfig {
            sync_interval_hours: 24,
            batch_item_latency_ms: 0,
            ..Default::default()
        };
        let settings = config.acl_settings();
        assert_eq!(settings.sync_interval_hours, 24);
        assert!(settings.batch_item_latency.is_zero());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = LegacyConfig {
            sync_interval_hours: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSyncInterval));
    }

    #[test]
    fn test_zero_auto_sync_rejected() {
        let config = LegacyConfig {
            auto_sync_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAutoSyncPeriod));
    }
}
