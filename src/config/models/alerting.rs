//! Alerting configuration

use crate::core::security::RiskLevel;
use serde::{Deserialize, Serialize};

/// Alerting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// Whether analyses raise alerts at all
    #[serde(default = "super::default_true")]
    pub enabled: bool,
    /// Lowest risk level that raises an alert
    #[serde(default = "default_min_risk_level")]
    pub min_risk_level: RiskLevel,
    /// Number of alerts kept in history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_risk_level: default_min_risk_level(),
            history_limit: default_history_limit(),
        }
    }
}

impl AlertingConfig {
    /// Merge alerting configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.min_risk_level != default_min_risk_level() {
            self.min_risk_level = other.min_risk_level;
        }
        if other.history_limit != default_history_limit() {
            self.history_limit = other.history_limit;
        }
        self
    }
}

fn default_min_risk_level() -> RiskLevel {
    RiskLevel::High
}

fn default_history_limit() -> usize {
    1000
}
