//! Top-level sentinel configuration

use super::*;
use crate::core::security::RiskLevel;
use crate::utils::error::{Result, SentinelError};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Main sentinel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SentinelConfig {
    /// Classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Alerting configuration
    #[serde(default)]
    pub alerting: AlertingConfig,
    /// Analysis result retention
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Report export configuration
    #[serde(default)]
    pub reports: ReportsConfig,
}

impl SentinelConfig {
    /// Load configuration from `SENTINEL_*` environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overwrite every field whose `SENTINEL_*` variable is set
    pub fn apply_env(&mut self) -> Result<()> {
        debug!("Applying configuration from environment variables");
        self.apply_vars(|name| env::var(name).ok())
    }

    /// Overwrite every field for which `lookup` yields a value. A present
    /// variable always wins, even when it equals the built-in default.
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        if let Some(jitter) = vars.parse::<f64>("SENTINEL_CONFIDENCE_JITTER")? {
            self.classifier.confidence_jitter = jitter;
        }
        if let Some(ceiling) = vars.parse::<u32>("SENTINEL_IMAGE_SCORE_CEILING")? {
            self.classifier.image_score_ceiling = ceiling;
        }
        if let Some(probability) = vars.parse::<f64>("SENTINEL_IMAGE_FLAG_PROBABILITY")? {
            self.classifier.image_flag_probability = probability;
        }
        if let Some(seed) = vars.parse::<u64>("SENTINEL_SEED")? {
            self.classifier.seed = Some(seed);
        }

        if let Some(enabled) = vars.parse::<bool>("SENTINEL_ALERTS_ENABLED")? {
            self.alerting.enabled = enabled;
        }
        if let Some(level) = vars.parse::<RiskLevel>("SENTINEL_ALERT_MIN_RISK")? {
            self.alerting.min_risk_level = level;
        }
        if let Some(limit) = vars.parse::<usize>("SENTINEL_ALERT_HISTORY_LIMIT")? {
            self.alerting.history_limit = limit;
        }

        if let Some(max_results) = vars.parse::<usize>("SENTINEL_MAX_RESULTS")? {
            self.analysis.max_results = max_results;
        }

        if let Some(max_entries) = vars.parse::<usize>("SENTINEL_AUDIT_MAX_ENTRIES")? {
            self.audit.max_entries = max_entries;
        }

        if let Some(level) = lookup("SENTINEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = vars.parse::<bool>("SENTINEL_LOG_JSON")? {
            self.logging.json = json;
        }

        if let Some(dir) = lookup("SENTINEL_REPORTS_DIR") {
            self.reports.output_dir = dir.into();
        }

        Ok(())
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.classifier = self.classifier.merge(other.classifier);
        self.alerting = self.alerting.merge(other.alerting);
        self.analysis = self.analysis.merge(other.analysis);
        self.audit = self.audit.merge(other.audit);
        self.logging = self.logging.merge(other.logging);
        self.reports = self.reports.merge(other.reports);
        self
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match (self.0)(name) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| SentinelError::Config(format!("Invalid {}: {}", name, e))),
            None => Ok(None),
        }
    }
}
