//! Sentinel configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

/// Largest accepted image score bump ceiling
pub const MAX_IMAGE_SCORE_CEILING: u32 = 1000;

impl Validate for SentinelConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating sentinel configuration");

        self.classifier.validate_section("classifier")?;
        self.alerting.validate_section("alerting")?;
        self.analysis.validate_section("analysis")?;
        self.audit.validate_section("audit")?;
        self.logging.validate_section("logging")?;
        self.reports.validate_section("reports")?;

        Ok(())
    }
}

impl Validate for ClassifierConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.confidence_jitter.is_finite() || !(0.0..=100.0).contains(&self.confidence_jitter)
        {
            return Err("Confidence jitter must be between 0 and 100".to_string());
        }

        if self.image_score_ceiling > MAX_IMAGE_SCORE_CEILING {
            return Err(format!(
                "Image score ceiling must be at most {}",
                MAX_IMAGE_SCORE_CEILING
            ));
        }

        if !(0.0..=1.0).contains(&self.image_flag_probability) {
            return Err("Image flag probability must be between 0.0 and 1.0".to_string());
        }

        Ok(())
    }
}

impl Validate for AlertingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.history_limit == 0 {
            return Err("Alert history limit must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 {
            return Err("Analysis max results must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("Audit max entries must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log filter '{}': {}", self.level, e))?;

        Ok(())
    }
}

impl Validate for ReportsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("Report output directory cannot be empty".to_string());
        }

        Ok(())
    }
}
