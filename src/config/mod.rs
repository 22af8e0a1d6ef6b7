//! Configuration management for threat-sentinel
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, SentinelError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Sentinel configuration
    pub sentinel: SentinelConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::from_file_unchecked(path).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn from_file_unchecked<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SentinelError::Config(format!("Failed to read config file: {}", e)))?;

        let sentinel: SentinelConfig = serde_yaml::from_str(&content)
            .map_err(|e| SentinelError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(Self { sentinel })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let sentinel = SentinelConfig::from_env()?;
        let config = Self { sentinel };

        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, with environment variables taking precedence
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok()).await
    }

    /// [`load`](Self::load) with variables resolved through `lookup`
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file_unchecked(path).await?,
            None => Self::default(),
        };
        config.sentinel.apply_vars(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Get classifier configuration
    pub fn classifier(&self) -> &ClassifierConfig {
        &self.sentinel.classifier
    }

    /// Get analysis configuration
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.sentinel.analysis
    }

    /// Get alerting configuration
    pub fn alerting(&self) -> &AlertingConfig {
        &self.sentinel.alerting
    }

    /// Get audit configuration
    pub fn audit(&self) -> &AuditConfig {
        &self.sentinel.audit
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.sentinel.logging
    }

    /// Get report configuration
    pub fn reports(&self) -> &ReportsConfig {
        &self.sentinel.reports
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.sentinel
            .validate()
            .map_err(|e| SentinelError::Config(format!("Invalid configuration: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.sentinel = self.sentinel.merge(other.sentinel);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.sentinel).map_err(|e| {
            SentinelError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.sentinel).map_err(|e| {
            SentinelError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
