//! Alert manager implementation

use super::types::{Alert, AlertFilter, AlertSeverity, AlertStats, AlertStorage};
use crate::config::AlertingConfig;
use crate::core::security::{RiskAssessment, RiskLevel, ThreatCategory};
use crate::utils::error::{Result, SentinelError};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Alert manager for raising and triaging alerts
#[derive(Debug, Clone)]
pub struct AlertManager {
    /// Configuration
    config: AlertingConfig,
    /// Consolidated storage for all alert-related data
    pub(super) storage: Arc<RwLock<AlertStorage>>,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(config: &AlertingConfig) -> Self {
        Self {
            config: config.clone(),
            storage: Arc::new(RwLock::new(AlertStorage::default())),
        }
    }

    /// Create an alert manager preloaded with existing alerts
    pub fn with_alerts(config: &AlertingConfig, alerts: Vec<Alert>) -> Self {
        let manager = Self::new(config);
        for alert in alerts {
            manager.send_alert(alert);
        }
        manager
    }

    /// Whether an assessment qualifies for alerting
    pub fn should_alert(&self, assessment: &RiskAssessment) -> bool {
        self.config.enabled && assessment.risk_level >= self.config.min_risk_level
    }

    /// Raise one alert per detected category of a qualifying assessment
    pub fn raise_for_assessment(&self, assessment: &RiskAssessment) -> Vec<Alert> {
        if !self.should_alert(assessment) {
            return Vec::new();
        }

        let categories: Vec<Option<ThreatCategory>> = if assessment.detected_threats.is_empty() {
            vec![None]
        } else {
            assessment.detected_threats.iter().copied().map(Some).collect()
        };

        let alerts: Vec<Alert> = categories
            .into_iter()
            .map(|category| Alert {
                id: uuid::Uuid::new_v4().to_string(),
                analysis_id: assessment.id.clone(),
                category,
                severity: AlertSeverity::for_assessment(assessment.risk_level, category),
                message: alert_message(assessment.risk_level, category),
                timestamp: chrono::Utc::now(),
                acknowledged: false,
            })
            .collect();

        for alert in &alerts {
            self.send_alert(alert.clone());
        }

        alerts
    }

    /// Record an alert
    pub fn send_alert(&self, alert: Alert) {
        debug!("Queuing alert: {} - {}", alert.severity, alert.message);
        if alert.severity >= AlertSeverity::High {
            warn!(
                alert_id = %alert.id,
                analysis_id = %alert.analysis_id,
                "{} alert: {}",
                alert.severity,
                alert.message
            );
        }

        let mut storage = self.storage.write();

        storage.stats.total_alerts += 1;
        *storage
            .stats
            .alerts_by_severity
            .entry(alert.severity.to_string())
            .or_insert(0) += 1;
        let category = alert
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "uncategorized".to_string());
        *storage
            .stats
            .alerts_by_category
            .entry(category)
            .or_insert(0) += 1;
        if alert.acknowledged {
            storage.stats.acknowledged += 1;
        }
        storage.stats.last_alert = Some(alert.timestamp);

        storage.history.push_back(alert);

        while storage.history.len() > self.config.history_limit {
            storage.history.pop_front();
        }
    }

    /// Acknowledge a single alert. Acknowledging twice is a no-op.
    pub fn acknowledge(&self, alert_id: &str) -> Result<()> {
        let mut guard = self.storage.write();
        let storage = &mut *guard;
        let alert = storage
            .history
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| SentinelError::not_found(format!("alert {}", alert_id)))?;

        if !alert.acknowledged {
            alert.acknowledged = true;
            storage.stats.acknowledged += 1;
            info!("Acknowledged alert: {}", alert_id);
        }
        Ok(())
    }

    /// Acknowledge every alert, returning how many changed
    pub fn acknowledge_all(&self) -> usize {
        let mut storage = self.storage.write();
        let mut changed = 0;
        for alert in storage.history.iter_mut().filter(|a| !a.acknowledged) {
            alert.acknowledged = true;
            changed += 1;
        }
        storage.stats.acknowledged += changed as u64;
        info!("Bulk acknowledged {} alerts", changed);
        changed
    }

    /// Alerts matching the filter, newest first
    pub fn filter(&self, filter: &AlertFilter) -> Vec<Alert> {
        self.storage
            .read()
            .history
            .iter()
            .rev()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    /// Look up an alert by ID
    pub fn get(&self, alert_id: &str) -> Option<Alert> {
        self.storage
            .read()
            .history
            .iter()
            .find(|a| a.id == alert_id)
            .cloned()
    }

    /// Number of alerts awaiting acknowledgement
    pub fn unacknowledged_count(&self) -> usize {
        self.storage
            .read()
            .history
            .iter()
            .filter(|a| !a.acknowledged)
            .count()
    }

    /// Get alert statistics
    pub fn get_stats(&self) -> AlertStats {
        self.storage.read().stats.clone()
    }

    /// Get alert history, newest first
    pub fn get_history(&self, limit: Option<usize>) -> Vec<Alert> {
        let storage = self.storage.read();
        let limit = limit.unwrap_or(100);

        storage.history.iter().rev().take(limit).cloned().collect()
    }
}

fn alert_message(level: RiskLevel, category: Option<ThreatCategory>) -> String {
    match category {
        Some(ThreatCategory::Violence) => format!(
            "{}-risk violent content detected in user communication",
            capitalize(level.as_str())
        ),
        Some(ThreatCategory::Terrorism) if level == RiskLevel::High => {
            "Potential terrorist threat identified - immediate review required".to_string()
        }
        Some(ThreatCategory::Terrorism) => "Potential terrorist references detected".to_string(),
        Some(ThreatCategory::Suicide) => {
            "Suicide risk indicators found in content analysis".to_string()
        }
        Some(ThreatCategory::Extremism) => "Extremist language patterns detected".to_string(),
        None => format!(
            "{}-risk content detected without a specific threat category",
            capitalize(level.as_str())
        ),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
