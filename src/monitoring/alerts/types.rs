//! Alert types and data structures

use crate::core::security::{RiskLevel, ThreatCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Low => write!(f, "LOW"),
            AlertSeverity::Medium => write!(f, "MEDIUM"),
            AlertSeverity::High => write!(f, "HIGH"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for AlertSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(AlertSeverity::Low),
            "medium" => Ok(AlertSeverity::Medium),
            "high" => Ok(AlertSeverity::High),
            "critical" => Ok(AlertSeverity::Critical),
            _ => Err(format!("Invalid alert severity: {}", s)),
        }
    }
}

impl AlertSeverity {
    /// Severity for an assessment at `level` carrying `category`
    pub fn for_assessment(level: RiskLevel, category: Option<ThreatCategory>) -> Self {
        match (level, category) {
            (RiskLevel::High, Some(ThreatCategory::Terrorism)) => AlertSeverity::Critical,
            (RiskLevel::High, _) => AlertSeverity::High,
            (RiskLevel::Medium, _) => AlertSeverity::Medium,
            (RiskLevel::Low, _) => AlertSeverity::Low,
        }
    }
}

/// Alert raised for an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert ID
    pub id: String,
    /// Assessment that triggered the alert
    pub analysis_id: String,
    /// Threat category, if the assessment carried one
    #[serde(rename = "type")]
    pub category: Option<ThreatCategory>,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Alert message
    pub message: String,
    /// Alert timestamp
    pub timestamp: DateTime<Utc>,
    /// Whether an analyst has acknowledged the alert
    pub acknowledged: bool,
}

/// Acknowledgement status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatusFilter {
    #[default]
    All,
    Acknowledged,
    Unacknowledged,
}

impl FromStr for AlertStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(AlertStatusFilter::All),
            "acknowledged" => Ok(AlertStatusFilter::Acknowledged),
            "unacknowledged" => Ok(AlertStatusFilter::Unacknowledged),
            _ => Err(format!("Invalid alert status: {}", s)),
        }
    }
}

/// Conjunctive alert filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub status: AlertStatusFilter,
    pub severity: Option<AlertSeverity>,
    pub category: Option<ThreatCategory>,
    /// Case-insensitive substring of the message
    pub search: Option<String>,
}

impl AlertFilter {
    pub fn with_status(mut self, status: AlertStatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_category(mut self, category: ThreatCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether an alert passes every set criterion
    pub fn matches(&self, alert: &Alert) -> bool {
        match self.status {
            AlertStatusFilter::Acknowledged if !alert.acknowledged => return false,
            AlertStatusFilter::Unacknowledged if alert.acknowledged => return false,
            _ => {}
        }
        if self.severity.is_some_and(|s| s != alert.severity) {
            return false;
        }
        if self.category.is_some() && self.category != alert.category {
            return false;
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            if !alert
                .message
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Consolidated alert storage - single lock for related data
#[derive(Debug, Default)]
pub(super) struct AlertStorage {
    /// Alert history, oldest first
    pub history: VecDeque<Alert>,
    /// Alert statistics
    pub stats: AlertStats,
}

/// Alert statistics
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AlertStats {
    /// Total alerts raised
    pub total_alerts: u64,
    /// Alerts by severity
    pub alerts_by_severity: HashMap<String, u64>,
    /// Alerts by threat category
    pub alerts_by_category: HashMap<String, u64>,
    /// Alerts acknowledged so far
    pub acknowledged: u64,
    /// Last alert timestamp
    pub last_alert: Option<DateTime<Utc>>,
}
