//! Dashboard statistics

use super::generator::{risk_distribution, threat_types};
use crate::core::security::{RiskAssessment, RiskLevel};
use crate::monitoring::Alert;
use crate::storage::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Assessment counts per risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Assessment counts per threat category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatTypeCounts {
    pub violence: usize,
    pub extremism: usize,
    pub suicide: usize,
    pub terrorism: usize,
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_analyses: usize,
    pub high_risk_detected: usize,
    pub active_users: usize,
    /// Alerts raised on the same UTC calendar day as `now`
    pub alerts_today: usize,
    pub risk_distribution: RiskDistribution,
    pub threat_types: ThreatTypeCounts,
}

impl DashboardStats {
    pub fn compute(
        analyses: &[RiskAssessment],
        alerts: &[Alert],
        users: &[User],
        now: DateTime<Utc>,
    ) -> Self {
        let today = now.date_naive();
        Self {
            total_analyses: analyses.len(),
            high_risk_detected: analyses
                .iter()
                .filter(|a| a.risk_level == RiskLevel::High)
                .count(),
            active_users: users.iter().filter(|u| u.is_active()).count(),
            alerts_today: alerts
                .iter()
                .filter(|a| a.timestamp.date_naive() == today)
                .count(),
            risk_distribution: risk_distribution(analyses.iter()),
            threat_types: threat_types(analyses.iter()),
        }
    }
}
