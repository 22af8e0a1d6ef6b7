//! Report generation

use super::dashboard::{RiskDistribution, ThreatTypeCounts};
use super::types::*;
use crate::core::security::{RiskAssessment, RiskLevel, ThreatCategory};
use crate::monitoring::{Alert, AlertSeverity, SystemLog, SystemLogLevel};
use crate::storage::User;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::debug;

/// Common report parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub title: String,
    pub generated_by: String,
    pub date_range: DateRange,
    pub format: ReportFormat,
}

impl ReportRequest {
    pub fn new(
        title: impl Into<String>,
        generated_by: impl Into<String>,
        date_range: DateRange,
        format: ReportFormat,
    ) -> Self {
        Self {
            title: title.into(),
            generated_by: generated_by.into(),
            date_range,
            format,
        }
    }

    fn into_report(self, report_type: ReportType, data: Value) -> Report {
        debug!("Generating {} report '{}'", report_type.label(), self.title);
        Report {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            report_type,
            format: self.format,
            date_range: self.date_range,
            generated_by: self.generated_by,
            generated_at: chrono::Utc::now(),
            data,
        }
    }
}

/// Builds reports from in-memory records
pub struct ReportGenerator;

impl ReportGenerator {
    /// Risk and category counts for assessments in range, plus alert triage state
    pub fn threat_summary(
        request: ReportRequest,
        analyses: &[RiskAssessment],
        alerts: &[Alert],
    ) -> Report {
        let range = request.date_range;
        let in_range: Vec<&RiskAssessment> = analyses
            .iter()
            .filter(|a| range.contains(a.timestamp))
            .collect();
        let alerts_in_range: Vec<&Alert> = alerts
            .iter()
            .filter(|a| range.contains(a.timestamp))
            .collect();

        let mut by_severity: BTreeMap<&str, usize> = BTreeMap::new();
        for severity in [
            AlertSeverity::Low,
            AlertSeverity::Medium,
            AlertSeverity::High,
            AlertSeverity::Critical,
        ] {
            let count = alerts_in_range
                .iter()
                .filter(|a| a.severity == severity)
                .count();
            by_severity.insert(severity_key(severity), count);
        }

        let data = json!({
            "total_analyses": in_range.len(),
            "risk_distribution": risk_distribution(in_range.iter().copied()),
            "threat_types": threat_types(in_range.iter().copied()),
            "alerts": {
                "total": alerts_in_range.len(),
                "unacknowledged": alerts_in_range.iter().filter(|a| !a.acknowledged).count(),
                "by_severity": by_severity,
            },
        });

        request.into_report(ReportType::ThreatSummary, data)
    }

    /// Per-user submission counts in range
    pub fn user_activity(
        request: ReportRequest,
        analyses: &[RiskAssessment],
        users: &[User],
    ) -> Report {
        let range = request.date_range;
        let rows: Vec<Value> = users
            .iter()
            .map(|user| {
                let submitted: Vec<&RiskAssessment> = analyses
                    .iter()
                    .filter(|a| a.user_id == user.id && range.contains(a.timestamp))
                    .collect();
                json!({
                    "user_id": user.id,
                    "name": user.name,
                    "role": user.role,
                    "status": user.status,
                    "analyses_in_range": submitted.len(),
                    "high_risk_in_range": submitted
                        .iter()
                        .filter(|a| a.risk_level == RiskLevel::High)
                        .count(),
                    "last_login": user.last_login,
                })
            })
            .collect();

        let data = json!({
            "total_users": users.len(),
            "active_users": users.iter().filter(|u| u.is_active()).count(),
            "users": rows,
        });

        request.into_report(ReportType::UserActivity, data)
    }

    /// Audit log levels and pending alerts
    pub fn system_health(request: ReportRequest, logs: &[SystemLog], alerts: &[Alert]) -> Report {
        let range = request.date_range;
        let in_range: Vec<&SystemLog> =
            logs.iter().filter(|l| range.contains(l.timestamp)).collect();
        let count = |level: SystemLogLevel| in_range.iter().filter(|l| l.level == level).count();

        let data = json!({
            "log_entries": in_range.len(),
            "by_level": {
                "info": count(SystemLogLevel::Info),
                "warning": count(SystemLogLevel::Warning),
                "error": count(SystemLogLevel::Error),
            },
            "pending_alerts": alerts.iter().filter(|a| !a.acknowledged).count(),
        });

        request.into_report(ReportType::SystemHealth, data)
    }

    /// Report carrying caller-provided data
    pub fn custom(request: ReportRequest, data: Value) -> Report {
        request.into_report(ReportType::Custom, data)
    }
}

fn severity_key(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Low => "low",
        AlertSeverity::Medium => "medium",
        AlertSeverity::High => "high",
        AlertSeverity::Critical => "critical",
    }
}

/// Assessment counts per risk level
pub(super) fn risk_distribution<'a>(
    analyses: impl Iterator<Item = &'a RiskAssessment> + Clone,
) -> RiskDistribution {
    let count = |level: RiskLevel| analyses.clone().filter(|a| a.risk_level == level).count();
    RiskDistribution {
        low: count(RiskLevel::Low),
        medium: count(RiskLevel::Medium),
        high: count(RiskLevel::High),
    }
}

/// Assessment counts per threat category
pub(super) fn threat_types<'a>(
    analyses: impl Iterator<Item = &'a RiskAssessment> + Clone,
) -> ThreatTypeCounts {
    let count = |category: ThreatCategory| {
        analyses
            .clone()
            .filter(|a| a.has_threat(category))
            .count()
    };
    ThreatTypeCounts {
        violence: count(ThreatCategory::Violence),
        extremism: count(ThreatCategory::Extremism),
        suicide: count(ThreatCategory::Suicide),
        terrorism: count(ThreatCategory::Terrorism),
    }
}
