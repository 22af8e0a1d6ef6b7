//! Fixed demonstration data

use super::models::{User, UserRole, UserStatus};
use super::DataSource;
use crate::core::reports::{DateRange, Report, ReportFormat, ReportGenerator, ReportRequest};
use crate::core::security::{ContentKind, RiskAssessment, RiskLevel, ThreatCategory};
use crate::monitoring::{Alert, AlertSeverity, SystemLog, SystemLogLevel};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

/// In-memory source of the demonstration dataset
#[derive(Debug, Clone, Default)]
pub struct SeedDataSource;

impl SeedDataSource {
    pub fn new() -> Self {
        Self
    }

    /// Seed assessments, newest first
    pub fn seed_analyses() -> Vec<RiskAssessment> {
        use ThreatCategory::*;
        vec![
            analysis(
                "1",
                "1",
                "I hate everyone and want to hurt them all",
                RiskLevel::High,
                95,
                vec![Violence],
                &["hate", "hurt"],
                ts(15, 10, 30),
            ),
            analysis(
                "2",
                "2",
                "Planning something big for the government building",
                RiskLevel::High,
                88,
                vec![Terrorism],
                &["planning", "government", "building"],
                ts(15, 9, 15),
            ),
            analysis(
                "3",
                "3",
                "I cannot take it anymore, life is meaningless",
                RiskLevel::Medium,
                76,
                vec![Suicide],
                &["cannot take", "meaningless"],
                ts(15, 8, 45),
            ),
            analysis(
                "4",
                "1",
                "Join our cause against the corrupt system",
                RiskLevel::Medium,
                65,
                vec![Extremism],
                &["cause", "corrupt", "system"],
                ts(14, 16, 20),
            ),
            analysis(
                "5",
                "2",
                "Having a great day with friends!",
                RiskLevel::Low,
                12,
                vec![],
                &[],
                ts(14, 14, 10),
            ),
        ]
    }

    /// Seed alerts, newest first
    pub fn seed_alerts() -> Vec<Alert> {
        vec![
            alert(
                "1",
                ThreatCategory::Violence,
                AlertSeverity::High,
                "High-risk violent content detected in user communication",
                ts(15, 10, 31),
                false,
            ),
            alert(
                "2",
                ThreatCategory::Terrorism,
                AlertSeverity::Critical,
                "Potential terrorist threat identified - immediate review required",
                ts(15, 9, 16),
                false,
            ),
            alert(
                "3",
                ThreatCategory::Suicide,
                AlertSeverity::Medium,
                "Suicide risk indicators found in content analysis",
                ts(15, 8, 46),
                false,
            ),
            alert(
                "4",
                ThreatCategory::Extremism,
                AlertSeverity::Medium,
                "Extremist language patterns detected",
                ts(14, 16, 21),
                true,
            ),
        ]
    }

    /// Seed audit entries, newest first
    pub fn seed_logs() -> Vec<SystemLog> {
        vec![
            log(
                "1",
                "1",
                "Content Analysis",
                "Analyzed text content with high-risk classification",
                ts(15, 10, 30),
                SystemLogLevel::Warning,
            ),
            log(
                "3",
                "2",
                "Alert Generated",
                "Critical threat alert created for analysis ID 2",
                ts(15, 9, 16),
                SystemLogLevel::Error,
            ),
            log(
                "2",
                "1",
                "User Login",
                "Successful admin login from IP 192.168.1.100",
                ts(15, 8, 0),
                SystemLogLevel::Info,
            ),
        ]
    }

    pub fn seed_users() -> Vec<User> {
        vec![
            user(
                "1",
                "admin@threat-intel.com",
                "System Administrator",
                UserRole::Admin,
                UserStatus::Active,
                ts(15, 8, 0),
                45,
            ),
            user(
                "2",
                "analyst@threat-intel.com",
                "Security Analyst",
                UserRole::Analyst,
                UserStatus::Active,
                ts(15, 7, 30),
                78,
            ),
            user(
                "3",
                "user@example.com",
                "Regular User",
                UserRole::User,
                UserStatus::Active,
                ts(14, 16, 45),
                12,
            ),
            user(
                "4",
                "inactive@example.com",
                "Inactive User",
                UserRole::User,
                UserStatus::Inactive,
                ts(10, 10, 0),
                3,
            ),
        ]
    }

    /// Reports generated over the seed records
    pub fn seed_reports() -> Vec<Report> {
        let range = DateRange::new(ts(8, 0, 0), ts(15, 23, 59));
        let analyses = Self::seed_analyses();
        let alerts = Self::seed_alerts();

        vec![
            ReportGenerator::threat_summary(
                ReportRequest::new(
                    "Weekly Threat Summary",
                    "System Administrator",
                    range,
                    ReportFormat::Pdf,
                ),
                &analyses,
                &alerts,
            ),
            ReportGenerator::user_activity(
                ReportRequest::new(
                    "User Activity Report",
                    "Security Analyst",
                    range,
                    ReportFormat::Csv,
                ),
                &analyses,
                &Self::seed_users(),
            ),
            ReportGenerator::system_health(
                ReportRequest::new(
                    "System Health Check",
                    "System Administrator",
                    range,
                    ReportFormat::Json,
                ),
                &Self::seed_logs(),
                &alerts,
            ),
            ReportGenerator::custom(
                ReportRequest::new(
                    "Keyword Watchlist",
                    "Security Analyst",
                    range,
                    ReportFormat::Json,
                ),
                json!({ "watched_categories": ThreatCategory::ALL }),
            ),
        ]
    }
}

#[async_trait]
impl DataSource for SeedDataSource {
    async fn analyses(&self) -> Result<Vec<RiskAssessment>> {
        Ok(Self::seed_analyses())
    }

    async fn alerts(&self) -> Result<Vec<Alert>> {
        Ok(Self::seed_alerts())
    }

    async fn logs(&self) -> Result<Vec<SystemLog>> {
        Ok(Self::seed_logs())
    }

    async fn users(&self) -> Result<Vec<User>> {
        Ok(Self::seed_users())
    }

    async fn reports(&self) -> Result<Vec<Report>> {
        Ok(Self::seed_reports())
    }
}

/// January 2025 timestamp
fn ts(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn analysis(
    id: &str,
    user_id: &str,
    content: &str,
    risk_level: RiskLevel,
    confidence: u8,
    detected_threats: Vec<ThreatCategory>,
    keywords: &[&str],
    timestamp: DateTime<Utc>,
) -> RiskAssessment {
    RiskAssessment {
        id: id.to_string(),
        user_id: user_id.to_string(),
        content: content.to_string(),
        content_type: ContentKind::Text,
        risk_level,
        confidence,
        detected_threats,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        timestamp,
        processed: true,
    }
}

fn alert(
    id: &str,
    category: ThreatCategory,
    severity: AlertSeverity,
    message: &str,
    timestamp: DateTime<Utc>,
    acknowledged: bool,
) -> Alert {
    Alert {
        id: id.to_string(),
        analysis_id: id.to_string(),
        category: Some(category),
        severity,
        message: message.to_string(),
        timestamp,
        acknowledged,
    }
}

fn log(
    id: &str,
    user_id: &str,
    action: &str,
    details: &str,
    timestamp: DateTime<Utc>,
    level: SystemLogLevel,
) -> SystemLog {
    SystemLog {
        id: id.to_string(),
        user_id: user_id.to_string(),
        action: action.to_string(),
        details: details.to_string(),
        timestamp,
        level,
    }
}

fn user(
    id: &str,
    email: &str,
    name: &str,
    role: UserRole,
    status: UserStatus,
    last_login: DateTime<Utc>,
    analyses: u32,
) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        status,
        created_at: ts(1, 0, 0),
        last_login,
        analyses,
    }
}
