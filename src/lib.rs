//! # threat-sentinel
//!
//! Content threat intelligence: keyword-based risk classification of user
//! content, alert triage, an audit trail and summary reports.
//!
//! ## Features
//!
//! - **Risk classification**: Keyword tiers score text into low, medium or high risk
//! - **Threat categories**: Violence, terrorism, suicide and extremism detection
//! - **Highlighting**: Matched keywords marked for display
//! - **Alerts**: Raised for risky content, with acknowledgement and filtering
//! - **Reports**: Threat, user activity and system health summaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use threat_sentinel::{ContentRiskClassifier, ContentSubmission, highlight_keywords};
//!
//! #[tokio::main]
//! async fn main() {
//!     let classifier = ContentRiskClassifier::new();
//!     let assessment = classifier
//!         .classify(&ContentSubmission::text("I hate everyone", "1"))
//!         .await;
//!
//!     println!("{} ({}%)", assessment.risk_level, assessment.confidence);
//!     println!("{}", highlight_keywords(&assessment.content, &assessment.keywords));
//! }
//! ```
//!
//! ## Full Service
//!
//! ```rust,no_run
//! use threat_sentinel::{Config, ContentSubmission, Sentinel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/sentinel.yaml").await?;
//!     let sentinel = Sentinel::with_seed_data(config).await?;
//!     let outcome = sentinel
//!         .analysis()
//!         .submit(ContentSubmission::text("bomb threat", "1"))
//!         .await?;
//!     println!("{} alert(s) raised", outcome.alerts.len());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, SentinelError};

pub use core::analysis::{AnalysisOutcome, AnalysisService};
pub use core::reports::{
    DashboardStats, DateRange, Report, ReportFormat, ReportGenerator, ReportRequest, ReportType,
};
pub use core::security::{
    ContentKind, ContentRiskClassifier, ContentSubmission, KeywordHighlighter, RiskAssessment,
    RiskLevel, ThreatCategory, highlight_keywords,
};
pub use monitoring::{Alert, AlertFilter, AlertManager, AlertSeverity, AuditLog, SystemLog};
pub use storage::{DataSource, SeedDataSource, User};

use tracing::info;

/// Analysis service together with the records it reports over
pub struct Sentinel {
    config: Config,
    analysis: AnalysisService,
    users: Vec<User>,
    reports: Vec<Report>,
}

impl Sentinel {
    /// Create an empty instance
    pub fn new(config: Config) -> Self {
        let analysis = AnalysisService::new(&config);
        Self {
            config,
            analysis,
            users: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Create an instance preloaded from a data source
    pub async fn from_source(config: Config, source: &dyn DataSource) -> Result<Self> {
        info!("Loading records from data source");

        let mut logs = source.logs().await?;
        logs.reverse();
        let mut alerts = source.alerts().await?;
        alerts.reverse();

        let analysis = AnalysisService::new(&config)
            .with_stores(
                AlertManager::with_alerts(config.alerting(), alerts),
                AuditLog::with_entries(config.audit(), logs),
            )
            .with_results(source.analyses().await?);

        Ok(Self {
            users: source.users().await?,
            reports: source.reports().await?,
            config,
            analysis,
        })
    }

    /// Create an instance preloaded with the demonstration dataset
    pub async fn with_seed_data(config: Config) -> Result<Self> {
        Self::from_source(config, &SeedDataSource::new()).await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analysis(&self) -> &AnalysisService {
        &self.analysis
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Dashboard figures as of `now`
    pub fn dashboard(&self, now: chrono::DateTime<chrono::Utc>) -> DashboardStats {
        DashboardStats::compute(
            &self.analysis.results(),
            &self.analysis.alerts().get_history(Some(usize::MAX)),
            &self.users,
            now,
        )
    }

    /// Generate a report of the given type over the held records
    pub fn generate_report(&self, report_type: ReportType, request: ReportRequest) -> Report {
        let analyses = self.analysis.results();
        let alerts = self.analysis.alerts().get_history(Some(usize::MAX));
        match report_type {
            ReportType::ThreatSummary => {
                ReportGenerator::threat_summary(request, &analyses, &alerts)
            }
            ReportType::UserActivity => {
                ReportGenerator::user_activity(request, &analyses, &self.users)
            }
            ReportType::SystemHealth => {
                ReportGenerator::system_health(request, &self.analysis.audit().entries(), &alerts)
            }
            ReportType::Custom => ReportGenerator::custom(
                request,
                serde_json::to_value(self.dashboard(chrono::Utc::now()))
                    .unwrap_or(serde_json::Value::Null),
            ),
        }
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
