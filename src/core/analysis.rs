//! Analysis service
//!
//! Runs submissions through the classifier and keeps the results, raising
//! alerts and writing audit entries as a side effect.

use crate::config::Config;
use crate::core::security::{
    ContentKind, ContentRiskClassifier, ContentSubmission, KeywordHighlighter, RandomSource,
    RiskAssessment, RiskLevel,
};
use crate::monitoring::{Alert, AlertManager, AuditLog, SystemLogLevel};
use crate::utils::error::{Result, SentinelError};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one submission
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub assessment: RiskAssessment,
    /// Alerts raised for this assessment, possibly none
    pub alerts: Vec<Alert>,
}

/// Classifies submissions and records their results
#[derive(Debug, Clone)]
pub struct AnalysisService {
    classifier: ContentRiskClassifier,
    highlighter: KeywordHighlighter,
    alerts: AlertManager,
    audit: AuditLog,
    results: Arc<RwLock<Vec<RiskAssessment>>>,
    max_results: usize,
}

impl AnalysisService {
    pub fn new(config: &Config) -> Self {
        Self {
            classifier: ContentRiskClassifier::with_config(config.classifier()),
            highlighter: KeywordHighlighter::new(),
            alerts: AlertManager::new(config.alerting()),
            audit: AuditLog::new(config.audit()),
            results: Arc::new(RwLock::new(Vec::new())),
            max_results: config.analysis().max_results,
        }
    }

    /// Replace the classifier's random source
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.classifier = self.classifier.with_random_source(random);
        self
    }

    /// Use existing alert and audit stores
    pub fn with_stores(mut self, alerts: AlertManager, audit: AuditLog) -> Self {
        self.alerts = alerts;
        self.audit = audit;
        self
    }

    /// Preload earlier results, newest first. Anything past the retention
    /// limit is dropped.
    pub fn with_results(self, mut results: Vec<RiskAssessment>) -> Self {
        results.truncate(self.max_results);
        *self.results.write() = results;
        self
    }

    /// Classify a submission. Blank text is rejected before classification.
    pub async fn submit(&self, submission: ContentSubmission) -> Result<AnalysisOutcome> {
        if submission.content.trim().is_empty() {
            return Err(SentinelError::validation("content must not be empty"));
        }
        if submission.user_id.trim().is_empty() {
            return Err(SentinelError::validation("user id must not be empty"));
        }

        debug!(
            user_id = %submission.user_id,
            content_type = %submission.content_type,
            "Classifying submission"
        );
        let assessment = self.classifier.classify(&submission).await;

        {
            let mut results = self.results.write();
            results.insert(0, assessment.clone());
            results.truncate(self.max_results);
        }
        let alerts = self.alerts.raise_for_assessment(&assessment);

        let level = if assessment.risk_level == RiskLevel::High {
            SystemLogLevel::Warning
        } else {
            SystemLogLevel::Info
        };
        let kind = match assessment.content_type {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
        };
        self.audit.record(
            &assessment.user_id,
            "Content Analysis",
            format!(
                "Analyzed {} content with {}-risk classification",
                kind, assessment.risk_level
            ),
            level,
        );
        if !alerts.is_empty() {
            self.audit.record(
                &assessment.user_id,
                "Alert Generated",
                format!(
                    "{} alert(s) created for analysis ID {}",
                    alerts.len(),
                    assessment.id
                ),
                SystemLogLevel::Warning,
            );
        }

        info!(
            analysis_id = %assessment.id,
            risk_level = %assessment.risk_level,
            confidence = assessment.confidence,
            alerts = alerts.len(),
            "Analysis complete"
        );

        Ok(AnalysisOutcome { assessment, alerts })
    }

    /// All results, newest first
    pub fn results(&self) -> Vec<RiskAssessment> {
        self.results.read().clone()
    }

    /// Look up a result by ID
    pub fn result(&self, id: &str) -> Result<RiskAssessment> {
        self.results
            .read()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| SentinelError::not_found(format!("analysis {}", id)))
    }

    /// Result content with its matched keywords marked
    pub fn highlighted(&self, id: &str) -> Result<String> {
        let assessment = self.result(id)?;
        Ok(self
            .highlighter
            .highlight(&assessment.content, &assessment.keywords))
    }

    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}
