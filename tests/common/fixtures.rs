//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use threat_sentinel::core::security::FixedRandom;
use threat_sentinel::{
    AnalysisService, Config, ContentKind, ContentRiskClassifier, RiskAssessment, RiskLevel,
    ThreatCategory,
};
use uuid::Uuid;

/// Classifier replaying the given random samples
pub fn pinned_classifier(samples: Vec<f64>) -> ContentRiskClassifier {
    ContentRiskClassifier::new().with_random_source(Arc::new(FixedRandom::new(samples)))
}

/// Analysis service replaying the given random samples
pub fn pinned_service(config: &Config, samples: Vec<f64>) -> AnalysisService {
    AnalysisService::new(config).with_random_source(Arc::new(FixedRandom::new(samples)))
}

/// Factory for assessment records
pub struct AssessmentFactory;

impl AssessmentFactory {
    /// Low-risk text assessment for user "1"
    pub fn create() -> RiskAssessment {
        RiskAssessment {
            id: Uuid::new_v4().to_string(),
            user_id: "1".to_string(),
            content: "Having a great day".to_string(),
            content_type: ContentKind::Text,
            risk_level: RiskLevel::Low,
            confidence: 10,
            detected_threats: vec![],
            keywords: vec![],
            timestamp: Utc::now(),
            processed: true,
        }
    }

    /// Assessment at the given level with the given categories
    pub fn with_level(level: RiskLevel, threats: Vec<ThreatCategory>) -> RiskAssessment {
        let mut assessment = Self::create();
        assessment.risk_level = level;
        assessment.detected_threats = threats;
        assessment
    }

    /// Assessment stamped at `timestamp`
    pub fn at(timestamp: DateTime<Utc>) -> RiskAssessment {
        let mut assessment = Self::create();
        assessment.timestamp = timestamp;
        assessment
    }
}
