//! Security type definitions
//!
//! Core types used throughout the security module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content submitted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Free text
    #[default]
    Text,
    /// Image placeholder (no real image analysis)
    Image,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Image => write!(f, "image"),
        }
    }
}

/// Content submitted for classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSubmission {
    /// Raw, unsanitized content
    pub content: String,
    /// Content kind
    pub content_type: ContentKind,
    /// Opaque submitter identifier
    pub user_id: String,
}

impl ContentSubmission {
    /// Create a text submission
    pub fn text(content: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentKind::Text,
            user_id: user_id.into(),
        }
    }

    /// Create an image submission from an uploaded file name
    pub fn image(file_name: &str, user_id: impl Into<String>) -> Self {
        Self {
            content: format!("[Image uploaded: {}]", file_name),
            content_type: ContentKind::Image,
            user_id: user_id.into(),
        }
    }
}

/// Ordinal risk classification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Score at or above which content is high risk
    pub const HIGH_THRESHOLD: u32 = 60;
    /// Score at or above which content is medium risk
    pub const MEDIUM_THRESHOLD: u32 = 25;

    /// Bucket an accumulated risk score. Boundaries belong to the upper bucket.
    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {}", s)),
        }
    }
}

/// Threat category attached to an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatCategory {
    Violence,
    Terrorism,
    Suicide,
    Extremism,
}

impl ThreatCategory {
    /// All categories in reporting order
    pub const ALL: [ThreatCategory; 4] = [
        ThreatCategory::Violence,
        ThreatCategory::Terrorism,
        ThreatCategory::Suicide,
        ThreatCategory::Extremism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::Violence => "violence",
            ThreatCategory::Terrorism => "terrorism",
            ThreatCategory::Suicide => "suicide",
            ThreatCategory::Extremism => "extremism",
        }
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreatCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "violence" => Ok(ThreatCategory::Violence),
            "terrorism" => Ok(ThreatCategory::Terrorism),
            "suicide" => Ok(ThreatCategory::Suicide),
            "extremism" => Ok(ThreatCategory::Extremism),
            _ => Err(format!("Invalid threat category: {}", s)),
        }
    }
}

/// Result of classifying one submission. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Unique assessment ID
    pub id: String,
    /// Submitter copied from the submission
    pub user_id: String,
    /// Content copied verbatim
    pub content: String,
    /// Content kind copied from the submission
    pub content_type: ContentKind,
    /// Derived risk level
    pub risk_level: RiskLevel,
    /// Confidence percentage in [0, 100]
    pub confidence: u8,
    /// Detected categories, each at most once
    pub detected_threats: Vec<ThreatCategory>,
    /// Matched triggers in discovery order
    pub keywords: Vec<String>,
    /// Classification time
    pub timestamp: DateTime<Utc>,
    /// Always true for classifier output
    pub processed: bool,
}

impl RiskAssessment {
    /// Whether the assessment carries the given category
    pub fn has_threat(&self, category: ThreatCategory) -> bool {
        self.detected_threats.contains(&category)
    }
}
