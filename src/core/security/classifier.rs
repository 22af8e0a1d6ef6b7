//! Content risk classification
//!
//! Scores content against the static keyword tiers, derives threat
//! categories and buckets the score into a [`RiskLevel`].

use std::sync::Arc;

use crate::config::ClassifierConfig;

use super::keywords::*;
use super::random::{RandomSource, SeededRandom, ThreadRandom};
use super::types::*;

/// Keyword matches accumulated over one piece of content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordScan {
    /// Matched keywords in discovery order
    pub keywords: Vec<String>,
    /// Additive risk score
    pub risk_score: u32,
    /// Additive confidence score, before jitter and clamping
    pub confidence_score: u32,
}

impl KeywordScan {
    /// Scan content for every keyword tier
    pub fn scan(content: &str) -> Self {
        let lower = content.to_lowercase();
        let mut scan = Self::default();
        scan.apply_tier(&lower, HIGH_RISK_KEYWORDS, HIGH_RISK_WEIGHT);
        scan.apply_tier(&lower, MEDIUM_RISK_KEYWORDS, MEDIUM_RISK_WEIGHT);
        scan
    }

    fn apply_tier(&mut self, lower: &str, keywords: &[&str], weight: KeywordWeight) {
        for keyword in keywords {
            if lower.contains(keyword) {
                self.keywords.push((*keyword).to_string());
                self.risk_score += weight.risk;
                self.confidence_score += weight.confidence;
            }
        }
    }
}

/// Stand-in for image analysis. No pixels are inspected: the score is bumped
/// by a random amount, confidence is replaced by a random value and a fixed
/// share of uploads is flagged as violent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlaceholderPolicy {
    /// Exclusive upper bound of the random score bump
    pub score_ceiling: u32,
    /// Probability of flagging the upload as violent
    pub flag_probability: f64,
}

impl ImagePlaceholderPolicy {
    fn apply(
        &self,
        random: &dyn RandomSource,
        risk_score: &mut u32,
        confidence: &mut f64,
        threats: &mut Vec<ThreatCategory>,
        keywords: &mut Vec<String>,
    ) {
        let bump = (random.next_unit() * self.score_ceiling as f64).floor() as u32;
        let bump = bump.min(self.score_ceiling.saturating_sub(1));
        *risk_score = risk_score.saturating_add(bump);
        *confidence = random.next_unit() * 100.0;

        if random.next_unit() < self.flag_probability {
            if !threats.contains(&ThreatCategory::Violence) {
                threats.push(ThreatCategory::Violence);
                threats.sort();
            }
            keywords.extend(IMAGE_FLAG_KEYWORDS.iter().map(|k| k.to_string()));
        }
    }
}

impl From<&ClassifierConfig> for ImagePlaceholderPolicy {
    fn from(config: &ClassifierConfig) -> Self {
        Self {
            score_ceiling: config.image_score_ceiling,
            flag_probability: config.image_flag_probability,
        }
    }
}

/// Maps a submission to a risk assessment. Total: every input yields a result.
#[derive(Debug, Clone)]
pub struct ContentRiskClassifier {
    confidence_jitter: f64,
    image_policy: ImagePlaceholderPolicy,
    random: Arc<dyn RandomSource>,
}

impl ContentRiskClassifier {
    /// Create a classifier with default settings and the thread RNG
    pub fn new() -> Self {
        Self::with_config(&ClassifierConfig::default())
    }

    /// Create a classifier from configuration. A configured seed selects a
    /// reproducible random source.
    pub fn with_config(config: &ClassifierConfig) -> Self {
        let random: Arc<dyn RandomSource> = match config.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self {
            confidence_jitter: config.confidence_jitter,
            image_policy: ImagePlaceholderPolicy::from(config),
            random,
        }
    }

    /// Replace the random source
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Classify a submission
    pub async fn classify(&self, submission: &ContentSubmission) -> RiskAssessment {
        self.classify_now(submission)
    }

    /// Synchronous form of [`classify`](Self::classify)
    pub fn classify_now(&self, submission: &ContentSubmission) -> RiskAssessment {
        let KeywordScan {
            mut keywords,
            mut risk_score,
            confidence_score,
        } = KeywordScan::scan(&submission.content);

        let mut detected_threats = categories_for_all(&keywords);

        let mut confidence = match submission.content_type {
            ContentKind::Text => {
                confidence_score as f64 + self.random.next_unit() * self.confidence_jitter
            }
            ContentKind::Image => confidence_score as f64,
        };

        if submission.content_type == ContentKind::Image {
            self.image_policy.apply(
                self.random.as_ref(),
                &mut risk_score,
                &mut confidence,
                &mut detected_threats,
                &mut keywords,
            );
        }

        RiskAssessment {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: submission.user_id.clone(),
            content: submission.content.clone(),
            content_type: submission.content_type,
            risk_level: RiskLevel::from_score(risk_score),
            confidence: clamp_confidence(confidence),
            detected_threats,
            keywords,
            timestamp: chrono::Utc::now(),
            processed: true,
        }
    }
}

impl Default for ContentRiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_confidence(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}
