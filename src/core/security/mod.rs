//! Content risk classification
//!
//! This module scores submitted content against static keyword tiers,
//! attaches threat categories and highlights matched keywords for display.

mod classifier;
mod highlight;
pub mod keywords;
mod random;
mod types;

pub use classifier::{ContentRiskClassifier, ImagePlaceholderPolicy, KeywordScan};
pub use highlight::{DEFAULT_MARK_CLOSE, DEFAULT_MARK_OPEN, KeywordHighlighter, highlight_keywords};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use types::{ContentKind, ContentSubmission, RiskAssessment, RiskLevel, ThreatCategory};
