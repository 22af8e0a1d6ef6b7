//! Keyword tables for risk scoring
//!
//! Static trigger lists and the category mapping derived from them.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::ThreatCategory;

/// Triggers worth 30 risk points and 15 confidence points each
pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "kill",
    "murder",
    "bomb",
    "explosive",
    "weapon",
    "gun",
    "knife",
    "attack",
    "terrorist",
    "terrorism",
    "jihad",
    "extremist",
    "radical",
    "suicide",
    "end my life",
    "kill myself",
    "don't want to live",
    "hate",
    "destroy",
    "revenge",
    "hurt",
    "harm",
    "violence",
];

/// Triggers worth 15 risk points and 8 confidence points each
pub const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "angry",
    "frustrated",
    "planning",
    "government",
    "corrupt",
    "system",
    "cause",
    "revolution",
    "fight",
    "struggle",
    "meaningless",
    "hopeless",
    "depressed",
    "sad",
    "alone",
    "nobody cares",
];

/// Keywords appended by the image placeholder policy when it flags content
pub const IMAGE_FLAG_KEYWORDS: &[&str] = &["weapon detected", "suspicious object"];

/// Category membership, in reporting order
pub const CATEGORY_KEYWORDS: &[(ThreatCategory, &[&str])] = &[
    (
        ThreatCategory::Violence,
        &[
            "kill", "murder", "attack", "hurt", "harm", "violence", "weapon", "gun", "knife",
        ],
    ),
    (
        ThreatCategory::Terrorism,
        &["bomb", "terrorist", "terrorism", "jihad", "explosive"],
    ),
    (
        ThreatCategory::Suicide,
        &["suicide", "end my life", "kill myself", "don't want to live"],
    ),
    (
        ThreatCategory::Extremism,
        &["extremist", "radical", "revolution", "cause", "corrupt", "system"],
    ),
];

/// Weight pair applied when a keyword tier matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordWeight {
    pub risk: u32,
    pub confidence: u32,
}

pub const HIGH_RISK_WEIGHT: KeywordWeight = KeywordWeight {
    risk: 30,
    confidence: 15,
};

pub const MEDIUM_RISK_WEIGHT: KeywordWeight = KeywordWeight {
    risk: 15,
    confidence: 8,
};

/// Reverse index from keyword to the categories it triggers
static KEYWORD_CATEGORIES: Lazy<HashMap<&'static str, Vec<ThreatCategory>>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, Vec<ThreatCategory>> = HashMap::new();
    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords.iter() {
            index.entry(*keyword).or_default().push(*category);
        }
    }
    index
});

/// Categories triggered by a single keyword
pub fn categories_for(keyword: &str) -> &'static [ThreatCategory] {
    KEYWORD_CATEGORIES
        .get(keyword)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Categories triggered by any of the matched keywords, in reporting order
pub fn categories_for_all<S: AsRef<str>>(keywords: &[S]) -> Vec<ThreatCategory> {
    ThreatCategory::ALL
        .into_iter()
        .filter(|category| {
            keywords
                .iter()
                .any(|k| categories_for(k.as_ref()).contains(category))
        })
        .collect()
}
