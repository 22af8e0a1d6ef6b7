//! Classifier configuration

use serde::{Deserialize, Serialize};

/// Tunables for the content risk classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Upper bound (exclusive) of the random confidence jitter on the text path
    #[serde(default = "default_confidence_jitter")]
    pub confidence_jitter: f64,
    /// Upper bound (exclusive) of the random score added on the image path
    #[serde(default = "default_image_score_ceiling")]
    pub image_score_ceiling: u32,
    /// Probability that the image placeholder flags violent content
    #[serde(default = "default_image_flag_probability")]
    pub image_flag_probability: f64,
    /// Seed for a reproducible random source; thread RNG when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_jitter: default_confidence_jitter(),
            image_score_ceiling: default_image_score_ceiling(),
            image_flag_probability: default_image_flag_probability(),
            seed: None,
        }
    }
}

impl ClassifierConfig {
    /// Merge classifier configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.confidence_jitter != default_confidence_jitter() {
            self.confidence_jitter = other.confidence_jitter;
        }
        if other.image_score_ceiling != default_image_score_ceiling() {
            self.image_score_ceiling = other.image_score_ceiling;
        }
        if other.image_flag_probability != default_image_flag_probability() {
            self.image_flag_probability = other.image_flag_probability;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        self
    }
}

fn default_confidence_jitter() -> f64 {
    20.0
}

fn default_image_score_ceiling() -> u32 {
    40
}

fn default_image_flag_probability() -> f64 {
    0.3
}
