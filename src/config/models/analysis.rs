//! Analysis result retention

use serde::{Deserialize, Serialize};

/// Analysis service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of results kept, oldest dropped first
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl AnalysisConfig {
    /// Merge analysis configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_results != default_max_results() {
            self.max_results = other.max_results;
        }
        self
    }
}

fn default_max_results() -> usize {
    10_000
}
