//! Report export configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Directory exported reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl ReportsConfig {
    /// Merge report configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.output_dir != default_output_dir() {
            self.output_dir = other.output_dir;
        }
        self
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}
