//! Audit log configuration

use serde::{Deserialize, Serialize};

/// Audit log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum number of retained entries
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl AuditConfig {
    /// Merge audit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_entries != default_max_entries() {
            self.max_entries = other.max_entries;
        }
        self
    }
}

fn default_max_entries() -> usize {
    5000
}
