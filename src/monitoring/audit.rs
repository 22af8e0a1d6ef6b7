//! Audit trail of system actions
//!
//! Entries are retained in memory for display and mirrored to `tracing`.

use crate::config::AuditConfig;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Severity of a system log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemLogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for SystemLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemLogLevel::Info => write!(f, "INFO"),
            SystemLogLevel::Warning => write!(f, "WARNING"),
            SystemLogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for SystemLogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(SystemLogLevel::Info),
            "warn" | "warning" => Ok(SystemLogLevel::Warning),
            "error" => Ok(SystemLogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// One audit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemLog {
    pub id: String,
    pub user_id: String,
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub level: SystemLogLevel,
}

/// Bounded in-memory audit log
#[derive(Debug, Clone)]
pub struct AuditLog {
    max_entries: usize,
    entries: Arc<RwLock<VecDeque<SystemLog>>>,
}

impl AuditLog {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            max_entries: config.max_entries,
            entries: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    /// Create an audit log preloaded with existing entries, oldest first
    pub fn with_entries(config: &AuditConfig, entries: Vec<SystemLog>) -> Self {
        let log = Self::new(config);
        for entry in entries {
            log.push(entry);
        }
        log
    }

    /// Record an action
    pub fn record(
        &self,
        user_id: &str,
        action: &str,
        details: impl Into<String>,
        level: SystemLogLevel,
    ) -> SystemLog {
        let entry = SystemLog {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            action: action.to_string(),
            details: details.into(),
            timestamp: Utc::now(),
            level,
        };

        match level {
            SystemLogLevel::Info => info!(user_id, action, "{}", entry.details),
            SystemLogLevel::Warning => warn!(user_id, action, "{}", entry.details),
            SystemLogLevel::Error => error!(user_id, action, "{}", entry.details),
        }

        self.push(entry.clone());
        entry
    }

    fn push(&self, entry: SystemLog) {
        let mut entries = self.entries.write();
        entries.push_back(entry);
        while entries.len() > self.max_entries {
            entries.pop_front();
        }
    }

    /// All entries, newest first
    pub fn entries(&self) -> Vec<SystemLog> {
        self.entries.read().iter().rev().cloned().collect()
    }

    /// Entries at exactly `level`, newest first
    pub fn by_level(&self, level: SystemLogLevel) -> Vec<SystemLog> {
        self.entries
            .read()
            .iter()
            .rev()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    /// Entries for one user, newest first
    pub fn by_user(&self, user_id: &str) -> Vec<SystemLog> {
        self.entries
            .read()
            .iter()
            .rev()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
