//! Alert management system
//!
//! Raises alerts for risky assessments and supports analyst triage.

mod manager;
mod types;

pub use manager::AlertManager;
pub use types::{Alert, AlertFilter, AlertSeverity, AlertStats, AlertStatusFilter};
