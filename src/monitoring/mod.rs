//! Alerting and audit trail
//!
//! In-memory stores for alerts raised by analyses and for the system audit log.

pub mod alerts;
pub mod audit;

pub use alerts::{Alert, AlertFilter, AlertManager, AlertSeverity, AlertStats, AlertStatusFilter};
pub use audit::{AuditLog, SystemLog, SystemLogLevel};
