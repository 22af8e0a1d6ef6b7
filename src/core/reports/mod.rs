//! Reports and dashboard statistics
//!
//! Reports summarise analyses, alerts, users and audit entries over a date
//! range. Export writes the report data as JSON under a file name whose
//! extension follows the requested format; no real PDF or CSV is produced.

mod dashboard;
mod generator;
mod types;

pub use dashboard::{DashboardStats, RiskDistribution, ThreatTypeCounts};
pub use generator::{ReportGenerator, ReportRequest};
pub use types::{DateRange, Report, ReportFormat, ReportType};
