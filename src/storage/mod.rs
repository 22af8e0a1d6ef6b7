//! Read-only data sources
//!
//! The dashboard reads its analyses, alerts, logs, users and reports through
//! [`DataSource`]. [`SeedDataSource`] serves fixed demonstration data.

pub mod models;
mod seed;

pub use models::{User, UserRole, UserStatus};
pub use seed::SeedDataSource;

use crate::core::reports::Report;
use crate::core::security::RiskAssessment;
use crate::monitoring::{Alert, SystemLog};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of fixture records
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Past assessments, newest first
    async fn analyses(&self) -> Result<Vec<RiskAssessment>>;

    /// Alerts, newest first
    async fn alerts(&self) -> Result<Vec<Alert>>;

    /// Audit entries, newest first
    async fn logs(&self) -> Result<Vec<SystemLog>>;

    /// Known users
    async fn users(&self) -> Result<Vec<User>>;

    /// Previously generated reports
    async fn reports(&self) -> Result<Vec<Report>>;
}
