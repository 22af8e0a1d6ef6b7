//! Report type definitions

use crate::utils::error::{Result, SentinelError};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|e| {
        tracing::error!("Failed to compile whitespace regex: {}", e);
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// Kind of report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    ThreatSummary,
    UserActivity,
    SystemHealth,
    Custom,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::ThreatSummary => "Threat Summary",
            ReportType::UserActivity => "User Activity",
            ReportType::SystemHealth => "System Health",
            ReportType::Custom => "Custom Report",
        }
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "threat-summary" => Ok(ReportType::ThreatSummary),
            "user-activity" => Ok(ReportType::UserActivity),
            "system-health" => Ok(ReportType::SystemHealth),
            "custom" => Ok(ReportType::Custom),
            _ => Err(format!("Invalid report type: {}", s)),
        }
    }
}

/// Requested export format. Only the file extension follows the format;
/// the written body is always JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
    #[default]
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

/// Inclusive time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window of `days` days ending at `end`. Negative or unrepresentable
    /// spans are rejected.
    pub fn last_days(end: DateTime<Utc>, days: i64) -> Result<Self> {
        if days < 0 {
            return Err(SentinelError::validation(format!(
                "Report window cannot be negative: {} days",
                days
            )));
        }
        let start = chrono::TimeDelta::try_days(days)
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or_else(|| {
                SentinelError::validation(format!("Report window of {} days is out of range", days))
            })?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

/// Generated report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    pub date_range: DateRange,
    pub generated_by: String,
    pub generated_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

impl Report {
    /// Title with whitespace runs and path separators replaced by `_`, plus the format extension
    pub fn file_name(&self) -> String {
        let stem = WHITESPACE_RUN
            .replace_all(self.title.trim(), "_")
            .replace(['/', '\\'], "_");
        let stem = if stem.is_empty() { "report".to_string() } else { stem };
        format!("{}.{}", stem, self.format.extension())
    }

    /// Write the pretty-printed report data into `dir`, returning the file path
    pub async fn export(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(self.file_name());
        let body = serde_json::to_string_pretty(&self.data)?;
        tokio::fs::write(&path, body).await?;

        info!("Exported report '{}' to {:?}", self.title, path);
        Ok(path)
    }
}
