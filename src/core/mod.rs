//! Core functionality for threat-sentinel
//!
//! Classification, the analysis service built on it, and reporting.

pub mod analysis;
pub mod reports;
pub mod security;
