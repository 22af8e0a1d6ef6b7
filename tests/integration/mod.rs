//! Integration tests for threat-sentinel
//!
//! These tests exercise the public API across modules without mocking.

pub mod analysis_flow_tests;
pub mod classifier_tests;
pub mod config_validation_tests;
pub mod error_handling_tests;
pub mod report_export_tests;
