//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

pub mod alerting;
pub mod analysis;
pub mod audit;
pub mod classifier;
pub mod logging;
pub mod reports;
pub mod sentinel;

// Re-export all configuration types
pub use alerting::*;
pub use analysis::*;
pub use audit::*;
pub use classifier::*;
pub use logging::*;
pub use reports::*;
pub use sentinel::*;

pub fn default_true() -> bool {
    true
}
