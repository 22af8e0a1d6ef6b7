//! Error handling for threat-sentinel
//!
//! This module defines the crate-wide error type and its constructors.

mod helpers;
mod types;

pub use types::{Result, SentinelError};
