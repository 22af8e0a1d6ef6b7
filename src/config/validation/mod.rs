//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `sentinel_validators`: Validators for every configuration section
//! - `tests`: Test suite for all validators

mod sentinel_validators;
mod trait_def;

pub use sentinel_validators::MAX_IMAGE_SCORE_CEILING;
pub use trait_def::Validate;
