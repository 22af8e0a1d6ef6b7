//! Validation trait shared by every configuration section

/// Checks a configuration section, returning a human-readable reason on failure
pub trait Validate {
    fn validate(&self) -> Result<(), String>;

    /// Validate, prefixing any error with the section name
    fn validate_section(&self, section: &str) -> Result<(), String> {
        self.validate().map_err(|e| format!("{}: {}", section, e))
    }
}
