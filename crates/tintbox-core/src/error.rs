//! Error type shared by color and shade ramp operations.

use thiserror::Error;

/// Errors raised while constructing or converting colors and shade ramps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Malformed hex string or non-numeric RGB component.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A shade map with a foreign, missing or duplicated key.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Attempted to mutate a shade ramp.
    #[error("Shades are immutable")]
    ImmutableCollection,
    /// The host theme integration is not loaded.
    #[error("Integration not available: {0}")]
    IntegrationUnavailable(String),
    /// Named palette or theme color does not exist.
    #[error("Color {0} not found")]
    NotFound(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_subject() {
        assert_eq!(
            ColorError::NotFound("teal".to_string()).to_string(),
            "Color teal not found"
        );
        assert_eq!(
            ColorError::Validation("Missing shade 950".to_string()).to_string(),
            "Validation error: Missing shade 950"
        );
        assert_eq!(ColorError::ImmutableCollection.to_string(), "Shades are immutable");
    }
}
