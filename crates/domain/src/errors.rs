//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the WGS84 range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Station", "Alexanderplatz");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Station");
                assert_eq!(id, "Alexanderplatz");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Station", "Nowhere");
        assert_eq!(err.to_string(), "Station not found: Nowhere");
    }

    #[test]
    fn invalid_coordinates_message_mentions_values() {
        let err = DomainError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 13.0,
        };
        assert!(err.to_string().contains("91"));
    }
}
