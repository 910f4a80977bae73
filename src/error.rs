//! Unified error handling for the trip-recorder library.
//!
//! The route builder, aggregates and achievement engine are total and never
//! fail. Errors only surface at the edges: assembling a trip, looking up a
//! catalog tag that came from outside, and exporting JSON.

use thiserror::Error;

/// Unified error type for trip-recorder operations.
#[derive(Debug, Error)]
pub enum TripError {
    /// Trip assembly was called without any photos
    #[error("Trip has no photos with a valid timestamp")]
    NoPhotos,

    /// A type tag that is not part of the achievement catalog
    #[error("Unknown achievement type '{tag}'")]
    UnknownAchievement { tag: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for trip-recorder operations.
pub type Result<T> = std::result::Result<T, TripError>;

/// Extension trait for converting Option to TripError.
pub trait OptionExt<T> {
    /// Convert Option to Result with an unknown achievement error.
    fn ok_or_unknown_achievement(self, tag: &str) -> Result<T>;

    /// Convert Option to Result with a configuration error.
    fn ok_or_config(self, message: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_unknown_achievement(self, tag: &str) -> Result<T> {
        self.ok_or_else(|| TripError::UnknownAchievement {
            tag: tag.to_string(),
        })
    }

    fn ok_or_config(self, message: &str) -> Result<T> {
        self.ok_or_else(|| TripError::Config {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TripError::UnknownAchievement {
            tag: "warp_speed".to_string(),
        };
        assert!(err.to_string().contains("warp_speed"));

        let err = TripError::Config {
            message: "empty name format".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: empty name format");
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let result = none.ok_or_unknown_achievement("nope");
        assert!(matches!(
            result,
            Err(TripError::UnknownAchievement { ref tag }) if tag == "nope"
        ));

        assert_eq!(Some(3).ok_or_config("unused").ok(), Some(3));
    }

    #[test]
    fn test_serialization_error_converts() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: TripError = bad.unwrap_err().into();
        assert!(matches!(err, TripError::Serialization(_)));
    }
}
