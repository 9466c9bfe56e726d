//! # Error Types
//!
//! Domain-specific error types for taproom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  taproom-core errors (this file)                                       │
//! │  ├── CoreError        - View-state and lookup failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  taproom-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Site API errors (in app)                                              │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations have no error variants: unknown items and decrements of
//! empty lines are tolerated.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core view-state errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A slideshow was constructed without any images.
    #[error("Slideshow requires at least one image")]
    EmptySlideshow,

    /// Direct slide jump outside `[0, len)`.
    ///
    /// ## When This Occurs
    /// Dot navigation sent an index the current image list does not have.
    /// The slideshow keeps its previous index.
    #[error("Slide index {index} is out of range (slideshow has {len} images)")]
    SlideIndexOutOfRange { index: usize, len: usize },

    /// CMS collection name is not one the site knows how to read.
    #[error("Unknown content collection: {0}")]
    UnknownCollection(String),

    /// Anchor does not name a page section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Embedded menu data could not be parsed.
    #[error("Menu data is malformed: {0}")]
    MalformedMenu(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a value enters the view state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., invalid email, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two menu items with one name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SlideIndexOutOfRange { index: 9, len: 7 };
        assert_eq!(
            err.to_string(),
            "Slide index 9 is out of range (slideshow has 7 images)"
        );

        let err = CoreError::UnknownCollection("menus".to_string());
        assert_eq!(err.to_string(), "Unknown content collection: menus");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "guests must be between 1 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
