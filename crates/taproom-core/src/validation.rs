//! # Validation Module
//!
//! Rules for the reservation form.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Browser form                                                  │
//! │  ├── required name/email, guests 1..100                                 │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: POST /api/reservations                                        │
//! │  └── THIS MODULE: the same rules, enforced server side                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Optional fields accept an empty string as "not given".
//!
//! ## Usage
//! ```rust
//! use taproom_core::validation::{validate_email, validate_guests};
//!
//! validate_email("guest@example.com").unwrap();
//! assert_eq!(validate_guests("4").unwrap(), Some(4));
//! assert_eq!(validate_guests("").unwrap(), None);
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::MAX_PARTY_SIZE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted guest name.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted email address.
pub const MAX_EMAIL_LEN: usize = 254;

/// Longest accepted phone number.
pub const MAX_PHONE_LEN: usize = 20;

/// Longest accepted free-text message.
pub const MAX_MESSAGE_LEN: usize = 2000;

// =============================================================================
// Required Fields
// =============================================================================

/// Validates the guest's name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Shape `local@domain.tld`, no whitespace
///
/// ## Example
/// ```rust
/// use taproom_core::validation::validate_email;
///
/// assert!(validate_email("a@b.co").is_ok());
/// assert!(validate_email("a@b").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    // Domain needs at least one inner dot with non-empty labels around it
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid("must look like name@example.com"));
    }

    Ok(())
}

// =============================================================================
// Optional Fields
// =============================================================================

/// Validates an optional phone number.
///
/// Digits, spaces and `+ - ( )` only.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Ok(());
    }

    if phone.len() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional party size.
///
/// Returns `None` when the field was left blank.
pub fn validate_guests(guests: &str) -> ValidationResult<Option<u32>> {
    let guests = guests.trim();

    if guests.is_empty() {
        return Ok(None);
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: "guests".to_string(),
        min: 1,
        max: MAX_PARTY_SIZE,
    };

    let count: i64 = guests.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "guests".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if !(1..=MAX_PARTY_SIZE).contains(&count) {
        return Err(out_of_range());
    }

    u32::try_from(count).map(Some).map_err(|_| out_of_range())
}

/// Validates an optional `YYYY-MM-DD` date.
pub fn validate_date(date: &str) -> ValidationResult<Option<NaiveDate>> {
    let date = date.trim();

    if date.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "must be YYYY-MM-DD".to_string(),
        })
}

/// Validates an optional 24-hour `HH:MM` time.
pub fn validate_time(time: &str) -> ValidationResult<Option<NaiveTime>> {
    let time = time.trim();

    if time.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(time, "%H:%M")
        .map(Some)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "must be HH:MM".to_string(),
        })
}

/// Validates the free-text message length.
pub fn validate_message(message: &str) -> ValidationResult<()> {
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong {
            field: "message".to_string(),
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Asha").is_ok());
        assert!(matches!(
            validate_name("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_name(&"x".repeat(101)),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.in").is_ok());

        assert!(matches!(
            validate_email(""),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["guest", "@example.com", "guest@", "guest@example", "a@b@c.com", "a b@c.com", "a@.com", "a@b."] {
            assert!(
                matches!(validate_email(bad), Err(ValidationError::InvalidFormat { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("+91 98765-43210").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone(&"1".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_guests() {
        assert_eq!(validate_guests("").unwrap(), None);
        assert_eq!(validate_guests("1").unwrap(), Some(1));
        assert_eq!(validate_guests(" 100 ").unwrap(), Some(100));

        assert!(matches!(
            validate_guests("0"),
            Err(ValidationError::OutOfRange { min: 1, max: 100, .. })
        ));
        assert!(matches!(
            validate_guests("101"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_guests("-3"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_guests("four"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_date_and_time() {
        assert_eq!(
            validate_date("2024-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert_eq!(validate_date("").unwrap(), None);
        assert!(validate_date("31/12/2024").is_err());
        assert!(validate_date("2024-02-30").is_err());

        assert_eq!(validate_time("19:30").unwrap(), NaiveTime::from_hms_opt(19, 30, 0));
        assert!(validate_time("7pm").is_err());
        assert!(validate_time("24:00").is_err());
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("").is_ok());
        assert!(validate_message(&"é".repeat(2000)).is_ok());
        assert!(validate_message(&"x".repeat(2001)).is_err());
    }
}
