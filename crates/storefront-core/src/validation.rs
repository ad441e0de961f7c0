//! # Validation Module
//!
//! Input checks run before a record reaches storage.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI / caller                                                 │
//! │  └── Type validation (UTF-8 text, parsed numbers)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rule validation (title, price, currency, partner)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE (partner_id, sku)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `generate_sku` deliberately sits outside this module: it accepts any text.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted book title.
pub const MAX_TITLE_LEN: usize = 255;

/// Longest accepted book key or partner identifier.
pub const MAX_IDENTIFIER_LEN: usize = 255;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a book title.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_title;
///
/// assert!(validate_title("Demo Course eBook").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates an identifier stored alongside a SKU (book key, partner id).
///
/// Storage needs a non-empty, bounded value even though the generator does
/// not.
pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_IDENTIFIER_LEN,
        });
    }

    Ok(())
}

/// Validates an ISO 4217 currency code (three ASCII letters).
///
/// ## Returns
/// The code lowercased, as stored.
pub fn validate_currency(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a three-letter ISO 4217 code".to_string(),
        });
    }

    Ok(code.to_ascii_lowercase())
}

/// Validates a processor name used for bookkeeping.
pub fn validate_processor_name(name: &str) -> ValidationResult<()> {
    validate_identifier("processor_name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (free books).
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4900).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
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
    fn test_validate_title() {
        assert!(validate_title("Demo Course eBook").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("book_key", "digital-book-test-1").is_ok());
        assert!(validate_identifier("book_key", " spaced key ").is_ok());

        let err = validate_identifier("partner_id", "").unwrap_err();
        assert_eq!(err.to_string(), "partner_id is required");
        assert!(validate_identifier("partner_id", &"x".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_currency() {
        assert_eq!(validate_currency("USD").unwrap(), "usd");
        assert_eq!(validate_currency(" eur ").unwrap(), "eur");
        assert!(validate_currency("US").is_err());
        assert!(validate_currency("US1").is_err());
        assert!(validate_currency("").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(4900).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_processor_name() {
        assert!(validate_processor_name("cybersource").is_ok());
        assert!(validate_processor_name(" ").is_err());
    }
}
