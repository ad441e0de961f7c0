//! # SKU Generation
//!
//! Derives the short, human-shareable product code of a digital book from
//! its catalog key and the selling partner's identifier.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SKU Derivation                                  │
//! │                                                                         │
//! │  book_key = "Digital-Book-Test-1"                                      │
//! │  partner  = "CAE1C9F5-F312-4ED7-8FCE-729BA9B64244"                     │
//! │       │                                                                 │
//! │       ▼  lowercase both, join with a single space                      │
//! │  "digital-book-test-1 cae1c9f5-f312-4ed7-8fce-729ba9b64244"            │
//! │       │                                                                 │
//! │       ▼  MD5 over the UTF-8 bytes, lowercase hex                       │
//! │  "b7aba5d5f4f50ca3aab3e836d2ab40ef"                                    │
//! │       │                                                                 │
//! │       ▼  last 7 characters, uppercased                                 │
//! │  "2AB40EF"                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mapping is deterministic but not collision-free. Uniqueness per
//! partner is enforced by the `digital_books` table in storefront-db.
//!
//! ## Usage
//! ```rust
//! use storefront_core::sku::generate_sku;
//!
//! let sku = generate_sku("digital-book-test-1", "cae1c9f5-f312-4ed7-8fce-729ba9b64244");
//! assert_eq!(sku.as_str(), "2AB40EF");
//! ```

use std::fmt;
use std::str::FromStr;

use md5::{Digest, Md5};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Number of characters in a generated SKU.
pub const SKU_LENGTH: usize = 7;

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog key of a digital book or course bundle.
///
/// Opaque and externally assigned; no format is imposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookKey(String);

impl BookKey {
    pub fn new(key: impl Into<String>) -> Self {
        BookKey(key.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a selling partner (usually a UUID literal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartnerId(String);

impl PartnerId {
    pub fn new(id: impl Into<String>) -> Self {
        PartnerId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Sku
// =============================================================================

/// A 7-character uppercase hexadecimal stock-keeping unit.
///
/// Only [`generate_sku`] and [`Sku::from_str`] construct one, so every value
/// matches `[0-9A-F]{7}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Sku(String);

impl Sku {
    /// Derives the SKU of `book` as sold by `partner`.
    pub fn for_book(book: &BookKey, partner: &PartnerId) -> Self {
        generate_sku(book.as_str(), partner.as_str())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sku {
    type Err = ValidationError;

    /// Parses a previously generated SKU. Lowercase hex is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != SKU_LENGTH {
            return Err(ValidationError::InvalidFormat {
                field: "sku".to_string(),
                reason: format!("must be exactly {} characters", SKU_LENGTH),
            });
        }

        if !s.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')) {
            return Err(ValidationError::InvalidFormat {
                field: "sku".to_string(),
                reason: "must contain only 0-9 and A-F".to_string(),
            });
        }

        Ok(Sku(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Sku {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Derives the SKU for a book key and partner identifier.
///
/// Both inputs are lowercased before hashing, so `("ABC", "XYZ")` and
/// `("abc", "xyz")` produce the same code. Any text is accepted, including
/// empty strings and values with surrounding whitespace.
///
/// ## Example
/// ```rust
/// use storefront_core::sku::generate_sku;
///
/// assert_eq!(generate_sku("ABC", "XYZ"), generate_sku("abc", "xyz"));
/// assert_eq!(generate_sku("", "").as_str(), "899EC5F");
/// ```
pub fn generate_sku(book_key: &str, partner_id: &str) -> Sku {
    let material = format!("{} {}", book_key.to_lowercase(), partner_id.to_lowercase());
    let digest = hex::encode(Md5::digest(material.as_bytes()));

    // hex output is ASCII, so byte slicing lands on char boundaries
    Sku(digest[digest.len() - SKU_LENGTH..].to_uppercase())
}

// =============================================================================
// Unit Tests
// =============================================================================
