//! # Domain Types
//!
//! Records persisted by storefront-db and handed to the frontend.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │    DigitalBook       │        │   ProcessorResponse      │          │
//! │  │  ──────────────────  │        │  ──────────────────────  │          │
//! │  │  id (UUID)           │        │  id (UUID)               │          │
//! │  │  partner_id          │        │  processor_name          │          │
//! │  │  book_key            │        │  transaction_id?         │          │
//! │  │  sku (derived)       │        │  basket_id?              │          │
//! │  │  title               │        │  response (JSON)         │          │
//! │  │  price_cents         │        │  request_id?             │          │
//! │  └──────────────────────┘        └──────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! - `id`: UUID v4, immutable, used for database relations
//! - Business ID: `sku` for books, `transaction_id` for processor responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::sku::{generate_sku, Sku};

// =============================================================================
// Digital Book
// =============================================================================

/// A digital book stock record offered by one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DigitalBook {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Partner selling this book.
    pub partner_id: String,

    /// Catalog key the SKU was derived from.
    pub book_key: String,

    /// Always `generate_sku(book_key, partner_id)`.
    pub sku: Sku,

    /// Display title.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// ISO 4217 currency code, lowercase.
    pub currency: String,

    /// Whether the book is still for sale (soft delete).
    pub is_active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl DigitalBook {
    /// Checks that the stored SKU still matches its inputs.
    pub fn sku_matches_key(&self) -> bool {
        generate_sku(&self.book_key, &self.partner_id) == self.sku
    }
}

// =============================================================================
// Processor Response
// =============================================================================

/// A raw document returned by a payment processor, kept verbatim.
///
/// Append-only. One row per response or notification, so a transaction's
/// history can be replayed when reconciling with the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessorResponse {
    pub id: String,

    /// Name of the processor that produced the response ("cybersource", ...).
    pub processor_name: String,

    /// Processor-side transaction identifier, when one was returned.
    pub transaction_id: Option<String>,

    /// Basket the payment was for, when known.
    pub basket_id: Option<String>,

    /// The response document as received.
    #[ts(type = "unknown")]
    pub response: Value,

    /// Request that recorded the response.
    pub request_id: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl ProcessorResponse {
    /// Returns the recorded error code, if this response records a failure.
    pub fn error_code(&self) -> Option<&str> {
        self.response.get("error").and_then(Value::as_str)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
