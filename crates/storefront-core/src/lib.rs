//! # storefront-core: Pure Business Logic for Storefront
//!
//! Everything here is deterministic and free of I/O: SKU derivation for
//! digital books, identifier types, the payment error taxonomy and the
//! records the storage layer persists.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 generate-sku CLI / seed binary                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    sku    │  │  payment  │  │   types   │  │ validation│  │   │
//! │  │   │ generate  │  │  errors   │  │ Book,     │  │   rules   │  │   │
//! │  │   │   _sku    │  │  + codes  │  │ Response  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-db (Database Layer)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`sku`] - SKU generator and identifier newtypes
//! - [`payment`] - Payment processor error taxonomy
//! - [`types`] - Persisted records (DigitalBook, ProcessorResponse)
//! - [`context`] - Per-request context passed to bookkeeping operations
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::generate_sku;
//!
//! let sku = generate_sku("digital-book-test-1", "cae1c9f5-f312-4ed7-8fce-729ba9b64244");
//! assert_eq!(sku.to_string(), "2AB40EF");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod error;
pub mod payment;
pub mod sku;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use context::RequestContext;
pub use error::ValidationError;
pub use payment::PaymentError;
pub use sku::{generate_sku, BookKey, PartnerId, Sku, SKU_LENGTH};
pub use types::*;
