//! # storefront-db: Database Layer for Storefront
//!
//! SQLite storage via sqlx for digital book stock records and payment
//! processor bookkeeping.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  seed binary / embedding service                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │   Database    │    │  Repositories    │   │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│  DigitalBook     │   │ (embedded)  │  │   │
//! │  │   │               │    │  ProcessorResp.  │   │             │  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   context: task-local RequestContext scope                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (WAL) or :memory:                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_core::{BookKey, PartnerId, RequestContext};
//! use storefront_db::{Database, DbConfig, NewDigitalBook};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//!
//! let book = db.digital_books().register(NewDigitalBook {
//!     partner_id: PartnerId::new("cae1c9f5-f312-4ed7-8fce-729ba9b64244"),
//!     book_key: BookKey::new("digital-book-test-1"),
//!     title: "Demo eBook".into(),
//!     price_cents: 4900,
//!     currency: "usd".into(),
//! }).await?;
//! assert_eq!(book.sku.as_str(), "2AB40EF");
//!
//! let ctx = RequestContext::new();
//! db.processor_responses()
//!     .record(&ctx, "cybersource", response_json, Some("txn-1"), None)
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::digital_book::{DigitalBookRepository, NewDigitalBook};
pub use repository::processor_response::ProcessorResponseRepository;
