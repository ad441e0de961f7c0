//! # Repository Module
//!
//! Database repository implementations for storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller                                                                 │
//! │       │  db.digital_books().register(new_book)                          │
//! │       ▼                                                                 │
//! │  DigitalBookRepository / ProcessorResponseRepository                   │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`DigitalBookRepository`](digital_book::DigitalBookRepository) - Stock records keyed by derived SKU
//! - [`ProcessorResponseRepository`](processor_response::ProcessorResponseRepository) - Payment processor response log

pub mod digital_book;
pub mod processor_response;
