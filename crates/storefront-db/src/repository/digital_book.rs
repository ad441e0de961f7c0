//! # Digital Book Repository
//!
//! Stock records for digital books. The SKU column is always derived with
//! `generate_sku`, and the table's `UNIQUE (partner_id, sku)` constraint is
//! what turns the collision-tolerant generator into a unique product code.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register(NewDigitalBook)                                              │
//! │       │                                                                 │
//! │       ├── validate title / price / currency / identifiers              │
//! │       │                                                                 │
//! │       ├── sku = generate_sku(book_key, partner_id)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT INTO digital_books                                             │
//! │       │                                                                 │
//! │       ├── OK → DigitalBook                                             │
//! │       └── UNIQUE (partner_id, sku) failed → DbError::UniqueViolation   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use storefront_core::validation::{
    validate_currency, validate_identifier, validate_price_cents, validate_title,
};
use storefront_core::{generate_sku, BookKey, DigitalBook, PartnerId, Sku};

const SELECT_COLUMNS: &str = r#"
    SELECT id, partner_id, book_key, sku, title, price_cents, currency,
           is_active, created_at, updated_at
    FROM digital_books
"#;

/// Input for registering a digital book.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDigitalBook {
    pub partner_id: PartnerId,
    pub book_key: BookKey,
    pub title: String,
    pub price_cents: i64,
    pub currency: String,
}

#[derive(Debug, FromRow)]
struct DigitalBookRow {
    id: String,
    partner_id: String,
    book_key: String,
    sku: String,
    title: String,
    price_cents: i64,
    currency: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DigitalBookRow> for DigitalBook {
    type Error = DbError;

    fn try_from(row: DigitalBookRow) -> Result<Self, Self::Error> {
        let sku: Sku = row
            .sku
            .parse()
            .map_err(|e| DbError::invalid_data("digital_books.sku", e))?;

        Ok(DigitalBook {
            id: row.id,
            partner_id: row.partner_id,
            book_key: row.book_key,
            sku,
            title: row.title,
            price_cents: row.price_cents,
            currency: row.currency,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for digital book stock records.
#[derive(Debug, Clone)]
pub struct DigitalBookRepository {
    pool: SqlitePool,
}

impl DigitalBookRepository {
    /// Creates a new DigitalBookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DigitalBookRepository { pool }
    }

    /// Registers a digital book for a partner, deriving its SKU.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty title/identifiers, negative price,
    ///   malformed currency
    /// * `DbError::UniqueViolation` - the partner already has a book with
    ///   this SKU (same key, or a colliding one)
    pub async fn register(&self, new: NewDigitalBook) -> DbResult<DigitalBook> {
        validate_identifier("partner_id", new.partner_id.as_str())?;
        validate_identifier("book_key", new.book_key.as_str())?;
        validate_title(&new.title)?;
        validate_price_cents(new.price_cents)?;
        let currency = validate_currency(&new.currency)?;

        let sku = Sku::for_book(&new.book_key, &new.partner_id);
        let now = Utc::now();

        let book = DigitalBook {
            id: Uuid::new_v4().to_string(),
            partner_id: new.partner_id.as_str().to_string(),
            book_key: new.book_key.as_str().to_string(),
            sku,
            title: new.title.trim().to_string(),
            price_cents: new.price_cents,
            currency,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        debug!(
            partner_id = %book.partner_id,
            book_key = %book.book_key,
            sku = %book.sku,
            "Registering digital book"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO digital_books (
                id, partner_id, book_key, sku, title, price_cents, currency,
                is_active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&book.id)
        .bind(&book.partner_id)
        .bind(&book.book_key)
        .bind(book.sku.as_str())
        .bind(&book.title)
        .bind(book.price_cents)
        .bind(&book.currency)
        .bind(book.is_active)
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(&self.pool)
        .await;

        match result.map_err(DbError::from) {
            Ok(_) => {
                info!(sku = %book.sku, partner_id = %book.partner_id, "Digital book registered");
                Ok(book)
            }
            Err(DbError::UniqueViolation { .. }) => {
                Err(DbError::duplicate("sku", book.sku.as_str()))
            }
            Err(e) => Err(e),
        }
    }

    /// Gets a book by its UUID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<DigitalBook>> {
        let row = sqlx::query_as::<_, DigitalBookRow>(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(DigitalBook::try_from).transpose()
    }

    /// Gets a partner's book by SKU.
    pub async fn get_by_sku(&self, partner_id: &PartnerId, sku: &Sku) -> DbResult<Option<DigitalBook>> {
        let row = sqlx::query_as::<_, DigitalBookRow>(&format!(
            "{SELECT_COLUMNS} WHERE partner_id = ?1 AND sku = ?2"
        ))
        .bind(partner_id.as_str())
        .bind(sku.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DigitalBook::try_from).transpose()
    }

    /// Gets a partner's book by catalog key.
    ///
    /// Looks up the recomputed SKU, so the key's case does not matter.
    pub async fn get_by_book_key(
        &self,
        partner_id: &PartnerId,
        book_key: &BookKey,
    ) -> DbResult<Option<DigitalBook>> {
        let sku = generate_sku(book_key.as_str(), partner_id.as_str());
        self.get_by_sku(partner_id, &sku).await
    }

    /// Lists a partner's active books ordered by title.
    pub async fn list_for_partner(&self, partner_id: &PartnerId, limit: u32) -> DbResult<Vec<DigitalBook>> {
        let rows = sqlx::query_as::<_, DigitalBookRow>(&format!(
            "{SELECT_COLUMNS} WHERE partner_id = ?1 AND is_active = 1 ORDER BY title LIMIT ?2"
        ))
        .bind(partner_id.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(partner_id = %partner_id, count = rows.len(), "Listed digital books");
        rows.into_iter().map(DigitalBook::try_from).collect()
    }

    /// Changes a book's price and returns the updated record.
    pub async fn update_price(&self, id: &str, price_cents: i64) -> DbResult<DigitalBook> {
        validate_price_cents(price_cents)?;

        let result = sqlx::query(
            "UPDATE digital_books SET price_cents = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(id)
        .bind(price_cents)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("DigitalBook", id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("DigitalBook", id))
    }

    /// Soft-deletes a book. It keeps its SKU, so the code stays reserved.
    pub async fn deactivate(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE digital_books SET is_active = 0, updated_at = ?2 WHERE id = ?1",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("DigitalBook", id));
        }

        info!(id = %id, "Digital book deactivated");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
