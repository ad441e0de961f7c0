//! # Processor Response Repository
//!
//! Append-only bookkeeping of what payment processors sent back.
//!
//! ## Why Record Everything
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Processor ──► response / notification                                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  record(ctx, "cybersource", json, Some(txn), Some(basket))             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  processor_responses (one row per document, never updated)             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  list_for_transaction(txn) ──► reconcile refunds, disputes, retries     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures go through [`ProcessorResponseRepository::record_error`], which
//! stores the error's code and message in the same table.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use storefront_core::validation::validate_processor_name;
use storefront_core::{PaymentError, ProcessorResponse, RequestContext};

const SELECT_COLUMNS: &str = r#"
    SELECT id, processor_name, transaction_id, basket_id, response,
           request_id, created_at
    FROM processor_responses
"#;

#[derive(Debug, FromRow)]
struct ProcessorResponseRow {
    id: String,
    processor_name: String,
    transaction_id: Option<String>,
    basket_id: Option<String>,
    response: String,
    request_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProcessorResponseRow> for ProcessorResponse {
    type Error = DbError;

    fn try_from(row: ProcessorResponseRow) -> Result<Self, Self::Error> {
        let response: Value = serde_json::from_str(&row.response)
            .map_err(|e| DbError::invalid_data("processor_responses.response", e))?;

        Ok(ProcessorResponse {
            id: row.id,
            processor_name: row.processor_name,
            transaction_id: row.transaction_id,
            basket_id: row.basket_id,
            response,
            request_id: row.request_id,
            created_at: row.created_at,
        })
    }
}

/// Repository for payment processor responses.
#[derive(Debug, Clone)]
pub struct ProcessorResponseRepository {
    pool: SqlitePool,
}

impl ProcessorResponseRepository {
    /// Creates a new ProcessorResponseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProcessorResponseRepository { pool }
    }

    /// Records one processor response verbatim.
    ///
    /// ## Arguments
    /// * `ctx` - Request that received the response; its id is stored
    /// * `processor_name` - Processor that produced the response
    /// * `response` - The document as received
    /// * `transaction_id` - Processor-side transaction id, if any
    /// * `basket_id` - Basket being paid for, if known
    pub async fn record(
        &self,
        ctx: &RequestContext,
        processor_name: &str,
        response: Value,
        transaction_id: Option<&str>,
        basket_id: Option<&str>,
    ) -> DbResult<ProcessorResponse> {
        validate_processor_name(processor_name)?;

        let record = ProcessorResponse {
            id: Uuid::new_v4().to_string(),
            processor_name: processor_name.to_string(),
            transaction_id: transaction_id.map(str::to_string),
            basket_id: basket_id.map(str::to_string),
            response,
            request_id: Some(ctx.request_id.clone()),
            created_at: Utc::now(),
        };

        let document = serde_json::to_string(&record.response)
            .map_err(|e| DbError::invalid_data("processor_responses.response", e))?;

        debug!(
            request_id = %ctx.request_id,
            processor = %record.processor_name,
            transaction_id = ?record.transaction_id,
            basket_id = ?record.basket_id,
            "Recording processor response"
        );

        sqlx::query(
            r#"
            INSERT INTO processor_responses (
                id, processor_name, transaction_id, basket_id, response,
                request_id, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&record.id)
        .bind(&record.processor_name)
        .bind(&record.transaction_id)
        .bind(&record.basket_id)
        .bind(document)
        .bind(&record.request_id)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// Records a processor failure as `{"error": code, "message": text}`.
    pub async fn record_error(
        &self,
        ctx: &RequestContext,
        processor_name: &str,
        error: &PaymentError,
        transaction_id: Option<&str>,
        basket_id: Option<&str>,
    ) -> DbResult<ProcessorResponse> {
        warn!(
            request_id = %ctx.request_id,
            processor = %processor_name,
            code = error.code(),
            user_facing = error.is_user_facing(),
            "Payment processor error: {}",
            error
        );

        self.record(ctx, processor_name, error.to_response(), transaction_id, basket_id)
            .await
    }

    /// Gets a recorded response by id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<ProcessorResponse>> {
        let row = sqlx::query_as::<_, ProcessorResponseRow>(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProcessorResponse::try_from).transpose()
    }

    /// All responses for a processor transaction, oldest first.
    pub async fn list_for_transaction(&self, transaction_id: &str) -> DbResult<Vec<ProcessorResponse>> {
        let rows = sqlx::query_as::<_, ProcessorResponseRow>(&format!(
            "{SELECT_COLUMNS} WHERE transaction_id = ?1 ORDER BY created_at ASC, rowid ASC"
        ))
        .bind(transaction_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProcessorResponse::try_from).collect()
    }

    /// All responses recorded against a basket, oldest first.
    pub async fn list_for_basket(&self, basket_id: &str) -> DbResult<Vec<ProcessorResponse>> {
        let rows = sqlx::query_as::<_, ProcessorResponseRow>(&format!(
            "{SELECT_COLUMNS} WHERE basket_id = ?1 ORDER BY created_at ASC, rowid ASC"
        ))
        .bind(basket_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProcessorResponse::try_from).collect()
    }

    /// Number of responses recorded for a processor.
    pub async fn count_for_processor(&self, processor_name: &str) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM processor_responses WHERE processor_name = ?1")
                .bind(processor_name)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use serde_json::json;

    async fn repo() -> ProcessorResponseRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.processor_responses()
    }

    #[tokio::test]
    async fn test_record_round_trips_document() {
        let repo = repo().await;
        let ctx = RequestContext::with_request_id("req-1");
        let document = json!({
            "decision": "ACCEPT",
            "req_amount": "49.00",
            "nested": {"card": ["visa", 4242]}
        });

        let recorded = repo
            .record(&ctx, "cybersource", document.clone(), Some("txn-1"), Some("basket-1"))
            .await
            .unwrap();

        let stored = repo.get_by_id(&recorded.id).await.unwrap().unwrap();
        assert_eq!(stored.response, document);
        assert_eq!(stored.request_id.as_deref(), Some("req-1"));
        assert_eq!(stored.transaction_id.as_deref(), Some("txn-1"));
        assert_eq!(stored.basket_id.as_deref(), Some("basket-1"));
        assert_eq!(stored.error_code(), None);
    }

    #[tokio::test]
    async fn test_record_error() {
        let repo = repo().await;
        let ctx = RequestContext::new();
        let err = PaymentError::TransactionDeclined {
            reason: "insufficient funds".to_string(),
        };

        let recorded = repo
            .record_error(&ctx, "paypal", &err, None, Some("basket-9"))
            .await
            .unwrap();

        assert_eq!(recorded.error_code(), Some("transaction_declined"));
        assert_eq!(
            recorded.response["message"],
            "Transaction declined: insufficient funds"
        );
        assert_eq!(recorded.request_id.as_deref(), Some(ctx.request_id.as_str()));
    }

    #[tokio::test]
    async fn test_history_is_ordered_and_scoped() {
        let repo = repo().await;
        let ctx = RequestContext::new();

        for step in ["authorize", "capture", "refund"] {
            repo.record(&ctx, "cybersource", json!({ "step": step }), Some("txn-1"), Some("basket-1"))
                .await
                .unwrap();
        }
        repo.record(&ctx, "cybersource", json!({ "step": "other" }), Some("txn-2"), Some("basket-2"))
            .await
            .unwrap();

        let history = repo.list_for_transaction("txn-1").await.unwrap();
        let steps: Vec<&str> = history
            .iter()
            .filter_map(|r| r.response["step"].as_str())
            .collect();
        assert_eq!(steps, vec!["authorize", "capture", "refund"]);

        assert_eq!(repo.list_for_basket("basket-2").await.unwrap().len(), 1);
        assert!(repo.list_for_basket("basket-3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_for_processor() {
        let repo = repo().await;
        let ctx = RequestContext::new();

        repo.record(&ctx, "cybersource", json!({}), None, None).await.unwrap();
        repo.record(&ctx, "cybersource", json!({}), None, None).await.unwrap();
        repo.record(&ctx, "paypal", json!({}), None, None).await.unwrap();

        assert_eq!(repo.count_for_processor("cybersource").await.unwrap(), 2);
        assert_eq!(repo.count_for_processor("paypal").await.unwrap(), 1);
        assert_eq!(repo.count_for_processor("stripe").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_processor_name_is_rejected() {
        let repo = repo().await;
        let result = repo
            .record(&RequestContext::new(), "  ", json!({}), None, None)
            .await;
        assert!(matches!(result, Err(DbError::Validation(_))));
    }

    #[tokio::test]
    async fn test_record_with_task_local_context() {
        let repo = repo().await;
        let ctx = RequestContext::with_request_id("ambient-req");

        let recorded = crate::context::scope(ctx, async {
            let ctx = crate::context::current_or_new();
            repo.record(&ctx, "cybersource", json!({"decision": "ACCEPT"}), None, None)
                .await
        })
        .await
        .unwrap();

        assert_eq!(recorded.request_id.as_deref(), Some("ambient-req"));
    }
}
