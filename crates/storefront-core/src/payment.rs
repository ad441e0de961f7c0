//! # Payment Errors
//!
//! Failures a payment processor integration can report. Every failure is
//! also recorded as a processor response (see `ProcessorResponse`), so each
//! variant carries a stable machine-readable code.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Error Classes                                │
//! │                                                                         │
//! │  Customer-caused (is_user_facing = true)                               │
//! │  ├── TransactionDeclined      card refused                             │
//! │  ├── UserCancelled            checkout abandoned                       │
//! │  ├── PartialAuthorization     only part of the amount approved         │
//! │  └── AuthorizationFailed      processor refused to authorise           │
//! │                                                                         │
//! │  Operator/integration (is_user_facing = false)                         │
//! │  ├── ProcessorNotFound / ProcessorMisconfigured                        │
//! │  ├── InvalidSignature / InvalidDecision                                │
//! │  ├── DuplicateReferenceNumber / RedundantPaymentNotification           │
//! │  ├── ExcessivePayment                                                  │
//! │  └── Gateway                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde_json::{json, Value};
use thiserror::Error;

/// A failure reported by (or while talking to) a payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// No processor is registered under the requested name.
    #[error("Payment processor '{name}' not found")]
    ProcessorNotFound { name: String },

    /// Processor settings are incomplete or invalid.
    #[error("Payment processor '{name}' is misconfigured: {reason}")]
    ProcessorMisconfigured { name: String, reason: String },

    /// The notification signature did not verify.
    #[error("Invalid signature on processor notification")]
    InvalidSignature,

    /// The processor returned a decision value we do not recognise.
    #[error("Unrecognised processor decision: {decision}")]
    InvalidDecision { decision: String },

    /// Only part of the requested amount was authorised.
    #[error("Partial authorization: {authorized_cents} of {requested_cents} cents")]
    PartialAuthorization {
        authorized_cents: i64,
        requested_cents: i64,
    },

    /// The order reference number was already used.
    #[error("Duplicate reference number: {reference}")]
    DuplicateReferenceNumber { reference: String },

    /// A notification arrived for a payment that is already settled.
    #[error("Redundant payment notification for transaction {transaction_id}")]
    RedundantPaymentNotification { transaction_id: String },

    /// The amount paid exceeds the order total.
    #[error("Payment of {paid_cents} cents exceeds order total of {order_total_cents} cents")]
    ExcessivePayment {
        paid_cents: i64,
        order_total_cents: i64,
    },

    /// The processor declined the transaction.
    #[error("Transaction declined: {reason}")]
    TransactionDeclined { reason: String },

    /// The customer cancelled the payment.
    #[error("Payment cancelled by user")]
    UserCancelled,

    /// The processor refused to authorise the payment.
    #[error("Authorization failed: {reason}")]
    AuthorizationFailed { reason: String },

    /// Transport failure between us and the processor.
    #[error("Payment gateway error: {reason}")]
    Gateway { reason: String },
}

impl PaymentError {
    /// Stable snake_case code, stored alongside recorded failures.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProcessorNotFound { .. } => "processor_not_found",
            Self::ProcessorMisconfigured { .. } => "processor_misconfigured",
            Self::InvalidSignature => "invalid_signature",
            Self::InvalidDecision { .. } => "invalid_decision",
            Self::PartialAuthorization { .. } => "partial_authorization",
            Self::DuplicateReferenceNumber { .. } => "duplicate_reference_number",
            Self::RedundantPaymentNotification { .. } => "redundant_payment_notification",
            Self::ExcessivePayment { .. } => "excessive_payment",
            Self::TransactionDeclined { .. } => "transaction_declined",
            Self::UserCancelled => "user_cancelled",
            Self::AuthorizationFailed { .. } => "authorization_failed",
            Self::Gateway { .. } => "gateway_error",
        }
    }

    /// True when the customer caused the failure and should see it.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::TransactionDeclined { .. }
                | Self::UserCancelled
                | Self::PartialAuthorization { .. }
                | Self::AuthorizationFailed { .. }
        )
    }

    /// Renders the error as a response document for bookkeeping.
    pub fn to_response(&self) -> Value {
        json!({
            "error": self.code(),
            "message": self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            PaymentError::ProcessorNotFound { name: "x".into() },
            PaymentError::ProcessorMisconfigured {
                name: "x".into(),
                reason: "y".into(),
            },
            PaymentError::InvalidSignature,
            PaymentError::InvalidDecision {
                decision: "MAYBE".into(),
            },
            PaymentError::PartialAuthorization {
                authorized_cents: 1,
                requested_cents: 2,
            },
            PaymentError::DuplicateReferenceNumber {
                reference: "EDX-1".into(),
            },
            PaymentError::RedundantPaymentNotification {
                transaction_id: "t".into(),
            },
            PaymentError::ExcessivePayment {
                paid_cents: 2,
                order_total_cents: 1,
            },
            PaymentError::TransactionDeclined { reason: "r".into() },
            PaymentError::UserCancelled,
            PaymentError::AuthorizationFailed { reason: "r".into() },
            PaymentError::Gateway { reason: "r".into() },
        ];

        let mut codes: Vec<&str> = all.iter().map(PaymentError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_user_facing() {
        assert!(PaymentError::UserCancelled.is_user_facing());
        assert!(PaymentError::TransactionDeclined {
            reason: "insufficient funds".into()
        }
        .is_user_facing());
        assert!(!PaymentError::InvalidSignature.is_user_facing());
        assert!(!PaymentError::Gateway {
            reason: "timeout".into()
        }
        .is_user_facing());
    }

    #[test]
    fn test_to_response() {
        let err = PaymentError::PartialAuthorization {
            authorized_cents: 500,
            requested_cents: 1000,
        };
        let response = err.to_response();
        assert_eq!(response["error"], "partial_authorization");
        assert_eq!(
            response["message"],
            "Partial authorization: 500 of 1000 cents"
        );
    }
}
