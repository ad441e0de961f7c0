//! # Request Context
//!
//! Identity of the in-flight request, passed explicitly to every operation
//! that records bookkeeping data.
//!
//! storefront-db additionally offers a task-local scope for the few call
//! sites that cannot thread the context through (see `storefront_db::context`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Correlates log lines and recorded rows belonging to one request.
    pub request_id: String,

    /// Authenticated user, when there is one.
    pub user_id: Option<String>,
}

impl RequestContext {
    /// Creates a context with a fresh UUID v4 request id.
    pub fn new() -> Self {
        RequestContext {
            request_id: Uuid::new_v4().to_string(),
            user_id: None,
        }
    }

    /// Creates a context for an existing request id (e.g. from a header).
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        RequestContext {
            request_id: request_id.into(),
            user_id: None,
        }
    }

    /// Attaches the authenticated user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
