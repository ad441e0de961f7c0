//! # Task-Local Request Context
//!
//! For call sites that cannot take a `&RequestContext` parameter (framework
//! hooks, trait impls with fixed signatures), the context can be installed
//! for the duration of one future.
//!
//! ```text
//! scope(ctx, async { ... current() == Some(ctx) ... })
//!        │
//!        └── future completes, panics or is dropped → cell cleared
//! ```
//!
//! The cell belongs to the task polling the future. Spawned tasks do not
//! inherit it; pass the context explicitly or open a new scope there.

use std::future::Future;

use storefront_core::RequestContext;

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// Runs `fut` with `ctx` installed as the current request context.
pub async fn scope<F>(ctx: RequestContext, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(ctx, fut).await
}

/// Returns the context installed by the enclosing [`scope`], if any.
pub fn current() -> Option<RequestContext> {
    CURRENT.try_with(RequestContext::clone).ok()
}

/// Returns the current context, or a fresh one when none is installed.
pub fn current_or_new() -> RequestContext {
    current().unwrap_or_default()
}
