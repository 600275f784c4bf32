//! Resource services: the public contract consumed by the transport layer.
//!
//! # Responsibility
//! - Validate raw identifiers and payloads before any store access.
//! - Compose repository calls into one operation per verb per resource.
//! - Return plain values or a classified [`ApiError`].
//!
//! # Invariants
//! - Services hold no state beyond their repository handle.
//! - Every failure leaving a service is an [`ApiError`].

use crate::error::{ApiError, ApiResult};
use log::debug;
use std::time::Instant;

pub mod article_service;
pub mod comment_service;
pub mod topic_service;
pub mod user_service;

/// Runs one service operation and records its outcome and duration.
fn traced<T>(event: &'static str, op: impl FnOnce() -> ApiResult<T>) -> ApiResult<T> {
    let started_at = Instant::now();
    let result = op();
    match &result {
        Ok(_) => debug!(
            "event={event} module=service status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => debug!(
            "event={event} module=service status=error duration_ms={} kind={:?} msg={}",
            started_at.elapsed().as_millis(),
            err.kind(),
            err.message()
        ),
    }
    result
}

/// Treats an empty selection as a missing slice of the resource.
fn non_empty<T>(items: Vec<T>, what: &str) -> ApiResult<Vec<T>> {
    if items.is_empty() {
        return Err(ApiError::not_found(format!("no {what} found")));
    }
    Ok(items)
}
