//! Board domain records.
//!
//! # Responsibility
//! - Define the read models returned by services and the create inputs
//!   accepted by them.
//! - Declare the per-entity payload field specs used by the validator.
//!
//! # Invariants
//! - Read models serialize with the column names clients already consume.
//! - `comment_count` only exists on read models; it is never persisted.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

/// Resource naming used when wrapping response bodies.
pub trait Resource {
    /// Key for a single entity body, e.g. `article`.
    const SINGULAR: &'static str;
    /// Key for a collection body, e.g. `articles`.
    const PLURAL: &'static str;
}
