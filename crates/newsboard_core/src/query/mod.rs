//! Read-side query construction.
//!
//! # Responsibility
//! - Resolve listing parameters through static allow-lists.
//! - Attach the derived comment count to article rows in-query.
//!
//! # Invariants
//! - Query text is assembled only from static fragments; caller values are
//!   bound parameters.

pub mod aggregate;
pub mod builder;
pub mod sort;
