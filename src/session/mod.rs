//! Batch orchestration: one photo and name rendered across every template of an occasion.

/// `CardSession` and `BatchError`.
pub mod batch;
