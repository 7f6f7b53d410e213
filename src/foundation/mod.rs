//! Shared primitives: geometry and color types, CSS color parsing, the error taxonomy.

/// CSS color strings.
pub mod color;
/// Canvas, geometry re-exports, RGBA types.
pub mod core;
/// `CardError` and `CardResult`.
pub mod error;
