//! Template data model and the deterministic generator that produces templates per occasion.

/// Occasion catalog (categories, occasions, template counts).
pub mod catalog;
/// Index-driven template generation.
pub mod generator;
/// Typed template wire format.
pub mod model;
/// Per-occasion theme tables.
pub mod theme;
