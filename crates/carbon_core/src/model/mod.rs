//! Domain model for activity input and computed carbon results.
//!
//! # Responsibility
//! - Define the typed records that cross the ingest boundary.
//! - Define the reference shapes (regions, bands) and computed results shared
//!   by aggregator, classifier and estimator.
//!
//! # Invariants
//! - Records are validated once at the boundary; downstream code assumes
//!   finite quantities and non-empty categories.
//! - Results are built fresh per calculation and never mutated afterwards.

pub mod activity;
pub mod band;
pub mod emissions;
pub mod region;
