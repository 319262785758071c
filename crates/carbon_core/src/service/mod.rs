//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate aggregator, classifier and estimator into one calculation.
//! - Keep CLI/FFI shells decoupled from the individual pipeline stages.

pub mod calculation_service;
