//! Aggregated emissions result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total CO2 mass for one dataset plus its per-category breakdown.
///
/// # Invariants
/// - `per_category` only holds categories whose summed mass is `> 0`.
/// - `per_category` is ordered by category name, the same order used to
///   accumulate `total_kg`, so the breakdown sums to the total exactly when
///   no category was masked out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionsResult {
    pub total_kg: f64,
    pub per_category: BTreeMap<String, f64>,
}

impl EmissionsResult {
    /// Empty dataset result: zero total, no categories.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the dataset produced no emissions at all.
    pub fn is_zero(&self) -> bool {
        self.total_kg == 0.0
    }

    /// Sum of the breakdown, accumulated in category order.
    pub fn per_category_sum(&self) -> f64 {
        self.per_category.values().fold(0.0, |acc, mass| acc + mass)
    }
}
