//! Benchmark severity band.

use serde::{Deserialize, Serialize};

/// Contiguous CO2 mass range mapped to a qualitative performance label.
///
/// The range is half-open: `lower_kg <= total < upper_kg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkBand {
    pub lower_kg: f64,
    pub upper_kg: f64,
    pub label: String,
    /// 1 is the best band; ranks grow with mass.
    pub severity_rank: u32,
    /// Display color for gauge wedges (e.g. `green`, `red`).
    pub color: String,
}

impl BenchmarkBand {
    pub fn new(
        lower_kg: f64,
        upper_kg: f64,
        label: impl Into<String>,
        severity_rank: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            lower_kg,
            upper_kg,
            label: label.into(),
            severity_rank,
            color: color.into(),
        }
    }

    /// Returns whether `total_kg` falls inside `[lower_kg, upper_kg)`.
    pub fn contains(&self, total_kg: f64) -> bool {
        total_kg >= self.lower_kg && total_kg < self.upper_kg
    }
}
