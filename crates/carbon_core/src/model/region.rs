//! Region profile: reference tree species and its absorption rate.

use serde::{Deserialize, Serialize};

/// Reforestation reference for one supported region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Exact region name used for lookup (case-sensitive).
    pub region: String,
    /// Indigenous reference species planted for offsets.
    pub species: String,
    /// Age in years at which the species reaches peak absorption.
    pub peak_age: u32,
    /// CO2 mass absorbed per mature tree per year, in kg. Must be > 0.
    pub annual_absorption_kg: f64,
}

impl RegionProfile {
    pub fn new(
        region: impl Into<String>,
        species: impl Into<String>,
        peak_age: u32,
        annual_absorption_kg: f64,
    ) -> Self {
        Self {
            region: region.into(),
            species: species.into(),
            peak_age,
            annual_absorption_kg,
        }
    }
}
