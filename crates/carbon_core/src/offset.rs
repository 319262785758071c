//! Reforestation offset estimate: CO2 total -> trees required.
//!
//! # Invariants
//! - No rounding is applied here; fractional tree counts are the computed
//!   value and rounding is a presentation decision.
//! - An unknown region or a non-positive absorption rate is always an error.

use crate::model::region::RegionProfile;
use crate::tables::RegionCatalog;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Trees of the region's reference species needed to absorb one year's total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    pub trees_required: f64,
}

impl OffsetResult {
    /// Tree count rounded to the nearest whole tree for display; halves go
    /// to the even neighbour.
    pub fn whole_trees(&self) -> f64 {
        self.trees_required.round_ties_even()
    }
}

/// Offset estimation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OffsetError {
    /// Region name not present in the known profile set.
    InvalidRegion(String),
    /// Absorption rate is not positive; indicates corrupted region data.
    Division {
        region: String,
        annual_absorption_kg: f64,
    },
}

impl Display for OffsetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRegion(region) => write!(f, "region is not supported: {region}"),
            Self::Division {
                region,
                annual_absorption_kg,
            } => write!(
                f,
                "region `{region}` has non-positive absorption rate {annual_absorption_kg}; region data is corrupted"
            ),
        }
    }
}

impl Error for OffsetError {}

/// Computes `total_kg / profile.annual_absorption_kg`.
///
/// # Errors
/// - `OffsetError::Division` when the absorption rate is not finite and `> 0`.
pub fn estimate(total_kg: f64, profile: &RegionProfile) -> Result<OffsetResult, OffsetError> {
    let rate = profile.annual_absorption_kg;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(OffsetError::Division {
            region: profile.region.clone(),
            annual_absorption_kg: rate,
        });
    }
    Ok(OffsetResult {
        trees_required: total_kg / rate,
    })
}

/// Looks up `region` by exact name, then estimates.
///
/// # Errors
/// - `OffsetError::InvalidRegion` when the region is unknown.
/// - `OffsetError::Division` as in [`estimate`].
pub fn estimate_for_region(
    total_kg: f64,
    region: &str,
    catalog: &RegionCatalog,
) -> Result<OffsetResult, OffsetError> {
    let profile = catalog.lookup(region)?;
    estimate(total_kg, profile)
}

#[cfg(test)]
mod tests {
    use super::{estimate, OffsetError, OffsetResult};
    use crate::model::region::RegionProfile;

    #[test]
    fn divides_by_absorption_rate() {
        let profile = RegionProfile::new("Rajasthan", "Khejri", 10, 15.0);
        let result = estimate(300.0, &profile).expect("valid profile");
        assert_eq!(result, OffsetResult { trees_required: 20.0 });
    }

    #[test]
    fn keeps_fractional_trees() {
        let profile = RegionProfile::new("Tripura", "Bamboo", 5, 10.0);
        let result = estimate(15.0, &profile).expect("valid profile");
        assert_eq!(result.trees_required, 1.5);
        assert_eq!(result.whole_trees(), 2.0);
    }

    #[test]
    fn whole_trees_rounds_halves_to_even() {
        let at = |trees_required| OffsetResult { trees_required }.whole_trees();
        assert_eq!(at(2.5), 2.0);
        assert_eq!(at(3.5), 4.0);
        assert_eq!(at(26.7), 27.0);
    }

    #[test]
    fn guards_against_non_positive_rates() {
        for rate in [0.0, -1.0, f64::NAN] {
            let profile = RegionProfile::new("Edited", "Oak", 10, rate);
            let err = estimate(100.0, &profile).unwrap_err();
            assert!(matches!(err, OffsetError::Division { .. }));
        }
    }
}
