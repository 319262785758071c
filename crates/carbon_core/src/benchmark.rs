//! Benchmark classification and gauge geometry.
//!
//! # Responsibility
//! - Map a CO2 total onto exactly one severity band.
//! - Produce the normalized gauge position and angular layout consumed by
//!   visualization collaborators (no pixels, no drawing).
//!
//! # Invariants
//! - `gauge_fraction` is always within `[0, 1]` and monotone in the total.
//! - Totals at or above the cap land in the last band with fraction `1.0`;
//!   the true total is never altered, only the gauge position is clamped.
//! - Negative totals land in the first band with fraction `0.0`.

use crate::model::band::BenchmarkBand;
use crate::tables::BandSet;
use serde::{Deserialize, Serialize};

/// Angle of the gauge baseline (left end of the semicircle), in degrees.
pub const GAUGE_BASELINE_DEG: f64 = 180.0;
/// Total angular sweep of the gauge, in degrees.
pub const GAUGE_SWEEP_DEG: f64 = 180.0;

/// Band and gauge position for one total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub band: BenchmarkBand,
    pub gauge_fraction: f64,
}

impl Classification {
    /// Pointer angle measured counter-clockwise from the positive x axis.
    ///
    /// `0.0` fraction points at 180 degrees, `1.0` at 0 degrees.
    pub fn pointer_angle_deg(&self) -> f64 {
        GAUGE_BASELINE_DEG - self.gauge_fraction * GAUGE_SWEEP_DEG
    }
}

/// Classifies `total_kg` against `bands`.
pub fn classify(total_kg: f64, bands: &BandSet) -> Classification {
    let cap_kg = bands.cap_kg();
    if total_kg >= cap_kg {
        return Classification {
            band: bands.last().clone(),
            gauge_fraction: 1.0,
        };
    }
    if total_kg.is_nan() || total_kg < bands.first().lower_kg {
        return Classification {
            band: bands.first().clone(),
            gauge_fraction: 0.0,
        };
    }

    let band = bands
        .bands()
        .iter()
        .find(|band| band.contains(total_kg))
        .unwrap_or_else(|| bands.last());
    Classification {
        band: band.clone(),
        gauge_fraction: (total_kg / cap_kg).clamp(0.0, 1.0),
    }
}

/// One colored band wedge on the semicircular gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeWedge {
    pub label: String,
    pub color: String,
    /// Angle at the band's lower bound (larger angle).
    pub start_angle_deg: f64,
    /// Angle at the band's upper bound (smaller angle).
    pub end_angle_deg: f64,
    /// Midpoint angle where the band label is placed.
    pub label_angle_deg: f64,
}

/// Angular layout of the gauge: band wedges plus the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    pub wedges: Vec<GaugeWedge>,
    pub pointer_angle_deg: f64,
}

/// Lays out wedges for `bands` and the pointer for `classification`.
pub fn gauge_geometry(bands: &BandSet, classification: &Classification) -> GaugeGeometry {
    let cap_kg = bands.cap_kg();
    let angle_at = |mass_kg: f64| GAUGE_BASELINE_DEG - (mass_kg / cap_kg) * GAUGE_SWEEP_DEG;

    let wedges = bands
        .bands()
        .iter()
        .map(|band| {
            let start_angle_deg = angle_at(band.lower_kg);
            let end_angle_deg = angle_at(band.upper_kg);
            GaugeWedge {
                label: band.label.clone(),
                color: band.color.clone(),
                start_angle_deg,
                end_angle_deg,
                label_angle_deg: (start_angle_deg + end_angle_deg) / 2.0,
            }
        })
        .collect();

    GaugeGeometry {
        wedges,
        pointer_angle_deg: classification.pointer_angle_deg(),
    }
}
