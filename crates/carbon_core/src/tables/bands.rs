//! Benchmark band set and gauge cap.

use super::{ConfigError, ConfigResult};
use crate::model::band::BenchmarkBand;

/// Mass at which the gauge pointer saturates, in kg CO2.
pub const DEFAULT_GAUGE_CAP_KG: f64 = 50_000.0;

/// Ordered, contiguous bands covering `[0, cap)`.
///
/// # Invariants
/// - The first band starts at 0; each band starts where the previous one ends.
/// - Severity ranks strictly increase with mass.
/// - The last band ends at `cap_kg`; totals at or above the cap still
///   classify into the last band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    bands: Vec<BenchmarkBand>,
    cap_kg: f64,
}

impl BandSet {
    /// Validates and builds a band set.
    ///
    /// # Errors
    /// Any contiguity, coverage, ordering or cap violation is a `ConfigError`.
    pub fn new(bands: Vec<BenchmarkBand>, cap_kg: f64) -> ConfigResult<Self> {
        if !cap_kg.is_finite() || cap_kg <= 0.0 {
            return Err(ConfigError::InvalidCap(cap_kg));
        }
        let first = bands.first().ok_or(ConfigError::NoBands)?;
        if first.lower_kg != 0.0 {
            return Err(ConfigError::BandNotAnchoredAtZero {
                lower_kg: first.lower_kg,
            });
        }

        let mut previous: Option<&BenchmarkBand> = None;
        for (index, band) in bands.iter().enumerate() {
            if band.label.trim().is_empty() {
                return Err(ConfigError::EmptyBandLabel { index });
            }
            if !band.lower_kg.is_finite()
                || !band.upper_kg.is_finite()
                || band.lower_kg >= band.upper_kg
            {
                return Err(ConfigError::InvalidBandWidth {
                    label: band.label.clone(),
                });
            }
            if let Some(prev) = previous {
                if band.lower_kg != prev.upper_kg {
                    return Err(ConfigError::BandGap {
                        label: band.label.clone(),
                        expected_lower_kg: prev.upper_kg,
                        actual_lower_kg: band.lower_kg,
                    });
                }
                if band.severity_rank <= prev.severity_rank {
                    return Err(ConfigError::BandRankOrder {
                        label: band.label.clone(),
                    });
                }
            }
            previous = Some(band);
        }

        let last_upper_kg = previous.map(|band| band.upper_kg).unwrap_or(0.0);
        if last_upper_kg != cap_kg {
            return Err(ConfigError::CapMismatch {
                last_upper_kg,
                cap_kg,
            });
        }

        Ok(Self { bands, cap_kg })
    }

    /// Built-in performance benchmark with a 50 000 kg cap.
    pub fn builtin() -> Self {
        Self {
            bands: vec![
                BenchmarkBand::new(0.0, 5_000.0, "Excellent (Pioneer)", 1, "green"),
                BenchmarkBand::new(5_000.0, 15_000.0, "Good (Standard)", 2, "lime"),
                BenchmarkBand::new(15_000.0, 30_000.0, "Fair (Improvement Needed)", 3, "orange"),
                BenchmarkBand::new(30_000.0, DEFAULT_GAUGE_CAP_KG, "Poor (High Risk)", 4, "red"),
            ],
            cap_kg: DEFAULT_GAUGE_CAP_KG,
        }
    }

    pub fn bands(&self) -> &[BenchmarkBand] {
        &self.bands
    }

    pub fn cap_kg(&self) -> f64 {
        self.cap_kg
    }

    /// Lowest-severity band. Never panics: construction rejects empty sets.
    pub fn first(&self) -> &BenchmarkBand {
        &self.bands[0]
    }

    /// Highest-severity band, which also absorbs totals above the cap.
    pub fn last(&self) -> &BenchmarkBand {
        &self.bands[self.bands.len() - 1]
    }
}
