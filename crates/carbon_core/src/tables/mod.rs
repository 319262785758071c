//! Static reference data: emission factors, region profiles, benchmark bands.
//!
//! # Responsibility
//! - Hold the read-only tables every calculation consults.
//! - Validate configuration once at load time (fail fast, never mid-calculation).
//!
//! # Invariants
//! - Tables are immutable after construction and safe to share across threads.
//! - Lookups are exact-string, case-sensitive. An absent category yields a
//!   zero factor; an absent region is a hard error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod bands;
mod config;
mod factors;
mod regions;

pub use bands::{BandSet, DEFAULT_GAUGE_CAP_KG};
pub use config::{BenchmarkFile, ReferenceData, ReferenceFile};
pub use factors::EmissionFactorTable;
pub use regions::RegionCatalog;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Malformed static configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyCategory,
    DuplicateCategory(String),
    InvalidFactor { category: String, value: f64 },
    NoRegions,
    EmptyRegion,
    DuplicateRegion(String),
    EmptySpecies { region: String },
    InvalidAbsorption { region: String, value: f64 },
    NoBands,
    InvalidCap(f64),
    EmptyBandLabel { index: usize },
    BandNotAnchoredAtZero { lower_kg: f64 },
    InvalidBandWidth { label: String },
    BandGap { label: String, expected_lower_kg: f64, actual_lower_kg: f64 },
    BandRankOrder { label: String },
    CapMismatch { last_upper_kg: f64, cap_kg: f64 },
    Parse(String),
    Read { path: String, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "emission factor category must not be empty"),
            Self::DuplicateCategory(category) => {
                write!(f, "emission factor category is duplicated: {category}")
            }
            Self::InvalidFactor { category, value } => write!(
                f,
                "emission factor for `{category}` must be finite and >= 0, got {value}"
            ),
            Self::NoRegions => write!(f, "at least one region profile is required"),
            Self::EmptyRegion => write!(f, "region name must not be empty"),
            Self::DuplicateRegion(region) => write!(f, "region is duplicated: {region}"),
            Self::EmptySpecies { region } => {
                write!(f, "region `{region}` has an empty species name")
            }
            Self::InvalidAbsorption { region, value } => write!(
                f,
                "region `{region}` absorption must be finite and > 0, got {value}"
            ),
            Self::NoBands => write!(f, "benchmark requires at least one band"),
            Self::InvalidCap(value) => {
                write!(f, "benchmark cap must be finite and > 0, got {value}")
            }
            Self::EmptyBandLabel { index } => write!(f, "benchmark band {index} has an empty label"),
            Self::BandNotAnchoredAtZero { lower_kg } => write!(
                f,
                "first benchmark band must start at 0, got {lower_kg}"
            ),
            Self::InvalidBandWidth { label } => write!(
                f,
                "benchmark band `{label}` must have finite bounds with lower < upper"
            ),
            Self::BandGap {
                label,
                expected_lower_kg,
                actual_lower_kg,
            } => write!(
                f,
                "benchmark band `{label}` starts at {actual_lower_kg}, expected {expected_lower_kg}"
            ),
            Self::BandRankOrder { label } => write!(
                f,
                "benchmark band `{label}` must have a higher severity rank than the band below it"
            ),
            Self::CapMismatch {
                last_upper_kg,
                cap_kg,
            } => write!(
                f,
                "last benchmark band ends at {last_upper_kg} but the gauge cap is {cap_kg}"
            ),
            Self::Parse(message) => write!(f, "reference configuration is malformed: {message}"),
            Self::Read { path, message } => {
                write!(f, "failed to read reference configuration `{path}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {}
