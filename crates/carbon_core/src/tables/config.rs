//! Reference data bundle and its JSON file format.
//!
//! # Responsibility
//! - Bundle factors, regions and bands into one read-only value.
//! - Load an external reference file and validate it before first use.
//!
//! # Invariants
//! - A `ReferenceData` value is always fully validated.
//! - Unknown JSON fields are rejected instead of silently ignored.

use super::{BandSet, ConfigError, ConfigResult, EmissionFactorTable, RegionCatalog};
use crate::model::band::BenchmarkBand;
use crate::model::region::RegionProfile;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only tables consulted by every calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub factors: EmissionFactorTable,
    pub regions: RegionCatalog,
    pub bands: BandSet,
}

impl ReferenceData {
    /// Built-in demonstration tables.
    pub fn builtin() -> Self {
        Self {
            factors: EmissionFactorTable::builtin(),
            regions: RegionCatalog::builtin(),
            bands: BandSet::builtin(),
        }
    }

    /// Parses and validates a JSON reference document.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let file: ReferenceFile =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        file.into_reference_data()
    }

    /// Reads a JSON reference file from disk.
    ///
    /// # Side effects
    /// - Emits `reference_load` logging events with counts and status.
    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            error!(
                "event=reference_load module=tables status=error source=file error_code=read_failed error={}",
                err
            );
            ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        })?;

        match Self::from_json_str(&raw) {
            Ok(reference) => {
                info!(
                    "event=reference_load module=tables status=ok source=file categories={} regions={} bands={}",
                    reference.factors.len(),
                    reference.regions.len(),
                    reference.bands.bands().len()
                );
                Ok(reference)
            }
            Err(err) => {
                error!(
                    "event=reference_load module=tables status=error source=file error_code=invalid_config error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Serializable view of these tables, e.g. to seed an editable file.
    pub fn to_file(&self) -> ReferenceFile {
        ReferenceFile {
            emission_factors: self
                .factors
                .iter()
                .map(|(category, factor)| (category.to_string(), factor))
                .collect(),
            regions: self.regions.profiles().cloned().collect(),
            benchmark: BenchmarkFile {
                cap_kg: self.bands.cap_kg(),
                bands: self.bands.bands().to_vec(),
            },
        }
    }
}

/// On-disk reference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceFile {
    pub emission_factors: BTreeMap<String, f64>,
    pub regions: Vec<RegionProfile>,
    pub benchmark: BenchmarkFile,
}

/// Benchmark section of the reference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkFile {
    pub cap_kg: f64,
    pub bands: Vec<BenchmarkBand>,
}

impl ReferenceFile {
    pub fn into_reference_data(self) -> ConfigResult<ReferenceData> {
        Ok(ReferenceData {
            factors: EmissionFactorTable::new(self.emission_factors)?,
            regions: RegionCatalog::new(self.regions)?,
            bands: BandSet::new(self.benchmark.bands, self.benchmark.cap_kg)?,
        })
    }
}
