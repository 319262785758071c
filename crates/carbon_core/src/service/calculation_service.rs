//! Offset calculation use-case service.
//!
//! # Responsibility
//! - Run one region-validated calculation from records to offset.
//! - Emit metadata-only `calculate` logging events.
//!
//! # Invariants
//! - The region is resolved before any mass is computed.
//! - The service holds no state between calls; reference data is borrowed
//!   read-only and selections are passed per call.

use crate::aggregate::{aggregate, unrecognized_count};
use crate::benchmark::{classify, Classification};
use crate::model::activity::{ActivityRecord, DataFormatError};
use crate::model::emissions::EmissionsResult;
use crate::model::region::RegionProfile;
use crate::offset::{estimate, OffsetError, OffsetResult};
use crate::tables::ReferenceData;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

pub type CalculationResult<T> = Result<T, CalculationError>;

/// Errors surfaced by one calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationError {
    DataFormat(DataFormatError),
    Offset(OffsetError),
}

impl Display for CalculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataFormat(err) => write!(f, "{err}"),
            Self::Offset(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalculationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataFormat(err) => Some(err),
            Self::Offset(err) => Some(err),
        }
    }
}

impl From<DataFormatError> for CalculationError {
    fn from(value: DataFormatError) -> Self {
        Self::DataFormat(value)
    }
}

impl From<OffsetError> for CalculationError {
    fn from(value: OffsetError) -> Self {
        Self::Offset(value)
    }
}

impl CalculationError {
    /// Stable machine-readable code for logs and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataFormat(_) => "data_format",
            Self::Offset(OffsetError::InvalidRegion(_)) => "invalid_region",
            Self::Offset(OffsetError::Division { .. }) => "division",
        }
    }
}

/// Outcome of one calculation, handed to reporting and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetCalculation {
    /// Per-calculation correlation ID for logs and reports.
    pub id: Uuid,
    pub region: RegionProfile,
    pub emissions: EmissionsResult,
    pub classification: Classification,
    pub offset: OffsetResult,
    /// Records whose category had no emission factor.
    pub unrecognized_records: usize,
}

impl OffsetCalculation {
    /// Zero total: valid, but callers usually treat it as nothing to report.
    pub fn is_empty(&self) -> bool {
        self.emissions.is_zero()
    }
}

/// Stateless calculator over borrowed reference data.
pub struct OffsetCalculator<'a> {
    reference: &'a ReferenceData,
}

impl<'a> OffsetCalculator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    /// Runs region lookup, aggregation, classification and estimation.
    ///
    /// # Errors
    /// - `Offset(InvalidRegion)` before any records are examined.
    /// - `DataFormat` for the first malformed record.
    /// - `Offset(Division)` for corrupted region data.
    pub fn calculate(
        &self,
        records: &[ActivityRecord],
        region: &str,
    ) -> CalculationResult<OffsetCalculation> {
        let started_at = Instant::now();
        let id = Uuid::new_v4();
        info!(
            "event=calculate module=service status=start calculation_id={} records={}",
            id,
            records.len()
        );

        match self.run(id, records, region) {
            Ok(calculation) => {
                if calculation.unrecognized_records > 0 {
                    warn!(
                        "event=unrecognized_categories module=service status=ok calculation_id={} records={}",
                        id, calculation.unrecognized_records
                    );
                }
                info!(
                    "event=calculate module=service status=ok calculation_id={} duration_ms={} categories={} total_kg={:.2} band_rank={} trees_required={:.2}",
                    id,
                    started_at.elapsed().as_millis(),
                    calculation.emissions.per_category.len(),
                    calculation.emissions.total_kg,
                    calculation.classification.band.severity_rank,
                    calculation.offset.trees_required
                );
                Ok(calculation)
            }
            Err(err) => {
                error!(
                    "event=calculate module=service status=error calculation_id={} duration_ms={} error_code={} error={}",
                    id,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn run(
        &self,
        id: Uuid,
        records: &[ActivityRecord],
        region: &str,
    ) -> CalculationResult<OffsetCalculation> {
        let profile = self.reference.regions.lookup(region)?;
        let emissions = aggregate(records, &self.reference.factors)?;
        let classification = classify(emissions.total_kg, &self.reference.bands);
        let offset = estimate(emissions.total_kg, profile)?;

        Ok(OffsetCalculation {
            id,
            region: profile.clone(),
            emissions,
            classification,
            offset,
            unrecognized_records: unrecognized_count(records, &self.reference.factors),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CalculationError, OffsetCalculator};
    use crate::model::activity::{ActivityRecord, DataFormatError};
    use crate::offset::OffsetError;
    use crate::tables::ReferenceData;

    #[test]
    fn invalid_region_wins_over_bad_records() {
        let reference = ReferenceData::builtin();
        let calculator = OffsetCalculator::new(&reference);
        let records = vec![ActivityRecord::new("", f64::NAN)];

        let err = calculator.calculate(&records, "Atlantis").unwrap_err();
        assert_eq!(
            err,
            CalculationError::Offset(OffsetError::InvalidRegion("Atlantis".to_string()))
        );
        assert_eq!(err.code(), "invalid_region");
    }

    #[test]
    fn data_format_error_is_propagated() {
        let reference = ReferenceData::builtin();
        let calculator = OffsetCalculator::new(&reference);
        let records = vec![ActivityRecord::new("Petrol (liters)", f64::INFINITY)];

        let err = calculator.calculate(&records, "Goa").unwrap_err();
        assert_eq!(
            err,
            CalculationError::DataFormat(DataFormatError::NonFiniteQuantity { row: 1 })
        );
    }

    #[test]
    fn counts_unrecognized_records_without_failing() {
        let reference = ReferenceData::builtin();
        let calculator = OffsetCalculator::new(&reference);
        let records = vec![
            ActivityRecord::new("Bus Travel (km)", 100.0),
            ActivityRecord::new("Unknown Source", 100.0),
        ];

        let calculation = calculator.calculate(&records, "Kerala").expect("calculation");
        assert_eq!(calculation.unrecognized_records, 1);
        assert!(!calculation.is_empty());
        assert_eq!(calculation.region.species, "Jackfruit");
    }
}
