//! Emissions aggregation: activity records -> per-category CO2 mass and total.
//!
//! # Invariants
//! - Every record is validated before any mass is computed; one malformed
//!   record aborts the whole aggregation.
//! - Categories are grouped by exact name and summed in record order.
//! - `total_kg` accumulates every group (including zero and negative ones) in
//!   category order; `per_category` keeps only groups with mass `> 0`.

use crate::model::activity::{ActivityRecord, DataFormatError};
use crate::model::emissions::EmissionsResult;
use crate::tables::EmissionFactorTable;
use std::collections::BTreeMap;

/// Converts activity records into an emissions result.
///
/// Unrecognized categories contribute zero mass and never appear in the
/// breakdown. An empty input yields a zero total.
///
/// # Errors
/// - `DataFormatError` for the first malformed record (1-based row).
pub fn aggregate(
    records: &[ActivityRecord],
    factors: &EmissionFactorTable,
) -> Result<EmissionsResult, DataFormatError> {
    for (index, record) in records.iter().enumerate() {
        record.validate(index + 1)?;
    }

    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        let mass_kg = record.quantity * factors.factor_for(&record.category);
        *grouped.entry(record.category.as_str()).or_insert(0.0) += mass_kg;
    }

    let total_kg = grouped.values().fold(0.0, |acc, mass| acc + mass);
    let per_category = grouped
        .into_iter()
        .filter(|(_, mass_kg)| *mass_kg > 0.0)
        .map(|(category, mass_kg)| (category.to_string(), mass_kg))
        .collect();

    Ok(EmissionsResult {
        total_kg,
        per_category,
    })
}

/// Counts records whose category has no emission factor.
pub fn unrecognized_count(records: &[ActivityRecord], factors: &EmissionFactorTable) -> usize {
    records
        .iter()
        .filter(|record| !factors.contains(&record.category))
        .count()
}
