//! Report model and document renderers.
//!
//! # Responsibility
//! - Assemble the report-facing view of one calculation.
//! - Render it as plain text, Markdown or JSON.
//!
//! # Invariants
//! - The true, uncapped total is always reported; only the gauge is clamped.
//! - Tree counts are rounded to whole trees here and nowhere else.

mod markdown;
mod number;
mod text;

use crate::benchmark::{gauge_geometry, GaugeGeometry};
use crate::service::calculation_service::OffsetCalculation;
use crate::tables::BandSet;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

pub use number::grouped;

pub const REPORT_TITLE: &str = "Annual Carbon Offset Report";

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    UnknownFormat(String),
    Serialize(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFormat(value) => write!(
                f,
                "unknown report format `{value}`; expected text|markdown|json"
            ),
            Self::Serialize(message) => write!(f, "failed to serialize report: {message}"),
        }
    }
}

impl Error for ReportError {}

/// One row of the per-source emissions table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub emission_kg: f64,
}

/// Benchmark outcome as shown in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub label: String,
    pub severity_rank: u32,
    pub band_count: usize,
    pub color: String,
    pub gauge_fraction: f64,
    pub cap_kg: f64,
}

/// Everything a document needs about one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetReport {
    pub calculation_id: Uuid,
    pub region: String,
    /// `YYYY-YYYY` starting at the generation year.
    pub reporting_period: String,
    pub generated_at: NaiveDateTime,
    pub total_kg: f64,
    pub per_category: Vec<CategoryRow>,
    pub species: String,
    pub peak_age_years: u32,
    pub annual_absorption_kg: f64,
    pub trees_required: f64,
    pub trees_required_rounded: f64,
    pub unrecognized_records: usize,
    pub benchmark: BenchmarkSummary,
    pub gauge: GaugeGeometry,
}

impl OffsetReport {
    pub fn assemble(
        calculation: &OffsetCalculation,
        bands: &BandSet,
        generated_at: NaiveDateTime,
    ) -> Self {
        let year = generated_at.year();
        let classification = &calculation.classification;
        Self {
            calculation_id: calculation.id,
            region: calculation.region.region.clone(),
            reporting_period: format!("{}-{}", year, year + 1),
            generated_at,
            total_kg: calculation.emissions.total_kg,
            per_category: calculation
                .emissions
                .per_category
                .iter()
                .map(|(category, emission_kg)| CategoryRow {
                    category: category.clone(),
                    emission_kg: *emission_kg,
                })
                .collect(),
            species: calculation.region.species.clone(),
            peak_age_years: calculation.region.peak_age,
            annual_absorption_kg: calculation.region.annual_absorption_kg,
            trees_required: calculation.offset.trees_required,
            trees_required_rounded: calculation.offset.whole_trees(),
            unrecognized_records: calculation.unrecognized_records,
            benchmark: BenchmarkSummary {
                label: classification.band.label.clone(),
                severity_rank: classification.band.severity_rank,
                band_count: bands.bands().len(),
                color: classification.band.color.clone(),
                gauge_fraction: classification.gauge_fraction,
                cap_kg: bands.cap_kg(),
            },
            gauge: gauge_geometry(bands, classification),
        }
    }
}

/// Renders `report` in the requested format.
pub fn render(report: &OffsetReport, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(text::render(report)),
        ReportFormat::Markdown => Ok(markdown::render(report)),
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|err| ReportError::Serialize(err.to_string())),
    }
}

pub(crate) const OFFSET_INFO: [&str; 3] = [
    "Carbon offsets can potentially be tax deductible for businesses if purchased from qualified non-profits.",
    "Businesses can invest directly, purchase future contracts, or buy spot credits.",
    "Prices vary by project type and location, typically $5-15 per ton of CO2.",
];

#[cfg(test)]
mod tests {
    use super::ReportFormat;

    #[test]
    fn format_parses_aliases() {
        assert_eq!("MD".parse::<ReportFormat>().expect("md"), ReportFormat::Markdown);
        assert_eq!("txt".parse::<ReportFormat>().expect("txt"), ReportFormat::Text);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }
}
