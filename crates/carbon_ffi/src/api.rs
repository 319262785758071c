//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Convert every core error into a response envelope.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Reference tables are resolved once per process and never mutated.

use carbon_core::{
    core_version as core_version_inner, init_logging_in_dir, read_activity_csv, render,
    CalculationError, OffsetCalculator, OffsetReport, ReferenceData, ReportFormat,
};
use log::error;
use std::sync::OnceLock;

const REFERENCE_PATH_ENV: &str = "CARBON_REFERENCE_PATH";
static REFERENCE: OnceLock<Result<ReferenceData, String>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_in_dir(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Region option for selection widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionItem {
    pub region: String,
    pub species: String,
    pub peak_age: u32,
    pub annual_absorption_kg: f64,
}

/// Lists supported regions sorted by name.
///
/// Returns an empty list when the reference tables failed to load.
#[flutter_rust_bridge::frb(sync)]
pub fn list_regions() -> Vec<RegionItem> {
    match reference() {
        Ok(reference) => reference
            .regions
            .profiles()
            .map(|profile| RegionItem {
                region: profile.region.clone(),
                species: profile.species.clone(),
                peak_age: profile.peak_age,
                annual_absorption_kg: profile.annual_absorption_kg,
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Response envelope for one offset calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetResponse {
    /// Whether the calculation succeeded.
    pub ok: bool,
    /// Stable error code (`data_format|invalid_region|division|config|report`)
    /// or `None` on success.
    pub error_code: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    pub total_kg: f64,
    /// Unrounded tree count; UI rounds for display.
    pub trees_required: f64,
    pub band_label: String,
    pub gauge_fraction: f64,
    /// Rendered document, empty when there is nothing to report.
    pub report: String,
}

impl OffsetResponse {
    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_code: Some(code.to_string()),
            message: message.into(),
            total_kg: 0.0,
            trees_required: 0.0,
            band_label: String::new(),
            gauge_fraction: 0.0,
            report: String::new(),
        }
    }
}

/// Calculates emissions and offset for CSV text and a region.
///
/// Input semantics:
/// - `csv_text`: CSV with `Source` and `Amount` columns.
/// - `region`: exact region name as returned by `list_regions`.
/// - `format`: `text|markdown|json`; `None` means `markdown`.
///
/// # FFI contract
/// - Sync call, CPU-only.
/// - Never panics.
/// - Zero total returns `ok=true` with an empty `report`.
#[flutter_rust_bridge::frb(sync)]
pub fn calculate_offset(csv_text: String, region: String, format: Option<String>) -> OffsetResponse {
    let reference = match reference() {
        Ok(reference) => reference,
        Err(message) => return OffsetResponse::failure("config", message.clone()),
    };
    let format = match format.as_deref().map(str::parse::<ReportFormat>) {
        None => ReportFormat::Markdown,
        Some(Ok(format)) => format,
        Some(Err(err)) => return OffsetResponse::failure("report", err.to_string()),
    };
    if let Err(err) = reference.regions.lookup(&region) {
        let err = CalculationError::from(err);
        return OffsetResponse::failure(err.code(), format!("calculate_offset failed: {err}"));
    }

    let calculation = match read_activity_csv(csv_text.as_bytes())
        .map_err(CalculationError::from)
        .and_then(|records| OffsetCalculator::new(reference).calculate(&records, &region))
    {
        Ok(calculation) => calculation,
        Err(err) => {
            return OffsetResponse::failure(err.code(), format!("calculate_offset failed: {err}"))
        }
    };

    let mut response = OffsetResponse {
        ok: true,
        error_code: None,
        message: String::new(),
        total_kg: calculation.emissions.total_kg,
        trees_required: calculation.offset.trees_required,
        band_label: calculation.classification.band.label.clone(),
        gauge_fraction: calculation.classification.gauge_fraction,
        report: String::new(),
    };
    if calculation.is_empty() {
        response.message = "Total CO2 emission is zero.".to_string();
        return response;
    }

    let report = OffsetReport::assemble(
        &calculation,
        &reference.bands,
        chrono::Local::now().naive_local(),
    );
    match render(&report, format) {
        Ok(document) => {
            response.message = "Report generated.".to_string();
            response.report = document;
            response
        }
        Err(err) => OffsetResponse::failure("report", format!("calculate_offset failed: {err}")),
    }
}

fn reference() -> Result<&'static ReferenceData, &'static String> {
    REFERENCE
        .get_or_init(|| {
            let path = std::env::var(REFERENCE_PATH_ENV)
                .ok()
                .filter(|raw| !raw.trim().is_empty());
            match path {
                Some(raw) => ReferenceData::load_from_path(raw.trim()).map_err(|err| {
                    error!(
                        "event=reference_resolve module=ffi status=error error={}",
                        err
                    );
                    err.to_string()
                }),
                None => Ok(ReferenceData::builtin()),
            }
        })
        .as_ref()
}
