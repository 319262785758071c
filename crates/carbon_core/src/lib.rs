//! Core domain logic for carbon footprint and reforestation offset reports.
//! This crate is the single source of truth for calculation invariants.

pub mod aggregate;
pub mod benchmark;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod offset;
pub mod report;
pub mod service;
pub mod tables;

pub use aggregate::aggregate;
pub use benchmark::{classify, gauge_geometry, Classification, GaugeGeometry, GaugeWedge};
pub use ingest::{preview_rows, read_activity_csv, read_activity_file, CsvPreview};
pub use logging::{
    default_log_level, init_logging, init_logging_in_dir, logging_status, LogLevel, LogTarget,
    LoggingError,
};
pub use model::activity::{ActivityRecord, DataFormatError};
pub use model::band::BenchmarkBand;
pub use model::emissions::EmissionsResult;
pub use model::region::RegionProfile;
pub use offset::{estimate, estimate_for_region, OffsetError, OffsetResult};
pub use report::{render, OffsetReport, ReportError, ReportFormat};
pub use service::calculation_service::{
    CalculationError, CalculationResult, OffsetCalculation, OffsetCalculator,
};
pub use tables::{BandSet, ConfigError, EmissionFactorTable, ReferenceData, RegionCatalog};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
