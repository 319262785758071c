//! Plain-text report renderer.

use super::number::grouped;
use super::{OffsetReport, OFFSET_INFO, REPORT_TITLE};

pub(super) fn render(report: &OffsetReport) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(REPORT_TITLE.len()));
    out.push('\n');
    out.push_str(&format!("Region: {}\n", report.region));
    out.push_str(&format!("Report Year: {}\n", report.reporting_period));
    out.push_str(&format!(
        "Generated On: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    section(&mut out, "I. Summary of Carbon Footprint");
    out.push_str(&format!(
        "Total CO2 Emitted: {} kg\n",
        grouped(report.total_kg, 2)
    ));
    if report.unrecognized_records > 0 {
        out.push_str(&format!(
            "Records without an emission factor: {}\n",
            report.unrecognized_records
        ));
    }

    section(&mut out, "II. Carbon Offset Requirement");
    out.push_str(&format!("Tree Species: {}\n", report.species));
    out.push_str(&format!(
        "Peak Absorption Age of {}: {} years\n",
        report.species, report.peak_age_years
    ));
    out.push_str(&format!(
        "Annual CO2 Absorption per tree: {} kg/year\n",
        grouped(report.annual_absorption_kg, 2)
    ));
    out.push_str(&format!(
        "Number of Trees Required: {}\n",
        grouped(report.trees_required_rounded, 0)
    ));

    section(&mut out, "III. CO2 Emissions per Source");
    let width = report
        .per_category
        .iter()
        .map(|row| row.category.chars().count())
        .chain(std::iter::once("Source".len()))
        .max()
        .unwrap_or_default();
    out.push_str(&format!("{:<width$}  {:>18}\n", "Source", "CO2 Emission (kg)"));
    for row in &report.per_category {
        out.push_str(&format!(
            "{:<width$}  {:>18}\n",
            row.category,
            grouped(row.emission_kg, 2)
        ));
    }

    section(&mut out, "IV. Benchmark Gauge (Performance)");
    let benchmark = &report.benchmark;
    out.push_str(&format!(
        "Band: {} (severity {} of {})\n",
        benchmark.label, benchmark.severity_rank, benchmark.band_count
    ));
    out.push_str(&format!(
        "Gauge: {} {:.1}% of {} kg\n",
        gauge_bar(benchmark.gauge_fraction),
        benchmark.gauge_fraction * 100.0,
        grouped(benchmark.cap_kg, 0)
    ));

    section(&mut out, "V. Carbon Offset Info for Businesses");
    for line in OFFSET_INFO {
        out.push_str(line);
        out.push('\n');
    }

    section(&mut out, "VI. Conclusion and Offset Recommendation");
    out.push_str(&format!(
        "Your organization's total annual CO2 emissions are {} kg. \
         To achieve a carbon-neutral footprint, we suggest planting indigenous species \
         based on your selected region, {}.\n",
        grouped(report.total_kg, 2),
        report.region
    ));
    out.push_str(&format!(
        "Recommendation: plant {} {} tree(s) (peak absorption at {} years).\n",
        grouped(report.trees_required_rounded, 0),
        report.species,
        report.peak_age_years
    ));
    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

const GAUGE_BAR_WIDTH: usize = 20;

fn gauge_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * GAUGE_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(GAUGE_BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::gauge_bar;

    #[test]
    fn gauge_bar_is_clamped() {
        assert_eq!(gauge_bar(0.0), "[....................]");
        assert_eq!(gauge_bar(0.5), "[##########..........]");
        assert_eq!(gauge_bar(3.0), "[####################]");
    }
}
