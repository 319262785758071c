//! Markdown report renderer.

use super::number::grouped;
use super::{OffsetReport, OFFSET_INFO, REPORT_TITLE};

pub(super) fn render(report: &OffsetReport) -> String {
    let mut md = String::new();
    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_summary(report));
    md.push('\n');
    md.push_str(&render_requirement(report));
    md.push('\n');
    md.push_str(&render_sources(report));
    md.push('\n');
    md.push_str(&render_benchmark(report));
    md.push('\n');
    md.push_str(&render_offset_info());
    md.push('\n');
    md.push_str(&render_conclusion(report));
    md
}

fn render_header(report: &OffsetReport) -> String {
    format!(
        "# {REPORT_TITLE}\n\n\
         - **Region:** {}\n\
         - **Report Year:** {}\n\
         - **Generated On:** {}\n\
         - **Calculation ID:** `{}`\n",
        report.region,
        report.reporting_period,
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.calculation_id
    )
}

fn render_summary(report: &OffsetReport) -> String {
    let mut out = format!(
        "## I. Summary of Carbon Footprint\n\nTotal CO2 Emitted: **{} kg**\n",
        grouped(report.total_kg, 2)
    );
    if report.unrecognized_records > 0 {
        out.push_str(&format!(
            "\n> {} record(s) had no emission factor and were counted as 0 kg.\n",
            report.unrecognized_records
        ));
    }
    out
}

fn render_requirement(report: &OffsetReport) -> String {
    format!(
        "## II. Carbon Offset Requirement\n\n\
         - Tree Species: {species}\n\
         - Peak Absorption Age of {species}: {age} years\n\
         - Annual CO2 Absorption per tree: {absorption} kg/year\n\
         - Number of Trees Required: {trees}\n",
        species = report.species,
        age = report.peak_age_years,
        absorption = grouped(report.annual_absorption_kg, 2),
        trees = grouped(report.trees_required_rounded, 0),
    )
}

fn render_sources(report: &OffsetReport) -> String {
    let mut out = String::from(
        "## III. CO2 Emissions per Source\n\n| Source | CO2 Emission (kg) |\n|--------|------------------:|\n",
    );
    if report.per_category.is_empty() {
        out.push_str("| _none_ | 0.00 |\n");
    }
    for row in &report.per_category {
        out.push_str(&format!(
            "| {} | {} |\n",
            row.category.replace('|', "\\|"),
            grouped(row.emission_kg, 2)
        ));
    }
    out
}

fn render_benchmark(report: &OffsetReport) -> String {
    let benchmark = &report.benchmark;
    let mut out = format!(
        "## IV. Benchmark Gauge (Performance)\n\n\
         **{}** (severity {} of {})\n\n\
         Gauge position: {:.1}% of the {} kg scale (pointer at {:.1} degrees)\n\n\
         | Band | Color | Arc (degrees) |\n|------|-------|---------------|\n",
        benchmark.label,
        benchmark.severity_rank,
        benchmark.band_count,
        benchmark.gauge_fraction * 100.0,
        grouped(benchmark.cap_kg, 0),
        report.gauge.pointer_angle_deg,
    );
    for wedge in &report.gauge.wedges {
        let marker = if wedge.label == benchmark.label { " <-" } else { "" };
        out.push_str(&format!(
            "| {}{} | {} | {:.0} to {:.0} |\n",
            wedge.label, marker, wedge.color, wedge.start_angle_deg, wedge.end_angle_deg
        ));
    }
    out
}

fn render_offset_info() -> String {
    let mut out = String::from("## V. Carbon Offset Info for Businesses\n\n");
    for line in OFFSET_INFO {
        out.push_str("- ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_conclusion(report: &OffsetReport) -> String {
    format!(
        "## VI. Conclusion and Offset Recommendation\n\n\
         Your organization's total annual CO2 emissions are **{total} kg**. \
         To achieve a carbon-neutral footprint, we suggest planting indigenous species \
         based on your selected region, {region}.\n\n\
         **Recommendation:**\n\n\
         - **Species:** {species} (Peak absorption at {age} years)\n\
         - **Trees Required:** **{trees}** trees.\n",
        total = grouped(report.total_kg, 2),
        region = report.region,
        species = report.species,
        age = report.peak_age_years,
        trees = grouped(report.trees_required_rounded, 0),
    )
}
