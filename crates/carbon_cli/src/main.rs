//! Command-line shell for carbon offset reports.
//!
//! # Responsibility
//! - Select an activity CSV and a region, run the core calculation and write
//!   the report.
//! - Keep interaction state (file, region, format) in arguments only; the
//!   core receives everything explicitly.

use anyhow::{bail, Context, Result};
use carbon_core::ingest::DEFAULT_PREVIEW_ROWS;
use carbon_core::{
    default_log_level, init_logging, preview_rows, read_activity_file, render, LogLevel,
    LogTarget, OffsetCalculator, OffsetReport, ReferenceData, ReportFormat,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "carbon", version, about = "Carbon footprint and reforestation offset reports")]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, env = "CARBON_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted).
    #[arg(long, global = true, env = "CARBON_LOG_DIR")]
    log_dir: Option<String>,

    /// JSON reference file overriding the built-in factor, region and band tables.
    #[arg(long, global = true, env = "CARBON_REFERENCE_PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate emissions and the tree offset, then write the report.
    Report(ReportArgs),
    /// List supported regions with their reference species.
    Regions,
    /// List recognized activity categories and emission factors.
    Categories,
    /// Show the first rows of an activity CSV.
    Preview(PreviewArgs),
    /// Print the active reference tables as JSON.
    DumpConfig,
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Activity CSV with `Source` and `Amount` columns.
    #[arg(short, long)]
    input: PathBuf,
    /// Region (exact, case-sensitive name).
    #[arg(short, long)]
    region: String,
    /// Output format: text|markdown|json.
    #[arg(short, long, default_value = "text")]
    format: String,
    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PreviewArgs {
    #[arg(short, long)]
    input: PathBuf,
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;
    let reference = load_reference(&cli)?;

    match cli.command {
        Command::Report(args) => run_report(&reference, args),
        Command::Regions => {
            for profile in reference.regions.profiles() {
                println!(
                    "{:<42} {:<13} peak {:>2} y  {:>6.2} kg/year",
                    profile.region, profile.species, profile.peak_age, profile.annual_absorption_kg
                );
            }
            Ok(())
        }
        Command::Categories => {
            for (category, factor) in reference.factors.iter() {
                println!("{category:<42} {factor:>8.2} kg CO2/unit");
            }
            Ok(())
        }
        Command::Preview(args) => run_preview(args),
        Command::DumpConfig => {
            let json = serde_json::to_string_pretty(&reference.to_file())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let (level, target) = match &cli.log_dir {
        Some(dir) => {
            let level = match &cli.log_level {
                Some(raw) => raw.parse::<LogLevel>()?,
                None => default_log_level(),
            };
            (level, LogTarget::directory(dir)?)
        }
        None => {
            let level = match &cli.log_level {
                Some(raw) => raw.parse::<LogLevel>()?,
                None => LogLevel::Warn,
            };
            (level, LogTarget::Stderr)
        }
    };
    init_logging(level, target).context("failed to initialize logging")
}

fn load_reference(cli: &Cli) -> Result<ReferenceData> {
    match &cli.config {
        Some(path) => ReferenceData::load_from_path(path)
            .with_context(|| format!("failed to load reference tables from {}", path.display())),
        None => Ok(ReferenceData::builtin()),
    }
}

fn run_report(reference: &ReferenceData, args: ReportArgs) -> Result<()> {
    let format = args.format.parse::<ReportFormat>()?;
    if !reference.regions.contains(&args.region) {
        bail!(
            "region `{}` is not supported; run `carbon regions` to list valid names",
            args.region
        );
    }

    let records = read_activity_file(&args.input)
        .with_context(|| format!("failed to read activity data from {}", args.input.display()))?;
    let calculation = OffsetCalculator::new(reference).calculate(&records, &args.region)?;
    if calculation.is_empty() {
        println!("Total CO2 emission is zero; nothing to report.");
        return Ok(());
    }

    let report = OffsetReport::assemble(
        &calculation,
        &reference.bands,
        chrono::Local::now().naive_local(),
    );
    let document = render(&report, format)?;

    match args.output {
        Some(path) => {
            fs::write(&path, document)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(
                "event=report_write module=cli status=ok format={} calculation_id={}",
                format, calculation.id
            );
            println!("Report generated: {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let preview = preview_rows(file, args.rows)?;
    println!("{}", preview.headers.join(" | "));
    for row in &preview.rows {
        println!("{}", row.join(" | "));
    }
    Ok(())
}
