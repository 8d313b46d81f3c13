//! Command handlers

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::model::Assignment;
use crate::error::{Error, Result};
use crate::infrastructure::csv_loader::load_assignments;
use crate::output::{output_longest, output_report, AnalysisReport};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match &cli.command {
        Commands::Analyze {
            csv,
            output,
            limit,
            as_of,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            let limit = limit.unwrap_or(config.ranking_limit);
            cmd_analyze(&cli, csv.clone(), output.clone(), limit, *as_of, output_format)
        }

        Commands::Longest { csv, as_of } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_longest(&cli, csv.clone(), *as_of, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_limit,
            reset,
        } => cmd_config(*show, *set_output, *set_limit, *reset),
    }
}

fn cmd_analyze(
    cli: &Cli,
    csv: PathBuf,
    output: Option<PathBuf>,
    limit: usize,
    as_of: Option<NaiveDate>,
    output_format: OutputFormat,
) -> Result<()> {
    let records = load_batch(cli, &csv, as_of)?;
    let report = AnalysisReport::from_records(&records);

    if let Some(path) = output {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, content)?;
        if cli.verbose {
            eprintln!("Wrote JSON report to {}", path.display());
        }
    }

    output_report(output_format, &report, limit)
}

fn cmd_longest(
    cli: &Cli,
    csv: PathBuf,
    as_of: Option<NaiveDate>,
    output_format: OutputFormat,
) -> Result<()> {
    let records = load_batch(cli, &csv, as_of)?;
    let report = AnalysisReport::from_records(&records);
    output_longest(output_format, &report)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_limit: Option<usize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(limit) = set_limit {
        config.ranking_limit = limit;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

/// Parse the CSV batch, resolving open-ended assignments at `as_of`
/// (today when not given). An upload with no valid rows is an error
/// before the engine runs.
fn load_batch(cli: &Cli, csv: &Path, as_of: Option<NaiveDate>) -> Result<Vec<Assignment>> {
    validate_csv_path(csv)?;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let records = load_assignments(csv, as_of)?;

    if cli.verbose {
        eprintln!(
            "Parsed {} assignment records from {}",
            records.len(),
            csv.display()
        );
    }

    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(records)
}

fn validate_csv_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(Error::NotCsv(path.display().to_string()));
    }

    Ok(())
}
