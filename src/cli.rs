//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "overlap-checker")]
#[command(version)]
#[command(about = "Finds the employee pairs who worked together longest on shared projects")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CSV of assignments and rank all overlapping pairs
    Analyze {
        /// Path to CSV file (employee id, project id, start date, end date)
        csv: PathBuf,

        /// Write the full JSON report to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Max ranked pairs shown in table output (0 = all). Uses config value if not specified.
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Date used to close open-ended assignments (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Show only the longest-working pair
    Longest {
        /// Path to CSV file (employee id, project id, start date, end date)
        csv: PathBuf,

        /// Date used to close open-ended assignments (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default ranking limit (0 = all pairs)
        #[arg(long)]
        set_limit: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
