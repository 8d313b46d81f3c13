//! Output formatting and the analysis response structure

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::domain::model::{Assignment, PairSummary};
use crate::domain::service::compute_all_pairs;
use crate::error::Result;

/// Full analysis response: the longest pair, the complete ranking and the
/// number of records that reached the engine.
///
/// `longest_pair` is always the head of `all_pairs`; when no pair overlaps
/// the analysis still succeeds and `message` explains the empty result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_pair: Option<PairSummary>,
    pub all_pairs: Vec<PairSummary>,
    pub total_records: usize,
}

impl AnalysisReport {
    /// Run the engine over a batch of records and assemble the response.
    pub fn from_records(records: &[Assignment]) -> Self {
        let all_pairs = compute_all_pairs(records);
        let longest_pair = all_pairs.first().cloned();
        let message = if longest_pair.is_none() {
            Some("No overlapping employee pairs found".to_string())
        } else {
            None
        };

        Self {
            success: true,
            message,
            longest_pair,
            all_pairs,
            total_records: records.len(),
        }
    }
}

/// Print the full report in the requested format.
pub fn output_report(
    output_format: OutputFormat,
    report: &AnalysisReport,
    limit: usize,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", generate_pair_report(report, limit));
    }
    Ok(())
}

/// Print only the longest-pair section in the requested format.
pub fn output_longest(output_format: OutputFormat, report: &AnalysisReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        match &report.longest_pair {
            Some(pair) => println!("{}", serde_json::to_string_pretty(pair)?),
            None => {
                let body = serde_json::json!({
                    "success": true,
                    "message": report.message,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }
    } else {
        print!("{}", generate_longest_section(report));
    }
    Ok(())
}

/// Render the table report.
pub fn generate_pair_report(report: &AnalysisReport, limit: usize) -> String {
    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("           Employee Pair Overlap Report           \n");
    out.push_str("==================================================\n\n");

    out.push_str("[Summary]\n");
    out.push_str(&format!(
        "  Input records:     {}\n",
        report.total_records
    ));
    out.push_str(&format!(
        "  Overlapping pairs: {}\n\n",
        report.all_pairs.len()
    ));

    out.push_str(&generate_longest_section(report));

    if !report.all_pairs.is_empty() {
        let shown = if limit == 0 {
            report.all_pairs.len()
        } else {
            limit.min(report.all_pairs.len())
        };

        out.push_str("[All Pairs]");
        if shown < report.all_pairs.len() {
            out.push_str(&format!(" (top {} of {})", shown, report.all_pairs.len()));
        }
        out.push('\n');
        out.push_str("-".repeat(54).as_str());
        out.push('\n');
        out.push_str(&format!(
            "{:>10} {:>10} {:>10} {:>12}\n",
            "Employee 1", "Employee 2", "Projects", "Total days"
        ));
        out.push_str("-".repeat(54).as_str());
        out.push('\n');
        for summary in report.all_pairs.iter().take(shown) {
            out.push_str(&format!(
                "{:>10} {:>10} {:>10} {:>12}\n",
                summary.employee1_id,
                summary.employee2_id,
                summary.overlaps.len(),
                summary.total_days
            ));
        }
        out.push('\n');
    }

    out.push_str("==================================================\n");
    out
}

fn generate_longest_section(report: &AnalysisReport) -> String {
    let mut out = String::new();

    match &report.longest_pair {
        Some(pair) => {
            out.push_str("[Longest Working Pair]\n");
            out.push_str(&format!(
                "  Employees {} and {} worked together for {} days\n",
                pair.employee1_id, pair.employee2_id, pair.total_days
            ));
            out.push_str("-".repeat(32).as_str());
            out.push('\n');
            out.push_str(&format!("{:>12} {:>12}\n", "Project", "Days"));
            out.push_str("-".repeat(32).as_str());
            out.push('\n');
            for overlap in &pair.overlaps {
                out.push_str(&format!(
                    "{:>12} {:>12}\n",
                    overlap.project_id, overlap.days_worked
                ));
            }
            out.push('\n');
        }
        None => {
            out.push_str(&format!(
                "  {}\n\n",
                report
                    .message
                    .as_deref()
                    .unwrap_or("No overlapping employee pairs found")
            ));
        }
    }

    out
}
