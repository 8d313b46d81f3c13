//! CSV loader for employee-project assignments
//!
//! Accepts the raw upload format: one assignment per row with employee id,
//! project id, start date, end date. Individual rows that cannot be parsed
//! are skipped with a warning so one bad row never sinks the batch.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::model::Assignment;

/// Date layouts accepted for the start and end fields, tried in order.
/// First match wins, so `03/04/2020` reads as March 4th.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%m-%d-%Y", "%Y.%m.%d",
    "%d.%m.%Y", "%Y%m%d",
];

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date format in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

/// Load assignments from a CSV file.
///
/// A header row is skipped when the first field of the first row is not
/// numeric. An end date that is empty or a case-insensitive "null" literal
/// is closed at `as_of`.
pub fn load_assignments<P: AsRef<Path>>(
    path: P,
    as_of: NaiveDate,
) -> Result<Vec<Assignment>, CsvLoaderError> {
    let file = File::open(path)?;
    parse_assignments(file, as_of)
}

/// Parse assignments from any CSV source.
pub fn parse_assignments<R: Read>(
    reader: R,
    as_of: NaiveDate,
) -> Result<Vec<Assignment>, CsvLoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut assignments = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 1;

        // Header detection is content-based: a first row whose first field
        // is not numeric is treated as a header.
        if row_idx == 0 && record.get(0).map(is_numeric) == Some(false) {
            continue;
        }

        if record.len() < 4 {
            eprintln!("Warning: skipping incomplete record in row {}", row_num);
            continue;
        }

        match parse_record(&record, row_num, as_of) {
            Ok(assignment) => assignments.push(assignment),
            Err(e) => eprintln!("Warning: skipping row {}: {}", row_num, e),
        }
    }

    Ok(assignments)
}

fn parse_record(
    record: &csv::StringRecord,
    row_num: usize,
    as_of: NaiveDate,
) -> Result<Assignment, CsvLoaderError> {
    let employee_id = parse_u64(record.get(0).unwrap_or(""), row_num, "employee id")?;
    let project_id = parse_u64(record.get(1).unwrap_or(""), row_num, "project id")?;

    let from_field = record.get(2).unwrap_or("");
    let date_from =
        parse_date(from_field, row_num)?.ok_or_else(|| CsvLoaderError::InvalidDate {
            row: row_num,
            value: from_field.to_string(),
        })?;

    // Open-ended assignment: an absent end date means "still ongoing",
    // resolved to the as-of date before the record reaches the engine.
    let date_to = parse_date(record.get(3).unwrap_or(""), row_num)?.unwrap_or(as_of);

    Ok(Assignment::new(employee_id, project_id, date_from, date_to))
}

fn parse_date(s: &str, row: usize) -> Result<Option<NaiveDate>, CsvLoaderError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return Ok(None);
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(Some(date));
        }
    }

    Err(CsvLoaderError::InvalidDate {
        row,
        value: s.to_string(),
    })
}

fn parse_u64(s: &str, row: usize, column: &str) -> Result<u64, CsvLoaderError> {
    s.trim().parse().map_err(|_| CsvLoaderError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}

fn is_numeric(s: &str) -> bool {
    s.trim().parse::<u64>().is_ok()
}
