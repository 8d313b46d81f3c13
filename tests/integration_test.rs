//! Integration tests for the CSV-to-ranking pipeline

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::tempdir;

use overlap_checker::domain::service::{compute_all_pairs, find_longest_pair};
use overlap_checker::infrastructure::csv_loader::load_assignments;
use overlap_checker::output::{generate_pair_report, AnalysisReport};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test CSV");
    path
}

/// Full pipeline: parse a CSV with a header and open-ended rows, rank pairs.
#[test]
fn test_csv_to_ranking_pipeline() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "assignments.csv",
        "EmpID,ProjectID,DateFrom,DateTo\n\
         143,12,2013-11-01,2014-01-05\n\
         218,12,2013-12-01,2014-02-01\n\
         143,10,2012-01-01,2014-04-27\n\
         218,10,2012-05-16,2014-01-05\n",
    );

    let records = load_assignments(&path, date(2024, 1, 1)).expect("Failed to load CSV");
    assert_eq!(records.len(), 4);

    let report = AnalysisReport::from_records(&records);
    assert!(report.success);
    assert_eq!(report.total_records, 4);

    let longest = report.longest_pair.expect("Expected a longest pair");
    assert_eq!((longest.employee1_id, longest.employee2_id), (143, 218));
    assert_eq!(longest.overlaps.len(), 2);
    assert_eq!(longest.total_days, 636);
}

/// Open-ended assignments resolve to the as-of date and still pair up.
#[test]
fn test_open_ended_assignments_use_as_of_date() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "ongoing.csv",
        "143,12,2024-01-01,NULL\n\
         218,12,2024-01-01,\n",
    );

    let as_of = date(2024, 1, 31);
    let records = load_assignments(&path, as_of).expect("Failed to load CSV");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.date_to == as_of));

    let longest = find_longest_pair(&records).expect("Expected a pair");
    assert_eq!(longest.total_days, 31);
}

/// Bad rows are skipped; the remaining batch still produces a ranking.
#[test]
fn test_malformed_rows_do_not_sink_the_batch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "mixed.csv",
        "143,12,2013-01-01,2013-12-31\n\
         oops,12,2013-01-01,2013-12-31\n\
         218,12\n\
         218,12,not-a-date,2013-12-31\n\
         218,12,2013-06-01,2013-12-31\n",
    );

    let records = load_assignments(&path, date(2024, 1, 1)).expect("Failed to load CSV");
    assert_eq!(records.len(), 2);

    let pairs = compute_all_pairs(&records);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].total_days, 214);
}

/// Disjoint tenures parse fine but produce an empty ranking with a message.
#[test]
fn test_no_overlap_report_carries_message() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "disjoint.csv",
        "143,12,2013-01-01,2013-06-01\n\
         218,12,2013-07-01,2013-12-01\n",
    );

    let records = load_assignments(&path, date(2024, 1, 1)).expect("Failed to load CSV");
    let report = AnalysisReport::from_records(&records);

    assert!(report.success);
    assert!(report.longest_pair.is_none());
    assert!(report.all_pairs.is_empty());
    assert_eq!(
        report.message.as_deref(),
        Some("No overlapping employee pairs found")
    );

    let table = generate_pair_report(&report, 0);
    assert!(table.contains("No overlapping employee pairs found"));
}

/// Mixed date layouts within one file are normalized before pairing.
#[test]
fn test_mixed_date_layouts() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "layouts.csv",
        "143,12,2020/01/01,31.01.2020\n\
         218,12,01/15/2020,20200214\n",
    );

    let records = load_assignments(&path, date(2024, 1, 1)).expect("Failed to load CSV");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date_from, date(2020, 1, 1));
    assert_eq!(records[0].date_to, date(2020, 1, 31));
    assert_eq!(records[1].date_from, date(2020, 1, 15));
    assert_eq!(records[1].date_to, date(2020, 2, 14));

    // Jan 15 .. Jan 31 shared
    let longest = find_longest_pair(&records).expect("Expected a pair");
    assert_eq!(longest.total_days, 17);
}

/// The JSON report round-trips and keeps longest == head of ranking.
#[test]
fn test_json_report_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "three.csv",
        "143,12,2013-01-01,2013-12-31\n\
         218,12,2013-06-01,2013-12-31\n\
         350,12,2013-09-01,2013-12-31\n",
    );

    let records = load_assignments(&path, date(2024, 1, 1)).expect("Failed to load CSV");
    let report = AnalysisReport::from_records(&records);
    assert_eq!(report.all_pairs.len(), 3);

    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize");
    let parsed: AnalysisReport = serde_json::from_str(&json).expect("Failed to parse");

    assert_eq!(parsed.all_pairs, report.all_pairs);
    assert_eq!(parsed.longest_pair.as_ref(), parsed.all_pairs.first());
    assert_eq!(parsed.total_records, 3);
}
