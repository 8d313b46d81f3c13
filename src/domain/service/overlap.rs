//! Pairwise overlap aggregation engine
//!
//! Groups assignments by project, intersects every pair of tenures within a
//! group, and accumulates per-pair totals across all shared projects. Pure
//! and synchronous: each call works on its own batch and holds no state
//! between invocations.

use std::collections::{BTreeMap, HashMap};

use crate::domain::model::{Assignment, EmployeePair, PairSummary, ProjectOverlap};

/// Number of days two assignments on the same project coincide.
///
/// Both boundary dates count as worked days, so identical single-day ranges
/// yield 1. An empty intersection (including inverted input ranges) yields 0.
pub fn overlap_days(a: &Assignment, b: &Assignment) -> i64 {
    let start = a.date_from.max(b.date_from);
    let end = a.date_to.min(b.date_to);
    if start > end {
        return 0;
    }
    (end - start).num_days() + 1
}

/// Computes one summary per pair of employees with positive overlap on at
/// least one shared project, sorted by `total_days` descending.
///
/// Ties are broken by the canonical employee ids ascending so the ranking is
/// reproducible. Two rows for the same employee within one project are never
/// paired with each other, but each row still pairs with every other
/// employee's rows individually.
pub fn compute_all_pairs(assignments: &[Assignment]) -> Vec<PairSummary> {
    let mut project_groups: BTreeMap<u64, Vec<&Assignment>> = BTreeMap::new();
    for assignment in assignments {
        project_groups
            .entry(assignment.project_id)
            .or_default()
            .push(assignment);
    }

    let mut accumulated: HashMap<EmployeePair, (i64, Vec<ProjectOverlap>)> = HashMap::new();

    for (&project_id, rows) in &project_groups {
        for i in 0..rows.len() {
            for j in (i + 1)..rows.len() {
                let (a, b) = (rows[i], rows[j]);
                if a.employee_id == b.employee_id {
                    continue;
                }

                let days = overlap_days(a, b);
                if days == 0 {
                    continue;
                }

                let key = EmployeePair::new(a.employee_id, b.employee_id);
                let entry = accumulated.entry(key).or_insert_with(|| (0, Vec::new()));
                entry.0 += days;
                entry.1.push(ProjectOverlap {
                    employee1_id: key.employee1_id,
                    employee2_id: key.employee2_id,
                    project_id,
                    days_worked: days,
                });
            }
        }
    }

    let mut summaries: Vec<PairSummary> = accumulated
        .into_iter()
        .map(|(pair, (total_days, overlaps))| PairSummary {
            employee1_id: pair.employee1_id,
            employee2_id: pair.employee2_id,
            total_days,
            overlaps,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total_days
            .cmp(&a.total_days)
            .then(a.employee1_id.cmp(&b.employee1_id))
            .then(a.employee2_id.cmp(&b.employee2_id))
    });

    summaries
}

/// The top-ranked pair of [`compute_all_pairs`], if any pair overlaps.
pub fn find_longest_pair(assignments: &[Assignment]) -> Option<PairSummary> {
    compute_all_pairs(assignments).into_iter().next()
}
