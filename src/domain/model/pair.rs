//! Canonical employee pair key and derived overlap records

use serde::{Deserialize, Serialize};

/// Unordered pair of distinct employee ids, canonicalized smaller-first.
///
/// `EmployeePair::new(a, b)` and `EmployeePair::new(b, a)` produce the same
/// value, so the pair works directly as an aggregation key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EmployeePair {
    pub employee1_id: u64,
    pub employee2_id: u64,
}

impl EmployeePair {
    pub fn new(a: u64, b: u64) -> Self {
        if a <= b {
            Self {
                employee1_id: a,
                employee2_id: b,
            }
        } else {
            Self {
                employee1_id: b,
                employee2_id: a,
            }
        }
    }
}

/// Overlap of one pair on one shared project, in whole days.
///
/// Only emitted for positive overlap, so `days_worked >= 1`. Employee ids
/// follow the same canonical order as [`EmployeePair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOverlap {
    pub employee1_id: u64,
    pub employee2_id: u64,
    pub project_id: u64,
    pub days_worked: i64,
}

/// Aggregated result for one pair across all shared projects.
///
/// `total_days` is the sum of `days_worked` over `overlaps`; the overlap
/// list keeps discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub employee1_id: u64,
    pub employee2_id: u64,
    pub total_days: i64,
    pub overlaps: Vec<ProjectOverlap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pair_canonical_order() {
        let pair = EmployeePair::new(218, 143);
        assert_eq!(pair.employee1_id, 143);
        assert_eq!(pair.employee2_id, 218);
        assert_eq!(pair, EmployeePair::new(143, 218));
    }

    #[test]
    fn test_pair_as_map_key() {
        let mut totals: HashMap<EmployeePair, i64> = HashMap::new();
        *totals.entry(EmployeePair::new(143, 218)).or_default() += 10;
        *totals.entry(EmployeePair::new(218, 143)).or_default() += 5;
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&EmployeePair::new(143, 218)], 15);
    }
}
