use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee's tenure on one project.
///
/// Dates are always concrete by the time a record reaches the engine;
/// open-ended assignments are closed by the loader. `date_from <= date_to`
/// is not guaranteed — an inverted range simply overlaps nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee_id: u64,
    pub project_id: u64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl Assignment {
    pub fn new(
        employee_id: u64,
        project_id: u64,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            project_id,
            date_from,
            date_to,
        }
    }
}
