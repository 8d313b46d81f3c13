//! Domain model value types

pub mod assignment;
pub mod pair;

pub use assignment::Assignment;
pub use pair::{EmployeePair, PairSummary, ProjectOverlap};
