//! Domain services
//!
//! This module contains business logic services for the domain layer.

pub mod overlap;

pub use overlap::{compute_all_pairs, find_longest_pair, overlap_days};
