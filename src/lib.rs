//! Overlap Checker Library
//!
//! Finds the pair of employees who worked together the longest across
//! shared projects, from CSV assignment records.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod output;
