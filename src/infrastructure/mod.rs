//! Infrastructure layer
//!
//! Concrete input adapters feeding the domain layer, currently the CSV
//! assignment loader.

pub mod csv_loader;
