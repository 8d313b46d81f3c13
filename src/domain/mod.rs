//! Domain module containing core business types and services

pub mod model;
pub mod service;

pub use model::*;
