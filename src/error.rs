//! Error types for overlap-checker

use thiserror::Error;

use crate::infrastructure::csv_loader::CsvLoaderError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvLoader(#[from] CsvLoaderError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not a CSV file: {0}")]
    NotCsv(String),

    #[error("No valid assignment records found in the CSV file")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
