//! Error types for the Retrosheet ETL CLI

use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetroError>;

#[derive(Error, Debug)]
pub enum RetroError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database path not provided and {env_var} environment variable not set")]
    MissingDbPath { env_var: String },

    #[error("invalid year: {value}")]
    InvalidYear { value: String },

    #[error("no {year}*.EV* event files found in {dir}")]
    NoEventFiles { year: u16, dir: String },

    #[error("converter `{program}` not found on PATH")]
    ConverterNotFound { program: String },

    #[error("converter `{program}` failed with {status}")]
    ConverterFailed { program: String, status: ExitStatus },

    #[error("converter `{program}` did not finish within {secs}s")]
    ConverterTimeout { program: String, secs: u64 },

    #[error("invalid stat spec `{spec}` (expected name=SQL-expression)")]
    InvalidStatSpec { spec: String },

    #[error("`{name}` is not a valid SQL identifier")]
    InvalidIdentifier { name: String },
}
