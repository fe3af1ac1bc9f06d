//! Error types for manifest ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or persisting a manifest.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Manifest file not found.
    #[error("manifest not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the manifest file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to serialize CSV with Polars.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// Manifest file is empty.
    #[error("manifest is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// File encoding is not supported (UTF-8 only).
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
