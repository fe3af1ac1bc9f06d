//! Error types for manifest processing.

use thiserror::Error;

/// Errors that can occur while deriving latent paths or filling the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Required column absent from the loaded manifest.
    #[error("column '{column}' not found in manifest")]
    MissingColumn { column: String },

    /// Image path does not end with a recognized extension.
    #[error("unrecognized image extension: {path:?}")]
    UnrecognizedExtension { path: String },

    /// Failed DataFrame operation.
    #[error("dataframe operation failed: {0}")]
    DataFrame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
