//! Manifest I/O: CSV loading and persistence.
//!
//! - **csv**: reading and writing manifest CSV files
//! - **error**: ingestion error taxonomy

pub mod csv;
pub mod error;

pub use csv::{read_manifest, validate_encoding, write_manifest};
pub use error::{IngestError, Result};
