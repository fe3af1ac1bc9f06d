//! Load, fill, and persist pipeline for the latent manifest filler.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use manifest_core::fill_latent_paths;
use manifest_ingest::{read_manifest, validate_encoding, write_manifest};

/// Outcome of a fill run, for the CLI confirmation line.
#[derive(Debug, Clone)]
pub struct FillSummary {
    /// Destination the manifest was written to.
    pub output: PathBuf,
    /// Total rows in the manifest.
    pub rows: usize,
    /// Rows filled in this run.
    pub filled: usize,
}

/// Fill the latent path column of the manifest at `input`, writing the
/// result to `output` (the input path itself when `None`).
///
/// All-or-nothing: the source column check and every row derivation happen
/// before the destination is touched, so a failing run writes nothing.
pub fn run_fill(input: &Path, output: Option<&Path>) -> Result<FillSummary> {
    let destination = output.unwrap_or(input).to_path_buf();
    debug!(
        input = %input.display(),
        output = %destination.display(),
        "starting fill run"
    );

    validate_encoding(input)?;
    let mut df = read_manifest(input)?;

    let report = fill_latent_paths(&mut df)?;
    write_manifest(&mut df, &destination)?;

    info!(
        rows = report.rows,
        filled = report.filled,
        column_added = report.column_added,
        output = %destination.display(),
        "manifest filled"
    );

    Ok(FillSummary {
        output: destination,
        rows: report.rows,
        filled: report.filled,
    })
}
