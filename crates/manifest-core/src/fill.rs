//! Mask-and-fill update of the latent path column.

use polars::prelude::*;
use tracing::debug;

use crate::error::{ManifestError, Result};
use crate::latent::{IMAGE_PATH_COLUMN, LATENT_PATH_COLUMN, derive_latent_path};

/// Outcome of a fill pass, for logging and the CLI summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    /// Total rows in the manifest.
    pub rows: usize,
    /// Rows whose latent path was derived in this pass.
    pub filled: usize,
    /// Whether the latent path column had to be created.
    pub column_added: bool,
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|col| col.as_str() == name)
}

/// Fill blank latent path cells from the image path column.
///
/// Creates the latent path column when absent, then rewrites it so that rows
/// whose value was null or whitespace-only carry the derived path while every
/// other row keeps its existing value verbatim, even when that value is
/// inconsistent with the image path.
///
/// The rebuilt column is only attached once every selected row has derived
/// successfully, so the frame is unchanged when an error is returned.
///
/// # Errors
///
/// - [`ManifestError::MissingColumn`] when the image path column is absent.
/// - [`ManifestError::UnrecognizedExtension`] when a selected row's image
///   path does not end with a recognized extension.
pub fn fill_latent_paths(df: &mut DataFrame) -> Result<FillReport> {
    let height = df.height();

    if !has_column(df, IMAGE_PATH_COLUMN) {
        return Err(ManifestError::MissingColumn {
            column: IMAGE_PATH_COLUMN.to_string(),
        });
    }
    let column_added = !has_column(df, LATENT_PATH_COLUMN);

    let image_ca = df.column(IMAGE_PATH_COLUMN)?.str()?;
    let latent_ca = if column_added {
        None
    } else {
        Some(df.column(LATENT_PATH_COLUMN)?.str()?)
    };

    let mut builder = StringChunkedBuilder::new(LATENT_PATH_COLUMN.into(), height);
    let mut filled = 0usize;
    for idx in 0..height {
        match latent_ca.and_then(|ca| ca.get(idx)) {
            Some(existing) if !existing.trim().is_empty() => builder.append_value(existing),
            _ => {
                let image = image_ca.get(idx).unwrap_or("");
                builder.append_value(derive_latent_path(image)?);
                filled += 1;
            }
        }
    }

    if filled > 0 || column_added {
        let series = builder.finish().into_series();
        df.with_column(series)?;
    }
    debug!(rows = height, filled, column_added, "latent fill pass complete");

    Ok(FillReport {
        rows: height,
        filled,
        column_added,
    })
}
