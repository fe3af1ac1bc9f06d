//! Manifest CSV persistence.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Write a manifest DataFrame as CSV, header included.
///
/// Null cells are written as empty fields, matching how blanks were read.
pub fn write_manifest(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(path = %path.display(), rows = df.height(), "manifest written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::read_manifest;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.csv");
        let mut df = DataFrame::new(vec![
            Series::new("image_path".into(), vec!["a.nii", "b.nii"]).into_column(),
            Series::new("latent_path".into(), vec!["a_latent.npz", "b_latent.npz"]).into_column(),
        ])
        .unwrap();

        write_manifest(&mut df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("image_path,latent_path\n"));
        assert!(written.contains("a.nii,a_latent.npz"));
    }

    #[test]
    fn null_cells_round_trip_as_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.csv");
        let mut df = DataFrame::new(vec![
            Series::new("image_path".into(), vec![Some("a.nii"), Some("b.nii")]).into_column(),
            Series::new("latent_path".into(), vec![Some("a_latent.npz"), None]).into_column(),
        ])
        .unwrap();

        write_manifest(&mut df, &path).unwrap();
        let reread = read_manifest(&path).unwrap();

        assert_eq!(
            reread.column("latent_path").unwrap().str().unwrap().get(1),
            None
        );
    }
}
