//! Latent artifact path derivation.
//!
//! An image path ends in `.nii` or `.nii.gz` (matched case-insensitively);
//! the latent path replaces that trailing marker with `_latent.npz`:
//!
//! ```text
//! image : ADNI_002_S_0295_MR_MPR__GradWarp__B1_Correction__N3_Br_20070319113435616_S13408_I45107.nii
//! latent: ADNI_002_S_0295_MR_MPR__GradWarp__B1_Correction__N3_Br_20070319113435616_S13408_I45107_latent.npz
//! ```

use crate::error::{ManifestError, Result};

/// Manifest column holding the source image paths.
pub const IMAGE_PATH_COLUMN: &str = "image_path";

/// Manifest column holding the derived latent artifact paths.
pub const LATENT_PATH_COLUMN: &str = "latent_path";

/// Suffix that replaces the recognized image extension.
pub const LATENT_SUFFIX: &str = "_latent.npz";

/// Recognized image extensions, longest first so `.nii.gz` wins over `.nii`.
const IMAGE_EXTENSIONS: [&str; 2] = [".nii.gz", ".nii"];

/// Derive the latent artifact path for an image path.
///
/// Replaces the trailing `.nii` or `.nii.gz` (case-insensitive) with
/// [`LATENT_SUFFIX`]; everything before the extension is preserved verbatim.
///
/// # Errors
///
/// Returns [`ManifestError::UnrecognizedExtension`] when `image_path` does
/// not end with a recognized extension.
pub fn derive_latent_path(image_path: &str) -> Result<String> {
    let stem =
        stem_without_extension(image_path).ok_or_else(|| ManifestError::UnrecognizedExtension {
            path: image_path.to_string(),
        })?;
    Ok(format!("{stem}{LATENT_SUFFIX}"))
}

/// The portion of `path` before its recognized extension, if any.
fn stem_without_extension(path: &str) -> Option<&str> {
    let lower = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find_map(|ext| lower.strip_suffix(ext).map(|stem| &path[..stem.len()]))
}
