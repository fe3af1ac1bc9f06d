//! Core logic for filling latent artifact paths in a neuroimaging manifest.
//!
//! - **latent**: derivation of latent artifact paths from image paths
//! - **fill**: mask-and-fill update of the latent path column
//! - **error**: error taxonomy for manifest processing

pub mod error;
pub mod fill;
pub mod latent;

pub use error::{ManifestError, Result};
pub use fill::{FillReport, fill_latent_paths};
pub use latent::{IMAGE_PATH_COLUMN, LATENT_PATH_COLUMN, LATENT_SUFFIX, derive_latent_path};
