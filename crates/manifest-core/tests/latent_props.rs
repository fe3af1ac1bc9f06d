//! Property tests for latent path derivation.

use manifest_core::{LATENT_SUFFIX, derive_latent_path};
use proptest::prelude::*;

fn recognized_extension() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![".nii", ".NII", ".Nii", ".nii.gz", ".NII.GZ", ".nii.GZ"])
}

proptest! {
    #[test]
    fn recognized_extension_swaps_only_the_trailing_marker(
        stem in "[A-Za-z0-9_./-]{0,60}",
        ext in recognized_extension(),
    ) {
        let path = format!("{stem}{ext}");
        let latent = derive_latent_path(&path).unwrap();
        prop_assert_eq!(latent, format!("{stem}{LATENT_SUFFIX}"));
    }

    #[test]
    fn derivation_is_a_pure_function_of_its_input(stem in "\\PC{0,40}") {
        let path = format!("{stem}.nii");
        let first = derive_latent_path(&path).unwrap();
        let second = derive_latent_path(&path).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with(stem.as_str()));
        prop_assert!(first.ends_with(LATENT_SUFFIX));
    }

    #[test]
    fn unrecognized_extensions_are_rejected(path in "[A-Za-z0-9_./-]{0,60}") {
        let lower = path.to_ascii_lowercase();
        prop_assume!(!lower.ends_with(".nii") && !lower.ends_with(".nii.gz"));
        prop_assert!(derive_latent_path(&path).is_err());
    }
}
