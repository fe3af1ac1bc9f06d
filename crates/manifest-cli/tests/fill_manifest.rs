//! End-to-end tests for the fill pipeline.

use std::fs;
use std::path::PathBuf;

use manifest_cli::pipeline::run_fill;
use tempfile::TempDir;

fn write_manifest_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn fills_manifest_in_place_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_manifest_file(
        &dir,
        "dataset.csv",
        "image_path\nscan_I45107.nii\nscan_I45108.nii.gz\n",
    );

    let summary = run_fill(&input, None).unwrap();

    assert_eq!(summary.output, input);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.filled, 2);
    let written = fs::read_to_string(&input).unwrap();
    assert!(written.starts_with("image_path,latent_path\n"));
    assert!(written.contains("scan_I45107.nii,scan_I45107_latent.npz"));
    assert!(written.contains("scan_I45108.nii.gz,scan_I45108_latent.npz"));
}

#[test]
fn explicit_output_leaves_input_untouched() {
    let dir = TempDir::new().unwrap();
    let content = "image_path\nscan.nii\n";
    let input = write_manifest_file(&dir, "dataset.csv", content);
    let output = dir.path().join("dataset_filled.csv");

    let summary = run_fill(&input, Some(output.as_path())).unwrap();

    assert_eq!(summary.output, output);
    assert_eq!(fs::read_to_string(&input).unwrap(), content);
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("scan.nii,scan_latent.npz"));
}

#[test]
fn populated_rows_are_preserved() {
    let dir = TempDir::new().unwrap();
    let input = write_manifest_file(
        &dir,
        "dataset.csv",
        "image_path,latent_path\na.nii,custom_location.npz\nb.nii,\n",
    );

    let summary = run_fill(&input, None).unwrap();

    assert_eq!(summary.filled, 1);
    let written = fs::read_to_string(&input).unwrap();
    assert!(written.contains("a.nii,custom_location.npz"));
    assert!(written.contains("b.nii,b_latent.npz"));
}

#[test]
fn missing_source_column_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_manifest_file(&dir, "dataset.csv", "subject_id\n002_S_0295\n");
    let output = dir.path().join("dataset_filled.csv");

    let error = run_fill(&input, Some(output.as_path())).unwrap_err();

    assert!(error.to_string().contains("image_path"));
    assert!(!output.exists());
}

#[test]
fn malformed_image_path_aborts_without_touching_the_manifest() {
    let dir = TempDir::new().unwrap();
    let content = "image_path,latent_path\na.nii,\nb.dcm,\n";
    let input = write_manifest_file(&dir, "dataset.csv", content);

    let error = run_fill(&input, None).unwrap_err();

    assert!(error.to_string().contains("unrecognized image extension"));
    assert_eq!(fs::read_to_string(&input).unwrap(), content);
}
