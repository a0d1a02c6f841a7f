use std::path::Path;
use std::process::{Command, Output};

const CONFIG_VARS: &[&str] = &[
    "OCR_IMAGE_PATH",
    "OCR_LANGUAGES",
    "OCR_DATA_PATH",
    "OCR_PREPROCESS",
    "OCR_BINARIZE",
    "OCR_BINARIZE_THRESHOLD",
    "OCR_STRETCH_CONTRAST",
    "OCR_MIN_LINE_HEIGHT",
    "OCR_DEBUG_IMAGE",
    "LOG_FORMAT",
    "RUST_LOG",
];

fn run_ocrscan(work_dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ocrscan"));
    cmd.args(args).current_dir(work_dir);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to run ocrscan binary")
}

fn assert_failed_scan(output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(
        !stdout.contains("Detected Text"),
        "No report expected on failure: {stdout}"
    );
    let error_lines: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with("Error: "))
        .collect();
    assert_eq!(error_lines.len(), 1, "stderr: {stderr}");
    assert!(
        error_lines[0].starts_with("Error: Unable to"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_unknown_language_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_ocrscan(dir.path(), &["--lang", "zz_no_such_language"]);

    assert_failed_scan(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Unable to initialize Tesseract"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_missing_image_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ktp.jpeg");

    let output = run_ocrscan(
        dir.path(),
        &["--lang", "eng", "--image", missing.to_str().unwrap()],
    );

    // Without the eng pack installed the engine fails first; either way the
    // process must fail the same way.
    assert_failed_scan(&output);
}

#[test]
fn test_default_run_without_image_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_ocrscan(dir.path(), &[]);

    assert_failed_scan(&output);
}
