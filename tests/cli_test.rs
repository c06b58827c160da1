use anyhow::Result;
use model_fixtures::TFLITE_FIXTURE;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MODEL_FILES: [&str; 3] = [
    "stock_prediction.tflite",
    "sales_prediction.tflite",
    "financial_prediction.tflite",
];

/// Runs the binary with `dir` as working directory, so the default
/// `assets/ml` lands inside it.
fn run_cli(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_model-fixtures"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_default_run_exits_zero_and_writes_fixtures() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(temp_dir.path(), &[])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for file in MODEL_FILES {
        assert!(stdout.contains(file), "stdout should list {file}: {stdout}");
        let data = std::fs::read(temp_dir.path().join("assets/ml").join(file))?;
        assert_eq!(data, TFLITE_FIXTURE);
    }
    Ok(())
}

#[test]
fn test_blocked_directory_exits_one_and_names_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("assets"), b"a file, not a directory")?;

    let output = run_cli(temp_dir.path(), &[])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("assets/ml"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_fail_fast_blocked_directory_exits_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("assets"), b"a file, not a directory")?;

    let output = run_cli(temp_dir.path(), &["--fail-fast"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("assets/ml"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_invalid_configuration_exits_one() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(temp_dir.path(), &["--models", "ok,../escape"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("assets").exists());
    Ok(())
}

#[test]
fn test_verify_exit_codes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("assets/ml");

    let output = run_cli(temp_dir.path(), &["--verify"])?;
    assert_eq!(output.status.code(), Some(4), "missing files are a mismatch");

    assert_eq!(run_cli(temp_dir.path(), &[])?.status.code(), Some(0));
    let output = run_cli(temp_dir.path(), &["--verify"])?;
    assert_eq!(output.status.code(), Some(0));

    std::fs::write(output_dir.join("sales_prediction.tflite"), b"tampered")?;
    let output = run_cli(temp_dir.path(), &["--verify"])?;
    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sales_prediction.tflite differs"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn test_verify_unreadable_target_exits_two() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // A directory in place of the fixture cannot be read as a file.
    std::fs::create_dir_all(temp_dir.path().join("assets/ml/stock_prediction.tflite"))?;

    let output = run_cli(temp_dir.path(), &["--verify"])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stock_prediction.tflite"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(temp_dir.path(), &["--dry-run"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!temp_dir.path().join("assets").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("assets/ml/financial_prediction.tflite"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn test_json_summary_is_parseable() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_cli(temp_dir.path(), &["--json"])?;

    assert_eq!(output.status.code(), Some(0));
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["written"].as_array().map(Vec::len), Some(3));
    assert_eq!(summary["failures"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn test_config_file_rejects_target_flags() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("c.toml"), "[[models]]\nname = \"only\"\n")?;

    let output = run_cli(
        temp_dir.path(),
        &["--config", "c.toml", "--output-dir", "other"],
    )?;
    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("other").exists());

    let output = run_cli(temp_dir.path(), &["--config", "c.toml"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("assets/ml/only.tflite").exists());
    Ok(())
}
