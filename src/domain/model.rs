use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "assets/ml";
pub const DEFAULT_EXTENSION: &str = "tflite";
pub const DEFAULT_MODEL_NAMES: [&str; 3] =
    ["stock_prediction", "sales_prediction", "financial_prediction"];

pub fn default_model_names() -> Vec<String> {
    DEFAULT_MODEL_NAMES.iter().map(|name| name.to_string()).collect()
}

/// One output file: a logical model name and where its fixture lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureTarget {
    pub name: String,
    /// File name relative to the output directory, e.g. `stock_prediction.tflite`.
    pub file_name: String,
    /// Output directory joined with `file_name`, used for reporting.
    pub path: PathBuf,
}

impl FixtureTarget {
    pub fn new(output_dir: impl AsRef<Path>, name: &str, extension: &str) -> Self {
        let file_name = format!("{}.{}", name, extension);
        let path = output_dir.as_ref().join(&file_name);
        Self {
            name: name.to_string(),
            file_name,
            path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WriteOutcome {
    pub name: String,
    pub path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetFailure {
    pub name: String,
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub written: Vec<WriteOutcome>,
    pub failures: Vec<TargetFailure>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|w| w.bytes_written).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerifyStatus {
    Matches,
    Missing,
    Differs { actual_len: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: VerifyStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub entries: Vec<VerifyEntry>,
    pub checked_at: DateTime<Utc>,
}

impl VerifyReport {
    pub fn all_match(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.status == VerifyStatus::Matches)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &VerifyEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.status != VerifyStatus::Matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_derivation() {
        let target = FixtureTarget::new("assets/ml", "stock_prediction", "tflite");
        assert_eq!(target.file_name, "stock_prediction.tflite");
        assert_eq!(target.path, PathBuf::from("assets/ml/stock_prediction.tflite"));
    }

    #[test]
    fn test_default_model_order_is_stable() {
        assert_eq!(
            default_model_names(),
            vec!["stock_prediction", "sales_prediction", "financial_prediction"]
        );
    }

    #[test]
    fn test_run_summary_success_and_totals() {
        let mut summary = RunSummary {
            written: vec![
                WriteOutcome {
                    name: "a".to_string(),
                    path: PathBuf::from("a.tflite"),
                    bytes_written: 240,
                },
                WriteOutcome {
                    name: "b".to_string(),
                    path: PathBuf::from("b.tflite"),
                    bytes_written: 240,
                },
            ],
            failures: vec![],
            finished_at: Utc::now(),
        };
        assert!(summary.is_success());
        assert_eq!(summary.total_bytes(), 480);

        summary.failures.push(TargetFailure {
            name: "c".to_string(),
            path: PathBuf::from("c.tflite"),
            error: "disk full".to_string(),
        });
        assert!(!summary.is_success());
    }

    #[test]
    fn test_verify_status_serializes_with_tag() {
        let entry = VerifyEntry {
            name: "stock_prediction".to_string(),
            path: PathBuf::from("assets/ml/stock_prediction.tflite"),
            status: VerifyStatus::Differs { actual_len: 12 },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "differs");
        assert_eq!(json["actual_len"], 12);
    }
}
