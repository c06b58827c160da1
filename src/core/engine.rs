use crate::core::fixture::{FILE_IDENTIFIER, TFLITE_FIXTURE};
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{
    FixtureTarget, RunSummary, TargetFailure, VerifyEntry, VerifyReport, VerifyStatus,
    WriteOutcome,
};
use crate::utils::error::{FixtureError, Result};
use chrono::Utc;

/// Resolves the configured model names into targets, preserving their order.
pub fn targets_from_config<C: ConfigProvider + ?Sized>(config: &C) -> Vec<FixtureTarget> {
    config
        .model_names()
        .iter()
        .map(|name| FixtureTarget::new(config.output_dir(), name, config.extension()))
        .collect()
}

pub struct FixtureEngine<S: Storage> {
    storage: S,
    targets: Vec<FixtureTarget>,
    fail_fast: bool,
}

impl<S: Storage> FixtureEngine<S> {
    pub fn new(storage: S, targets: Vec<FixtureTarget>, fail_fast: bool) -> Self {
        Self {
            storage,
            targets,
            fail_fast,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(storage: S, config: &C) -> Self {
        Self::new(storage, targets_from_config(config), config.fail_fast())
    }

    pub fn targets(&self) -> &[FixtureTarget] {
        &self.targets
    }

    /// Writes the fixture to every target in order.
    ///
    /// With `fail_fast` the first failure is returned as an error. Otherwise
    /// every target is attempted and failures are collected in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!(
            "Writing {} fixture(s), identifier {:?}, {} bytes each",
            self.targets.len(),
            String::from_utf8_lossy(&FILE_IDENTIFIER),
            TFLITE_FIXTURE.len()
        );

        let mut written = Vec::with_capacity(self.targets.len());
        let mut failures = Vec::new();

        for target in &self.targets {
            match self
                .storage
                .write_file(&target.file_name, &TFLITE_FIXTURE)
                .await
            {
                Ok(bytes_written) => {
                    tracing::info!(
                        "✅ Fixture written: {} ({} bytes)",
                        target.path.display(),
                        bytes_written
                    );
                    written.push(WriteOutcome {
                        name: target.name.clone(),
                        path: target.path.clone(),
                        bytes_written,
                    });
                }
                Err(e) if self.fail_fast => {
                    tracing::error!("❌ {}: {}", target.name, e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::error!("❌ {}: {}", target.name, e);
                    failures.push(TargetFailure {
                        name: target.name.clone(),
                        path: target.path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(RunSummary {
            written,
            failures,
            finished_at: Utc::now(),
        })
    }

    /// Compares every target on disk against the fixture without writing.
    pub async fn verify(&self) -> Result<VerifyReport> {
        let mut entries = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            let status = match self.storage.read_file(&target.file_name).await {
                Ok(data) if data == TFLITE_FIXTURE => VerifyStatus::Matches,
                Ok(data) => VerifyStatus::Differs {
                    actual_len: data.len(),
                },
                Err(FixtureError::FileRead { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    VerifyStatus::Missing
                }
                Err(e) => return Err(e),
            };

            tracing::debug!("{}: {:?}", target.path.display(), status);
            entries.push(VerifyEntry {
                name: target.name.clone(),
                path: target.path.clone(),
                status,
            });
        }

        Ok(VerifyReport {
            entries,
            checked_at: Utc::now(),
        })
    }
}
