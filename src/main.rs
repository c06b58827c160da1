use anyhow::Context;
use clap::Parser;
use model_fixtures::core::ConfigProvider;
use model_fixtures::domain::model::{RunSummary, VerifyReport, VerifyStatus};
use model_fixtures::utils::error::{ErrorSeverity, FixtureError};
use model_fixtures::utils::{logger, validation::Validate};
use model_fixtures::{CliConfig, FixtureEngine, LocalStorage, TomlConfig, TFLITE_FIXTURE};

const EXIT_FAILED: i32 = 1;
const EXIT_VERIFY_MISMATCH: i32 = 4;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting model-fixtures");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let exit_code = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(EXIT_FAILED);
                }
            };
            config.policy.fail_fast |= args.fail_fast;
            execute(&config, &args).await?
        }
        None => execute(&args, &args).await?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn execute<C>(config: &C, args: &CliConfig) -> anyhow::Result<i32>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return Ok(EXIT_FAILED);
    }

    let storage = LocalStorage::new(config.output_dir());
    let engine = FixtureEngine::from_config(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        println!("📋 Planned fixtures ({} bytes each):", TFLITE_FIXTURE.len());
        for target in engine.targets() {
            println!("  {}", target.path.display());
        }
        return Ok(0);
    }

    if args.verify {
        return match engine.verify().await {
            Ok(report) => {
                print_verify_report(&report, args.json)?;
                Ok(if report.all_match() { 0 } else { EXIT_VERIFY_MISMATCH })
            }
            Err(e) => Ok(report_error(&e)),
        };
    }

    match engine.run().await {
        Ok(summary) => {
            print_run_summary(&summary, args.json)?;
            if summary.is_success() {
                tracing::info!("✅ All fixtures written");
                Ok(0)
            } else {
                tracing::error!("❌ {} fixture(s) failed", summary.failures.len());
                Ok(EXIT_FAILED)
            }
        }
        Err(e) => Ok(report_error(&e)),
    }
}

fn report_error(e: &FixtureError) -> i32 {
    tracing::error!(
        "❌ Fixture generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}: {}", e.user_friendly_message(), e);
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => EXIT_FAILED,
    }
}

fn print_run_summary(summary: &RunSummary, json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary).context("serializing run summary")?;
        println!("{}", out);
        return Ok(());
    }

    for written in &summary.written {
        println!(
            "✅ {} ({} bytes)",
            written.path.display(),
            written.bytes_written
        );
    }
    for failure in &summary.failures {
        eprintln!("❌ {}: {}", failure.path.display(), failure.error);
    }

    println!();
    println!(
        "📊 {} written, {} failed, {} bytes total",
        summary.written.len(),
        summary.failures.len(),
        summary.total_bytes()
    );
    if summary.is_success() {
        println!("🎉 All fixtures created. Replace them with trained models for production use.");
    }
    Ok(())
}

fn print_verify_report(report: &VerifyReport, json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report).context("serializing verify report")?;
        println!("{}", out);
        return Ok(());
    }

    for entry in &report.entries {
        match &entry.status {
            VerifyStatus::Matches => println!("✅ {}", entry.path.display()),
            VerifyStatus::Missing => println!("❌ {} is missing", entry.path.display()),
            VerifyStatus::Differs { actual_len } => println!(
                "❌ {} differs ({} bytes, expected {})",
                entry.path.display(),
                actual_len,
                TFLITE_FIXTURE.len()
            ),
        }
    }

    println!();
    println!(
        "📊 {} of {} fixture(s) match",
        report.entries.len() - report.mismatches().count(),
        report.entries.len()
    );
    Ok(())
}
