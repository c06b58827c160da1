pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::ConfigProvider;
    use crate::domain::model::{default_model_names, DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_extension, validate_model_names, validate_path, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "model-fixtures")]
    #[command(about = "Writes placeholder TensorFlow Lite model fixtures")]
    pub struct CliConfig {
        /// TOML file describing output directory, extension and models
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, default_value = DEFAULT_OUTPUT_DIR, conflicts_with = "config")]
        pub output_dir: String,

        #[arg(long, default_value = DEFAULT_EXTENSION, conflicts_with = "config")]
        pub extension: String,

        /// Comma-separated model names, written in the given order
        #[arg(
            long,
            value_delimiter = ',',
            default_values_t = default_model_names(),
            conflicts_with = "config"
        )]
        pub models: Vec<String>,

        /// Stop at the first failed target instead of attempting all of them
        #[arg(long)]
        pub fail_fast: bool,

        /// Show the planned targets without writing anything
        #[arg(long)]
        pub dry_run: bool,

        /// Compare existing files against the fixture instead of writing
        #[arg(long)]
        pub verify: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        pub json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn output_dir(&self) -> &str {
            &self.output_dir
        }

        fn extension(&self) -> &str {
            &self.extension
        }

        fn model_names(&self) -> Vec<String> {
            self.models.clone()
        }

        fn fail_fast(&self) -> bool {
            self.fail_fast
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("output_dir", &self.output_dir)?;
            validate_extension("extension", &self.extension)?;
            validate_model_names("models", &self.models)
        }
    }

}
