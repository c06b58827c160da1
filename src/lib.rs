pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    engine::FixtureEngine,
    fixture::{write_fixture, FIXTURE_LEN, TFLITE_FIXTURE},
};
pub use utils::error::{FixtureError, Result};
