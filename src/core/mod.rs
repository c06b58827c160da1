pub mod engine;
pub mod fixture;

pub use crate::domain::model::{FixtureTarget, RunSummary, VerifyReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
