pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, ReportConfig};
pub use core::{engine::ReportEngine, Aggregator, RecordStore};
pub use utils::error::{Result, StatsError};
