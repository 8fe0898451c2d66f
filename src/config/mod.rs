pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::domain::model::DEFAULT_YEAR_RANGE;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use toml_config::TomlConfig;

pub const DEFAULT_DATA_FILE: &str = "CalgaryDogBreeds.csv";
pub const DEFAULT_TITLE: &str = "ENSF 692 Dogs of Calgary";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "breed-stats")]
#[command(about = "Registration statistics for a dog breed")]
pub struct CliConfig {
    #[arg(long, help = "CSV export of the breed registration data")]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Report on this breed instead of prompting")]
    pub breed: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Print the known breeds and exit")]
    pub list_breeds: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings after merging defaults, the TOML file and the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub data_path: String,
    pub start_year: i32,
    pub end_year: i32,
    pub title: String,
    pub format: OutputFormat,
    pub breed: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_FILE.to_string(),
            start_year: *DEFAULT_YEAR_RANGE.start(),
            end_year: *DEFAULT_YEAR_RANGE.end(),
            title: DEFAULT_TITLE.to_string(),
            format: OutputFormat::Text,
            breed: None,
        }
    }
}

impl ReportConfig {
    pub fn with_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(path) = &file.data.path {
            self.data_path = path.clone();
        }
        if let Some(start_year) = file.report.start_year {
            self.start_year = start_year;
        }
        if let Some(end_year) = file.report.end_year {
            self.end_year = end_year;
        }
        if let Some(title) = &file.report.title {
            self.title = title.clone();
        }
        self
    }

    /// 命令列參數優先於 TOML 設定
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &cli.config {
            tracing::info!("Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            config = config.with_toml(&file);
        }

        if let Some(data_file) = &cli.data_file {
            config.data_path = data_file.clone();
        }
        config.format = cli.format;
        config.breed = cli.breed.clone();

        Ok(config)
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data.path", &self.data_path)?;
        validation::validate_file_extension("data.path", &self.data_path, &["csv"])?;
        validation::validate_non_empty_string("report.title", &self.title)?;
        validation::validate_range("report.start_year", self.start_year, 1900, 2100)?;
        validation::validate_range("report.end_year", self.end_year, 1900, 2100)?;

        if self.end_year.checked_sub(self.start_year) != Some(2) {
            return Err(StatsError::ConfigValidationError {
                field: "report.end_year".to_string(),
                message: format!(
                    "report must cover three consecutive years, got {}-{}",
                    self.start_year, self.end_year
                ),
            });
        }

        if let Some(breed) = &self.breed {
            validation::validate_non_empty_string("breed", breed)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ReportConfig {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn year_range(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn preset_breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.year_range(), 2021..=2023);
        assert_eq!(config.data_path(), DEFAULT_DATA_FILE);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let file = TomlConfig::from_toml_str(
            "[data]\npath = \"other.csv\"\n[report]\nstart_year = 2022\nend_year = 2024\n",
        )
        .unwrap();
        let config = ReportConfig::default().with_toml(&file);
        assert_eq!(config.data_path, "other.csv");
        assert_eq!(config.year_range(), 2022..=2024);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_year_range_must_span_three_years() {
        let config = ReportConfig {
            end_year: 2025,
            ..ReportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StatsError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_extreme_years_are_rejected_not_overflowed() {
        let file = TomlConfig::from_toml_str(
            "[report]\nstart_year = 2021\nend_year = -2147483648\n",
        )
        .unwrap();
        let config = ReportConfig::default().with_toml(&file);
        assert!(matches!(
            config.validate(),
            Err(StatsError::InvalidConfigValueError { field, .. }) if field == "report.end_year"
        ));

        let config = ReportConfig {
            start_year: i32::MIN,
            end_year: i32::MAX,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_data_file_must_be_csv() {
        let config = ReportConfig {
            data_path: "CalgaryDogBreeds.xlsx".to_string(),
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_preset_breed_rejected() {
        let config = ReportConfig {
            breed: Some("  ".to_string()),
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides() {
        use clap::Parser;

        let cli = CliConfig::parse_from([
            "breed-stats",
            "--data-file",
            "dogs.csv",
            "--breed",
            "poodle",
            "--format",
            "json",
        ]);
        let config = ReportConfig::from_cli(&cli).unwrap();
        assert_eq!(config.data_path, "dogs.csv");
        assert_eq!(config.preset_breed(), Some("poodle"));
        assert_eq!(config.output_format(), OutputFormat::Json);
    }
}
