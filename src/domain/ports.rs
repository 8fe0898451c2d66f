use crate::utils::error::Result;
use std::ops::RangeInclusive;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn year_range(&self) -> RangeInclusive<i32>;
    fn title(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    /// Breed supplied up front; when `None` the user is prompted.
    fn preset_breed(&self) -> Option<&str>;
}
