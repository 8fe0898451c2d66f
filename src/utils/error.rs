use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecordError { line: u64, reason: String },

    #[error("Dog breed '{breed}' was not found in the data")]
    UnknownBreedError { breed: String },

    #[error("Input closed before a breed was selected")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::CsvError(_) | StatsError::MalformedRecordError { .. } => {
                ErrorCategory::Data
            }
            StatsError::ConfigValidationError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StatsError::UnknownBreedError { .. } | StatsError::InputClosed => {
                ErrorCategory::Input
            }
            StatsError::IoError(_) | StatsError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者中斷輸入，不算失敗
            StatsError::InputClosed => ErrorSeverity::Low,
            StatsError::UnknownBreedError { .. } => ErrorSeverity::Medium,
            StatsError::CsvError(_)
            | StatsError::MalformedRecordError { .. }
            | StatsError::ConfigValidationError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            StatsError::IoError(_) | StatsError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatsError::CsvError(_) => {
                "Check that the data file is a CSV export with Breed, Year, Month and Total columns"
            }
            StatsError::MalformedRecordError { .. } => {
                "Fix the reported row in the data file and run again"
            }
            StatsError::ConfigValidationError { .. }
            | StatsError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and the TOML configuration file"
            }
            StatsError::UnknownBreedError { .. } => {
                "Run with --list-breeds to see the breeds present in the data"
            }
            StatsError::InputClosed => "Enter a breed name when prompted",
            StatsError::IoError(_) => "Make sure the data file exists and is readable",
            StatsError::SerializationError(_) => "Try the text output format instead",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::CsvError(_) | StatsError::MalformedRecordError { .. } => {
                format!("The registration data could not be loaded: {}", self)
            }
            StatsError::IoError(e) => format!("A file could not be accessed: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
