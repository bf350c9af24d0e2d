use thiserror::Error;

#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Invalid people input: {message}")]
    StructuralInvalid { message: String },

    #[error("Reference data request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Storage,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BirthdayError {
    pub fn structural(message: impl Into<String>) -> Self {
        Self::StructuralInvalid {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StructuralInvalid { .. } => ErrorCategory::Input,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入錯誤只會讓畫面變成空清單
            Self::StructuralInvalid { .. } => ErrorSeverity::Low,
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::StructuralInvalid { .. } => "Invalid JSON".to_string(),
            Self::ApiError(_) => "Could not fetch the birthday list".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Could not render the weekday cards".to_string()
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Provide a JSON array of {\"name\", \"birthday\"} objects using YYYY-MM-DD, MM/DD/YYYY or DD-MM-YYYY dates"
            }
            ErrorCategory::Network => "Check the source URL or load the list from a local file",
            ErrorCategory::Storage => "Check that the path exists and is readable/writable",
            ErrorCategory::Output => "Try another output format",
            ErrorCategory::Configuration => "Run with --help to see the accepted options",
        }
    }
}

pub type Result<T> = std::result::Result<T, BirthdayError>;
