use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid input for '{field}' (value: {value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Division undefined: {message}")]
    DivisionUndefined { message: String },

    #[error("Record format error: {message}")]
    RecordFormat { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}' (value: {value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Computation,
    Record,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        PlannerError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::InvalidInput { .. } => ErrorCategory::Input,
            PlannerError::DivisionUndefined { .. } => ErrorCategory::Computation,
            PlannerError::RecordFormat { .. } | PlannerError::SerializationError(_) => {
                ErrorCategory::Record
            }
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PlannerError::CsvError(_) | PlannerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Computation => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Record | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::InvalidInput { field, reason, .. } => {
                format!("The value given for {} is not usable: {}", field, reason)
            }
            PlannerError::DivisionUndefined { .. } => {
                "Cannot compute a GPA without any credits".to_string()
            }
            PlannerError::RecordFormat { .. } | PlannerError::SerializationError(_) => {
                "The academic record could not be read".to_string()
            }
            PlannerError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            PlannerError::CsvError(_) => "Failed to write the schedule CSV".to_string(),
            PlannerError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::InvalidInput { .. } => {
                "Check the record for negative credits, empty course codes or a GPA outside 0-4"
            }
            PlannerError::DivisionUndefined { .. } => "Enter at least one credit",
            PlannerError::RecordFormat { .. } | PlannerError::SerializationError(_) => {
                "Re-run the audit conversion and make sure it produced a single JSON object"
            }
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            PlannerError::CsvError(_) | PlannerError::IoError(_) => {
                "Make sure the record file exists and the output directory is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
