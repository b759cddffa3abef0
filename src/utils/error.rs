use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Document error: {message}")]
    DocumentError { message: String },
}

impl BaseError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BaseError::IoError(e) => format!("File operation failed: {}", e),
            BaseError::SerializationError(e) => format!("Could not read JSON input: {}", e),
            BaseError::ConfigValidationError { field, .. } => {
                format!("Configuration file is invalid ({})", field)
            }
            BaseError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            BaseError::DocumentError { message } => format!("Could not write document: {}", message),
        }
    }

    /// 建議的修復方式
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BaseError::IoError(_) => "Check that the path exists and is readable/writable",
            BaseError::SerializationError(_) => "Make sure the input file contains valid JSON",
            BaseError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            BaseError::InvalidConfigValueError { .. } => {
                "Adjust the reported value and try again"
            }
            BaseError::DocumentError { .. } => "Check the frames directory and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, BaseError>;
