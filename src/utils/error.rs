use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaserError {
    #[error("Invalid UTF-8 input: malformed sequence at byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error: no conversion mode given")]
    MissingModeError,

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Configuration,
    Internal,
}

impl CaserError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CaserError::InvalidEncoding { .. } => ErrorCategory::Input,
            CaserError::IoError(_) => ErrorCategory::Io,
            CaserError::ConfigError { .. }
            | CaserError::MissingModeError
            | CaserError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CaserError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CaserError::InvalidEncoding { valid_up_to } => format!(
                "Input is not valid UTF-8 (first bad byte at offset {})",
                valid_up_to
            ),
            CaserError::IoError(e) => format!("Could not read or write text: {}", e),
            CaserError::SerializationError(e) => format!("Could not build report: {}", e),
            CaserError::ConfigError { message } => format!("Configuration problem: {}", message),
            CaserError::MissingModeError => {
                "Configuration problem: no conversion mode given".to_string()
            }
            CaserError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CaserError::InvalidEncoding { .. } => {
                "Drop --strict to replace malformed bytes with U+FFFD, or re-encode the input as UTF-8"
            }
            CaserError::IoError(_) => "Check that stdin and stdout are open and writable",
            CaserError::SerializationError(_) => "Retry without --json",
            CaserError::ConfigError { .. } => "Check the configuration file syntax and values",
            CaserError::MissingModeError => {
                "Pass a mode (upper, lower, invert) or set caser.default_mode in the config file"
            }
            CaserError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Io | ErrorCategory::Internal => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CaserError>;
