use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Storage,
    Report,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::ApiError(_) => ErrorCategory::Network,
            FetchError::HttpStatus { .. } => ErrorCategory::Http,
            FetchError::IoError(_) => ErrorCategory::Storage,
            FetchError::SerializationError(_) => ErrorCategory::Report,
            FetchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Http => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Report => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network | ErrorCategory::Http => 2,
            ErrorCategory::Storage => 3,
            ErrorCategory::Report => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::ApiError(e) if e.is_timeout() => {
                "The download timed out before the server finished responding".to_string()
            }
            FetchError::ApiError(e) if e.is_connect() => {
                "Could not connect to the data server".to_string()
            }
            FetchError::ApiError(_) => "The download failed at the network level".to_string(),
            FetchError::HttpStatus { url, status } => {
                format!("{} answered with HTTP {}", url, status)
            }
            FetchError::IoError(e) => format!("Could not write the output file: {}", e),
            FetchError::SerializationError(e) => format!("Could not render the report: {}", e),
            FetchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check your connection and that the endpoint is reachable, then run again"
            }
            ErrorCategory::Http => {
                "The endpoint may be down; try again later or drop --strict-status to keep the body"
            }
            ErrorCategory::Storage => {
                "Check that the output directory exists, is writable and has free space"
            }
            ErrorCategory::Report => {
                "The files were saved; rerun without --json to get a plain summary"
            }
            ErrorCategory::Configuration => "Run with --help to see the accepted options",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
