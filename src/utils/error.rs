use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("exoplanet not found")]
    NotFound { id: String },

    #[error("invalid exoplanet type")]
    InvalidType { value: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
    Request,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidType { .. } | Self::Internal { .. } | Self::SerializationError(_) => {
                ErrorCategory::Internal
            }
            Self::BadRequest { .. } => ErrorCategory::Request,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
            Self::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound | ErrorCategory::Request => {
                ErrorSeverity::Low
            }
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            // 伺服器自身的失敗，或已儲存記錄的狀態損毀
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// HTTP status the transport adapter answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Request => 400,
            ErrorCategory::NotFound => 404,
            _ => 500,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        if let Self::InvalidType { .. } = self {
            return "The catalog holds a corrupted record; recreate it";
        }
        match self.category() {
            ErrorCategory::Validation => {
                "Correct the record fields and resubmit: distance 10..=1000, radius 0.1..=10, terrestrial mass 0.1..=10"
            }
            ErrorCategory::NotFound => "List the catalog to find a valid exoplanet id",
            ErrorCategory::Request => "Check the request method, path, query and JSON body",
            ErrorCategory::Internal => "Retry the request; report it if the failure persists",
            ErrorCategory::Config => "Check the configuration file against demos/catalog.toml",
            ErrorCategory::Io => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => format!("Invalid exoplanet: {}", message),
            Self::NotFound { id } => format!("No exoplanet with id '{}'", id),
            Self::InvalidType { value } => format!("Stored exoplanet has unknown type '{}'", value),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
