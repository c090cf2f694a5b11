use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("OMDb lookup for {imdb_id} failed: {message}")]
    UpstreamError { imdb_id: String, message: String },

    #[error("No movie found for '{query}'")]
    NotFound { query: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ApiError(_) | CatalogError::UpstreamError { .. } => {
                ErrorCategory::Network
            }
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::CsvError(_) | CatalogError::SerializationError(_) => ErrorCategory::Data,
            CatalogError::IoError(_) => ErrorCategory::System,
            CatalogError::NotFound { .. } | CatalogError::InvalidInput { .. } => {
                ErrorCategory::User
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::NotFound { .. } | CatalogError::InvalidInput { .. } => {
                ErrorSeverity::Low
            }
            CatalogError::ApiError(_) | CatalogError::UpstreamError { .. } => {
                ErrorSeverity::Medium
            }
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::CsvError(_)
            | CatalogError::SerializationError(_) => ErrorSeverity::High,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ApiError(_) => {
                "Could not reach the movie database. Check your network connection.".to_string()
            }
            CatalogError::UpstreamError { imdb_id, message } => {
                format!("The movie database rejected {}: {}", imdb_id, message)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CatalogError::ConfigValidationError { field, message } => {
                format!("Could not read '{}': {}", field, message)
            }
            CatalogError::NotFound { query } => format!("No movie matches '{}'", query),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check connectivity and that your OMDb API key is valid",
            ErrorCategory::Configuration => {
                "Check the catalog file, or set OMDB_API_KEY in the environment"
            }
            ErrorCategory::Data => "Check the catalog entries and the output format",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::User => "Run `list` to see the available movies and ids",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
