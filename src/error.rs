use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing API key. Set environment variable {env_var}.")]
    MissingApiKey { env_var: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // Specific HTTP status code errors
    #[error("API request unauthorized (401) (URL: {url})")]
    Unauthorized { url: String },

    #[error("API rate limit exceeded (429) (URL: {url})")]
    RateLimited { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API request failed ({status}): {message} (URL: {url})")]
    HttpStatus {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("Invalid {kind} record: {message}")]
    InvalidRecord { kind: &'static str, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    /// Create a missing API key error for the given environment variable
    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            env_var: env_var.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unauthorized (401) error
    pub fn unauthorized(url: impl Into<String>) -> Self {
        Self::Unauthorized { url: url.into() }
    }

    /// Create a rate limit (429) error
    pub fn rate_limited(url: impl Into<String>) -> Self {
        Self::RateLimited { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for any other non-2xx status
    pub fn http_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an invalid record error for a payload that lacks a usable id
    pub fn invalid_record(kind: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            message: message.into(),
        }
    }

    /// Create a date parsing error with context
    pub fn date_parse_error(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a catch-all error
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Maps a non-success HTTP status to its error kind.
    pub fn from_status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        match status {
            401 => Self::unauthorized(url),
            429 => Self::rate_limited(url),
            500..=599 => Self::server_error(status, reason, url),
            _ => Self::http_status(status, reason, url),
        }
    }

    /// Maps a transport-level reqwest failure to its error kind.
    pub fn from_transport(err: reqwest::Error, url: impl Into<String>) -> Self {
        if err.is_timeout() {
            Self::network_timeout(url)
        } else if err.is_connect() {
            Self::network_connection(url, err.to_string())
        } else {
            Self::ApiFetch(err)
        }
    }

    /// User-facing message for the error, suitable for the terminal.
    pub fn user_hint(&self) -> String {
        match self {
            AppError::MissingApiKey { env_var } => {
                format!("Missing API key. Set environment variable {env_var}.")
            }
            AppError::Unauthorized { .. } => {
                "Unauthorized (401). Check your API key.".to_string()
            }
            AppError::RateLimited { .. } => {
                "Too many requests (429). Wait a moment and try again.".to_string()
            }
            AppError::ServerError { status, .. } => {
                format!("The API service is down ({status}). Try again later.")
            }
            AppError::HttpStatus {
                status, message, ..
            } => format!("HTTP error {status}: {message}"),
            AppError::NetworkConnection { .. } => {
                "Could not connect to the API. Check your network connection.".to_string()
            }
            AppError::NetworkTimeout { .. } => {
                "The request to the API timed out.".to_string()
            }
            AppError::DateParse(message) => message.clone(),
            AppError::Config(message) => format!("Configuration error: {message}"),
            other => format!("Unexpected error: {other}"),
        }
    }

    /// Check if error came from the HTTP or transport layer
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::Unauthorized { .. }
                | AppError::RateLimited { .. }
                | AppError::ServerError { .. }
                | AppError::HttpStatus { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiFetch(_)
        )
    }
}
