use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client operations (algod / indexer)
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// File I/O operations (program fixtures, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Base64 decoding
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Msgpack encoding or decoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid address text or bytes
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Transaction construction rejected its inputs
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// A harness step's expectation did not hold
    #[error("Assertion failed: {0}")]
    Assertion(String),
}

/// Algod / indexer client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL could not be parsed
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response (connect, timeout, TLS, ...)
    #[error("Request failed: {endpoint} - {message}")]
    RequestFailed { endpoint: String, message: String },

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to deserialise response data
    #[error("Deserialisation failed: {0}")]
    Deserialisation(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<rmpv::encode::Error> for AppError {
    fn from(err: rmpv::encode::Error) -> Self {
        AppError::Encoding(err.to_string())
    }
}

impl From<rmpv::decode::Error> for AppError {
    fn from(err: rmpv::decode::Error) -> Self {
        AppError::Encoding(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidData(format!("Integer parse error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
