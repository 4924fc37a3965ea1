use thiserror::Error;

/// Unified error type for persian-translator-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Translation operations (API requests, responses)
/// - Configuration operations (loading, validation)
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Translation Errors
    // ==========================================================================
    /// Translation API request failed (transport-level: DNS, connect, timeout)
    #[error("translation API request failed: {0}")]
    Request(String),

    /// Translation API returned a non-success HTTP status
    #[error("translation API returned HTTP {status}: {body}")]
    ApiStatus { status: u16, body: String },

    /// Invalid response from translation API
    #[error("invalid translation API response: {0}")]
    InvalidResponse(String),

    /// API key not configured for translation service
    #[error("translation API key not configured")]
    MissingApiKey,

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
