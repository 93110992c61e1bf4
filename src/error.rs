//! Error types for the Gandi registrar adapter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when interacting with the Gandi API.
///
/// Transport failures, HTTP statuses without a usable body, in-band
/// rejections, and malformed response shapes are distinct variants so the
/// host platform can tell them apart.
#[derive(Error, Debug)]
pub enum GandiApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code with no parseable JSON body
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The registrar rejected the request in-band (`errors` present, or
    /// `code` different from the expected success code)
    #[error("{0}")]
    Rejected(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Response decoded but did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Domain is not available to register; carries the availability status
    /// reported by the registrar verbatim
    #[error("{0}")]
    NotAvailable(String),

    /// DNS records were submitted for a domain without LiveDNS delegation
    #[error("LiveDNS not enabled")]
    LiveDnsNotEnabled,

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with GandiApiError
pub type GandiApiResult<T> = Result<T, GandiApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
