//! Client error types

use thiserror::Error;

/// Transport error: anything that goes wrong talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Short stable name of the error variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Status { .. } => "status",
            Self::Serialization(_) => "serialization",
            Self::Config(_) => "config",
        }
    }

    /// HTTP status code, when the failure came with one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Unauthorized => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors reported synchronously by the browse controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BrowseError {
    /// Requested page is outside `[1, total_pages]`
    #[error("page {page} is out of range 1..={total_pages}")]
    InvalidPage { page: u32, total_pages: u32 },

    /// Page size must be at least 1
    #[error("page size must be at least 1")]
    InvalidPageSize,
}
