//! Error types for Multiverse Catalog
//!
//! This module provides unified error handling for the catalog, covering
//! remote API failures, response decoding, and configuration problems.
//! Views never see these directly: the client folds them into
//! `ListOutcome` / `DetailOutcome` before anything is rendered.

use thiserror::Error;

/// The main error type for Multiverse Catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// The remote API answered "not found" for a request
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote API answered with an unexpected non-success status
    #[error("Remote API returned status {status}")]
    Http { status: u16 },

    /// The request never produced a response (connect, timeout, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        CatalogError::NotFound(what.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        CatalogError::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        CatalogError::Decode(msg.into())
    }

    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CatalogError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        CatalogError::Internal(msg.into())
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_) | CatalogError::Http { status: 404 })
    }

    /// Check if this error happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, CatalogError::Transport(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = CatalogError::not_found("character 9999");
        assert!(err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Not found: character 9999");
    }

    #[test]
    fn test_http_404_counts_as_not_found() {
        assert!(CatalogError::Http { status: 404 }.is_not_found());
        assert!(!CatalogError::Http { status: 500 }.is_not_found());
    }

    #[test]
    fn test_transport_error() {
        let err = CatalogError::transport("connection refused");
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_http_error_message() {
        let err = CatalogError::Http { status: 502 };
        assert_eq!(err.to_string(), "Remote API returned status 502");
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = CatalogError::invalid_config("CATALOG_API_BASE_URL must be an http(s) URL");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: CATALOG_API_BASE_URL must be an http(s) URL"
        );
    }
}
