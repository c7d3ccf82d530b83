//! Unified error type for port operations
//!
//! All vendor port implementations report failures through `PortError`, so
//! callers can tell "bad password" from "server unreachable" from "the vendor
//! rejected this claim" and decide retry-vs-report accordingly.

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// The variants map onto the failure taxonomy the portal cares about:
/// transport failures (`Connection`, `Timeout`, `ServiceUnavailable`,
/// `RateLimited`), authentication rejections (`Unauthorized`), malformed
/// vendor payloads (`MalformedResponse`), local validation failures
/// (`Validation`), and vendor-reported business errors (`VendorRejected`).
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A local validation error occurred, before any network call was made
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Connection to the vendor system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Rate limit exceeded for the vendor API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The vendor system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The vendor returned a payload that does not match the expected shape
    #[error("Malformed response: {message}")]
    MalformedResponse {
        message: String,
    },

    /// The vendor accepted the request but rejected it as a business error
    ///
    /// Carries the vendor's error code when the response body provides one.
    /// Write-path callers must surface this to the user; it represents a
    /// possibly-charged side effect and is never silently swallowed.
    #[error("Vendor rejected the request: {message}")]
    VendorRejected {
        code: Option<String>,
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        PortError::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a MalformedResponse error
    pub fn malformed(message: impl Into<String>) -> Self {
        PortError::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates a VendorRejected error
    pub fn vendor_rejected(code: Option<String>, message: impl Into<String>) -> Self {
        PortError::VendorRejected {
            code,
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error was raised locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, PortError::Validation { .. })
    }
}
