//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for implementing the hexagonal
//! architecture (ports and adapters) pattern across the portal.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Session Orchestration                     │
//! │                   (interface_session crate)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Port Traits                            │
//! │              (VendorPort in domain_claims)                   │
//! │        Defined in the domain, depend only on core_kernel     │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │   Dell Adapter    │     │  Lenovo Adapter  │
//!         │ (VendorHttpAdapter│     │ (VendorHttpAdapter
//!         │  + Dell profile)  │     │  + Lenovo profile)│
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! The domain defines the port trait; adapters implement it. The session layer
//! receives its adapter as an explicit constructor input — there is no global
//! registry or service locator.

use secrecy::SecretString;
use std::collections::HashMap;

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Configuration for an external vendor adapter
///
/// Contains all settings needed to connect to a vendor system. Base URLs and
/// client credentials come from the environment; adapters never hard-code
/// them.
#[derive(Debug, Clone, Default)]
pub struct ExternalConfig {
    /// Base URL of the vendor API (e.g. "https://apigtw.dell.com/techdirect")
    pub base_url: String,

    /// OAuth2 client ID, for vendors whose login flow requires client
    /// credentials alongside the user's own
    pub client_id: Option<String>,

    /// OAuth2 client secret
    pub client_secret: Option<SecretString>,

    /// Request timeout in seconds, applied to every call on the adapter
    pub timeout_secs: u64,

    /// Additional headers to include in every request
    pub headers: HashMap<String, String>,
}

impl ExternalConfig {
    /// Creates a config with just a base URL and the default 30s timeout
    pub fn simple(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
            ..Default::default()
        }
    }

    /// Creates a config carrying OAuth2 client credentials
    pub fn with_client_credentials(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: SecretString,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret),
            timeout_secs: 30,
            ..Default::default()
        }
    }
}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
    /// Health status is unknown
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

/// Metadata about a port operation for auditing and tracing
#[derive(Debug, Clone, Default)]
pub struct OperationMetadata {
    /// Correlation ID for tracing across systems
    pub correlation_id: Option<String>,
    /// User or system that initiated the operation
    pub initiated_by: Option<String>,
    /// Additional context as key-value pairs
    pub context: HashMap<String, String>,
}

impl OperationMetadata {
    /// Creates new metadata with a freshly generated correlation ID
    pub fn new() -> Self {
        Self::with_correlation_id(uuid::Uuid::new_v4().to_string())
    }

    /// Creates new metadata with a correlation ID
    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(correlation_id.into()),
            ..Default::default()
        }
    }

    /// Records who initiated the operation
    pub fn initiated_by(mut self, who: impl Into<String>) -> Self {
        self.initiated_by = Some(who.into());
        self
    }

    /// Adds context to the metadata
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
