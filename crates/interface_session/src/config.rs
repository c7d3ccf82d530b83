//! Portal configuration
//!
//! Base URLs, OAuth2 client credentials, and timeouts come from the
//! environment (prefix `PORTAL`, `__` as the nesting separator) — adapters
//! never hard-code them. Client secrets deserialize into `SecretString` so
//! they stay out of debug output.

use std::sync::Arc;

use secrecy::SecretString;
use serde::Deserialize;

use core_kernel::{ExternalConfig, PortError, VendorType};
use domain_claims::VendorPort;
use infra_vendor::VendorHttpAdapter;

/// Connection settings for one vendor's gateway
#[derive(Debug, Clone, Deserialize)]
pub struct VendorEndpointConfig {
    /// Gateway base URL
    pub base_url: String,
    /// OAuth2 client ID, for vendors that require it at login
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth2 client secret, redacted from Debug output
    #[serde(default)]
    pub client_secret: Option<SecretString>,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl VendorEndpointConfig {
    fn dell_default() -> Self {
        Self {
            base_url: "https://apigtw.dell.com/techdirect".to_string(),
            client_id: None,
            client_secret: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    fn lenovo_default() -> Self {
        Self {
            base_url: "https://api.lenovo.com/techdirect".to_string(),
            client_id: None,
            client_secret: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    fn to_external(&self) -> ExternalConfig {
        ExternalConfig {
            base_url: self.base_url.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            timeout_secs: self.timeout_secs,
            headers: Default::default(),
        }
    }
}

/// Portal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Dell gateway settings
    #[serde(default = "VendorEndpointConfig::dell_default")]
    pub dell: VendorEndpointConfig,
    /// Lenovo gateway settings
    #[serde(default = "VendorEndpointConfig::lenovo_default")]
    pub lenovo: VendorEndpointConfig,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            dell: VendorEndpointConfig::dell_default(),
            lenovo: VendorEndpointConfig::lenovo_default(),
            log_level: default_log_level(),
        }
    }
}

impl PortalConfig {
    /// Loads configuration from environment variables
    ///
    /// Nested fields use `__`, e.g. `PORTAL_DELL__BASE_URL`,
    /// `PORTAL_DELL__CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PORTAL").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Settings for the given vendor
    pub fn endpoint(&self, vendor: VendorType) -> &VendorEndpointConfig {
        match vendor {
            VendorType::Dell => &self.dell,
            VendorType::Lenovo => &self.lenovo,
        }
    }
}

/// Builds the vendor port for a login attempt
///
/// Explicit construction: the caller selects the vendor at login time and
/// hands the resulting port to `DispatchSession::login`.
pub fn build_port(
    vendor: VendorType,
    config: &PortalConfig,
) -> Result<Arc<dyn VendorPort>, PortError> {
    let external = config.endpoint(vendor).to_external();
    let adapter = match vendor {
        VendorType::Dell => VendorHttpAdapter::dell(external)?,
        VendorType::Lenovo => VendorHttpAdapter::lenovo(external)?,
    };
    Ok(Arc::new(adapter))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_vendor_gateways() {
        let config = PortalConfig::default();
        assert!(config.dell.base_url.contains("dell.com"));
        assert!(config.lenovo.base_url.contains("lenovo.com"));
        assert_eq!(config.dell.timeout_secs, 30);
        // Credentials have no defaults.
        assert!(config.dell.client_id.is_none());
        assert!(config.dell.client_secret.is_none());
    }

    #[test]
    fn test_endpoint_selects_by_vendor() {
        let config = PortalConfig::default();
        assert_eq!(
            config.endpoint(VendorType::Dell).base_url,
            config.dell.base_url
        );
        assert_eq!(
            config.endpoint(VendorType::Lenovo).base_url,
            config.lenovo.base_url
        );
    }

    #[test]
    fn test_build_port_binds_the_requested_vendor() {
        let config = PortalConfig::default();
        let port = build_port(VendorType::Lenovo, &config).unwrap();
        assert_eq!(port.vendor_type(), VendorType::Lenovo);
    }
}
