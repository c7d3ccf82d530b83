//! Generic vendor HTTP adapter
//!
//! One adapter implements `VendorPort` for every vendor; the differences live
//! in the `VendorProfile` it is constructed with. The adapter owns the HTTP
//! client (with the configured per-call timeout), the session token captured
//! at login, and the translation between vendor payloads and domain types.
//!
//! # Error Handling
//!
//! Vendor HTTP statuses are mapped to `PortError` variants:
//! - 401/403 -> `Unauthorized`
//! - 404 -> `NotFound` (except warranty lookups, where it means "no record")
//! - 429 -> `RateLimited`
//! - 5xx -> `ServiceUnavailable`
//! - other 4xx -> `VendorRejected` with the vendor's code/message when present
//! - transport failures -> `Connection` / `Timeout`

use std::str::FromStr;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use url::Url;

use core_kernel::{
    AdapterHealth, DomainPort, ExternalConfig, HealthCheckResult, HealthCheckable,
    OperationMetadata, PortError, VendorType,
};
use domain_claims::{Claim, CreateClaimRequest, UserCredentials, VendorPort, WarrantyInfo};

use crate::dto::{AuthRequest, AuthResponse, ClaimDto, ClaimsEnvelope, WarrantyDto};
use crate::error::{error_from_status, transport_error};
use crate::multipart;
use crate::profile::VendorProfile;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Auth state captured by a successful login
#[derive(Debug, Clone)]
struct SessionAuth {
    token: String,
    username: String,
}

/// HTTP implementation of the `VendorPort` trait
///
/// One instance serves one session against one vendor. After `authenticate`
/// succeeds, the opaque token is attached as `Authorization: Bearer <token>`
/// to every subsequent call on this instance.
#[derive(Debug)]
pub struct VendorHttpAdapter {
    client: reqwest::Client,
    base_url: String,
    profile: VendorProfile,
    config: ExternalConfig,
    session: RwLock<Option<SessionAuth>>,
}

impl VendorHttpAdapter {
    /// Creates an adapter for the given profile and external configuration
    ///
    /// Validates the base URL and builds the HTTP client with the configured
    /// timeout (default 30s when unset) and any extra headers.
    pub fn new(profile: VendorProfile, config: ExternalConfig) -> Result<Self, PortError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            PortError::validation_field(
                format!("invalid base URL for {}: {e}", profile.vendor),
                "base_url",
            )
        })?;

        let timeout_secs = if config.timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            config.timeout_secs
        };

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_str(key).map_err(|e| {
                PortError::validation_field(format!("invalid header name {key}: {e}"), "headers")
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                PortError::validation_field(format!("invalid header value for {key}: {e}"), "headers")
            })?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| PortError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            profile,
            config: ExternalConfig {
                timeout_secs,
                ..config
            },
            session: RwLock::new(None),
        })
    }

    /// Dell TechDirect adapter
    pub fn dell(config: ExternalConfig) -> Result<Self, PortError> {
        Self::new(VendorProfile::dell(), config)
    }

    /// Lenovo self-dispatch adapter
    pub fn lenovo(config: ExternalConfig) -> Result<Self, PortError> {
        Self::new(VendorProfile::lenovo(), config)
    }

    /// Returns the base URL this adapter talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn require_auth(&self) -> Result<SessionAuth, PortError> {
        self.session.read().await.clone().ok_or_else(|| {
            PortError::unauthorized(format!(
                "no active {} session; authenticate first",
                self.profile.vendor
            ))
        })
    }
}

impl DomainPort for VendorHttpAdapter {}

#[async_trait]
impl HealthCheckable for VendorHttpAdapter {
    /// Probes the vendor gateway
    ///
    /// Any HTTP answer counts as reachable; only transport failures mark the
    /// adapter unhealthy.
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let result = self.client.get(&self.base_url).send().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let adapter_id = format!(
            "{}-http-adapter",
            self.profile.vendor.to_string().to_lowercase()
        );

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id,
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id,
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("gateway unreachable: {e}")),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl VendorPort for VendorHttpAdapter {
    #[instrument(skip(self, credentials, _metadata), fields(vendor = %self.profile.vendor, username = %credentials.username))]
    async fn authenticate(
        &self,
        credentials: &UserCredentials,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        if credentials.vendor != self.profile.vendor {
            return Err(PortError::validation(format!(
                "credentials are for {}, adapter talks to {}",
                credentials.vendor, self.profile.vendor
            )));
        }
        credentials.validate_for_login()?;

        let (client_id, client_secret, grant_type) = if self.profile.sends_client_credentials {
            let client_id = self.config.client_id.as_deref().ok_or_else(|| {
                PortError::validation_field(
                    format!("{} login requires a configured client_id", self.profile.vendor),
                    "client_id",
                )
            })?;
            let client_secret = self.config.client_secret.as_ref().ok_or_else(|| {
                PortError::validation_field(
                    format!(
                        "{} login requires a configured client_secret",
                        self.profile.vendor
                    ),
                    "client_secret",
                )
            })?;
            (
                Some(client_id),
                Some(client_secret.expose_secret()),
                Some("password"),
            )
        } else {
            (None, None, None)
        };

        let body = AuthRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
            client_id,
            client_secret,
            grant_type,
        };

        debug!("Authenticating against vendor login endpoint");
        let response = self
            .client
            .post(self.endpoint(self.profile.auth_path))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                transport_error(
                    self.profile.vendor,
                    "authenticate",
                    self.config.timeout_secs,
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(error_from_status(self.profile.vendor, "authenticate", response).await);
        }

        let parsed: AuthResponse = response.json().await.map_err(|e| {
            PortError::malformed(format!("login response is not valid JSON: {e}"))
        })?;
        let token = parsed
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PortError::malformed("login response did not carry a session token"))?;

        *self.session.write().await = Some(SessionAuth {
            token,
            username: credentials.username.clone(),
        });
        debug!("Session token stored");
        Ok(())
    }

    #[instrument(skip(self, _metadata), fields(vendor = %self.profile.vendor))]
    async fn list_claims(
        &self,
        filter_by_user: Option<String>,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Claim>, PortError> {
        let auth = self.require_auth().await?;

        let mut request = self
            .client
            .get(self.endpoint(self.profile.claims_path))
            .bearer_auth(&auth.token);
        if let Some(user) = &filter_by_user {
            // Passed through verbatim; cross-user visibility is vendor policy.
            request = request.query(&[(self.profile.user_filter_param, user.as_str())]);
        }

        let response = request.send().await.map_err(|e| {
            transport_error(self.profile.vendor, "list_claims", self.config.timeout_secs, e)
        })?;

        if !response.status().is_success() {
            return Err(error_from_status(self.profile.vendor, "claims", response).await);
        }

        let envelope: ClaimsEnvelope = response.json().await.map_err(|e| {
            PortError::malformed(format!("claims response has unexpected shape: {e}"))
        })?;

        let claims = envelope
            .into_claims()
            .into_iter()
            .map(|dto| dto.into_claim(self.profile.vendor))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = claims.len(), "Fetched claims");
        Ok(claims)
    }

    #[instrument(skip(self, _metadata), fields(vendor = %self.profile.vendor, service_tag = %service_tag))]
    async fn check_warranty(
        &self,
        service_tag: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<WarrantyInfo, PortError> {
        let tag = service_tag.trim();
        if tag.is_empty() {
            return Err(PortError::validation_field(
                "service tag is required",
                "service_tag",
            ));
        }

        let auth = self.require_auth().await?;

        let url = format!("{}/{}", self.endpoint(self.profile.warranty_path), tag);
        let response = self
            .client
            .get(url)
            .bearer_auth(&auth.token)
            .send()
            .await
            .map_err(|e| {
                transport_error(
                    self.profile.vendor,
                    "check_warranty",
                    self.config.timeout_secs,
                    e,
                )
            })?;

        // A missing record is an answer, not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No warranty record for service tag");
            return Ok(WarrantyInfo::no_record(tag, self.profile.vendor));
        }

        if !response.status().is_success() {
            return Err(error_from_status(self.profile.vendor, "warranty", response).await);
        }

        let dto: WarrantyDto = response.json().await.map_err(|e| {
            PortError::malformed(format!("warranty response has unexpected shape: {e}"))
        })?;

        Ok(dto.into_warranty(self.profile.vendor, tag))
    }

    #[instrument(skip(self, request, _metadata), fields(vendor = %self.profile.vendor, service_tag = %request.service_tag, images = request.images.len()))]
    async fn create_claim(
        &self,
        request: CreateClaimRequest,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Claim, PortError> {
        // Local validation runs before any network call.
        request.validate_local()?;
        self.profile.attachments.check(request.images.len())?;

        let auth = self.require_auth().await?;

        let parts = multipart::encode_claim(&self.profile, &request);
        let form = multipart::into_form(parts)?;

        debug!("Submitting claim dispatch");
        let response = self
            .client
            .post(self.endpoint(self.profile.claims_path))
            .bearer_auth(&auth.token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                transport_error(
                    self.profile.vendor,
                    "create_claim",
                    self.config.timeout_secs,
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(error_from_status(self.profile.vendor, "dispatch", response).await);
        }

        let dto: ClaimDto = response.json().await.map_err(|e| {
            PortError::malformed(format!("claim creation response has unexpected shape: {e}"))
        })?;

        dto.into_created_claim(self.profile.vendor, &request, &auth.username)
    }

    fn vendor_type(&self) -> VendorType {
        self.profile.vendor
    }
}
