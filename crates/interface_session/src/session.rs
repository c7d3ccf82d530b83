//! Dispatch session
//!
//! A `DispatchSession` exists only while a technician is authenticated: it is
//! created by `login` and destroyed by `logout`, which makes "call before
//! login" unrepresentable. The session holds the bound vendor port (selected
//! at login, never re-selected mid-session), the active claims filter, and
//! the last-fetched claims snapshot.
//!
//! # Concurrency
//!
//! Exactly one vendor call is in flight per session at a time. The exclusion
//! is enforced here with a session-level mutex rather than relying on
//! disabled UI controls, so non-GUI callers get the same guarantee.
//!
//! # Phases
//!
//! Observable state for the presentation layer:
//! `Idle -> Loading -> Idle | Error(message)`. Every failure path returns to
//! `Error`; nothing leaves the session stuck in `Loading`.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use core_kernel::{OperationMetadata, PortError, VendorType};
use domain_claims::{Claim, CreateClaimRequest, UserCredentials, VendorPort, WarrantyInfo};

/// Observable session state for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// No vendor call in flight
    Idle,
    /// A vendor call is in flight
    Loading,
    /// The last vendor call failed; carries a human-readable message
    Error(String),
}

/// An authenticated dashboard session against one vendor
pub struct DispatchSession {
    vendor: VendorType,
    username: String,
    port: Arc<dyn VendorPort>,
    filter: RwLock<Option<String>>,
    claims: RwLock<Vec<Claim>>,
    phase: RwLock<SessionPhase>,
    op_guard: Mutex<()>,
}

impl fmt::Debug for DispatchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchSession")
            .field("vendor", &self.vendor)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl DispatchSession {
    /// Authenticates and opens a session
    ///
    /// Validates the credentials locally first — an empty username or
    /// password never reaches the network. The credentials are consumed
    /// here; only the vendor and username survive into the session, so the
    /// password is not retained.
    pub async fn login(
        port: Arc<dyn VendorPort>,
        credentials: UserCredentials,
    ) -> Result<Self, PortError> {
        credentials.validate_for_login()?;
        if credentials.vendor != port.vendor_type() {
            return Err(PortError::validation(format!(
                "credentials are for {}, port is bound to {}",
                credentials.vendor,
                port.vendor_type()
            )));
        }

        let metadata = OperationMetadata::new().initiated_by(credentials.username.clone());
        port.authenticate(&credentials, Some(metadata)).await?;
        info!(vendor = %credentials.vendor, username = %credentials.username, "Session authenticated");

        Ok(Self {
            vendor: credentials.vendor,
            username: credentials.username,
            port,
            filter: RwLock::new(None),
            claims: RwLock::new(Vec::new()),
            phase: RwLock::new(SessionPhase::Idle),
            op_guard: Mutex::new(()),
        })
    }

    /// Vendor this session is bound to
    pub fn vendor(&self) -> VendorType {
        self.vendor
    }

    /// Authenticated username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current observable phase
    pub async fn phase(&self) -> SessionPhase {
        self.phase.read().await.clone()
    }

    /// Filter currently applied to claim listings
    pub async fn active_filter(&self) -> Option<String> {
        self.filter.read().await.clone()
    }

    /// Last-fetched claims, unchanged until the next successful refresh
    pub async fn claims_snapshot(&self) -> Vec<Claim> {
        self.claims.read().await.clone()
    }

    /// Local free-text filter over the snapshot, without a vendor call
    pub async fn claims_matching(&self, needle: &str) -> Vec<Claim> {
        self.claims
            .read()
            .await
            .iter()
            .filter(|claim| claim.matches_text(needle))
            .cloned()
            .collect()
    }

    /// Re-fetches the claims list with the active filter
    ///
    /// The displayed list is replaced wholesale; there is no incremental
    /// diffing.
    pub async fn refresh_claims(&self) -> Result<Vec<Claim>, PortError> {
        let _guard = self.op_guard.lock().await;
        self.refresh_claims_locked().await
    }

    /// Sets the user filter and refreshes
    pub async fn apply_filter(&self, filter_by_user: impl Into<String>) -> Result<Vec<Claim>, PortError> {
        let _guard = self.op_guard.lock().await;
        *self.filter.write().await = Some(filter_by_user.into());
        self.refresh_claims_locked().await
    }

    /// Clears the user filter and refreshes
    pub async fn clear_filter(&self) -> Result<Vec<Claim>, PortError> {
        let _guard = self.op_guard.lock().await;
        *self.filter.write().await = None;
        self.refresh_claims_locked().await
    }

    /// Looks up warranty entitlement for a service tag
    pub async fn check_warranty(&self, service_tag: &str) -> Result<WarrantyInfo, PortError> {
        let _guard = self.op_guard.lock().await;
        self.set_phase(SessionPhase::Loading).await;

        let metadata = OperationMetadata::new().initiated_by(self.username.clone());
        match self.port.check_warranty(service_tag, Some(metadata)).await {
            Ok(info) => {
                self.set_phase(SessionPhase::Idle).await;
                Ok(info)
            }
            Err(e) => {
                self.set_phase(SessionPhase::Error(e.to_string())).await;
                Err(e)
            }
        }
    }

    /// Submits a new claim, then refreshes the list so it becomes visible
    ///
    /// There is no optimistic local insert; the claim shows up via the
    /// post-submit refresh. If the refresh itself fails the created claim is
    /// still returned — the submission did happen on the vendor side.
    pub async fn submit_claim(&self, request: CreateClaimRequest) -> Result<Claim, PortError> {
        let _guard = self.op_guard.lock().await;
        self.set_phase(SessionPhase::Loading).await;

        let metadata = OperationMetadata::new().initiated_by(self.username.clone());
        let claim = match self.port.create_claim(request, Some(metadata)).await {
            Ok(claim) => claim,
            Err(e) => {
                self.set_phase(SessionPhase::Error(e.to_string())).await;
                return Err(e);
            }
        };
        info!(claim_id = %claim.claim_id, "Claim submitted");

        if let Err(e) = self.refresh_claims_locked().await {
            warn!(error = %e, "Claim created but the follow-up refresh failed");
        }
        Ok(claim)
    }

    /// Ends the session, discarding the bound port and identity
    pub fn logout(self) {
        info!(vendor = %self.vendor, username = %self.username, "Session closed");
    }

    async fn refresh_claims_locked(&self) -> Result<Vec<Claim>, PortError> {
        self.set_phase(SessionPhase::Loading).await;

        let filter = self.filter.read().await.clone();
        let metadata = OperationMetadata::new().initiated_by(self.username.clone());
        match self.port.list_claims(filter, Some(metadata)).await {
            Ok(claims) => {
                debug!(count = claims.len(), "Claims refreshed");
                *self.claims.write().await = claims.clone();
                self.set_phase(SessionPhase::Idle).await;
                Ok(claims)
            }
            Err(e) => {
                self.set_phase(SessionPhase::Error(e.to_string())).await;
                Err(e)
            }
        }
    }

    async fn set_phase(&self, phase: SessionPhase) {
        *self.phase.write().await = phase;
    }
}
