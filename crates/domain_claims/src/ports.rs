//! Vendor Port
//!
//! This module defines the capability contract every vendor integration must
//! satisfy. The session and presentation layers depend only on this trait, so
//! a Dell adapter, a Lenovo adapter, or a mock are interchangeable.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::VendorPort;
//! use std::sync::Arc;
//!
//! // The session layer receives the port as an explicit input at login time.
//! pub struct DispatchSession {
//!     port: Arc<dyn VendorPort>,
//! }
//! ```
//!
//! # Error contract
//!
//! All operations report failures through `PortError`, keeping the taxonomy
//! uniform: authentication rejections are `Unauthorized`, transport failures
//! are `Connection`/`Timeout`/`ServiceUnavailable`, malformed vendor payloads
//! are `MalformedResponse`, and local validation failures are `Validation`
//! and happen before any network call.

use async_trait::async_trait;

use core_kernel::{OperationMetadata, PortError, VendorType};

use crate::claim::Claim;
use crate::credentials::UserCredentials;
use crate::request::CreateClaimRequest;
use crate::warranty::WarrantyInfo;

/// Capability contract for a single vendor's self-dispatch system
///
/// One instance is bound to one vendor and one session: after a successful
/// `authenticate`, the implementation holds the opaque session token and
/// attaches it as a bearer credential to every subsequent call.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait VendorPort: Send + Sync {
    /// Authenticates against the vendor system
    ///
    /// On success the implementation stores an opaque session token for the
    /// rest of the instance's lifetime. A rejected password surfaces as
    /// `Unauthorized`; an unreachable server as `Connection`/`Timeout` — the
    /// caller can tell the two apart.
    async fn authenticate(
        &self,
        credentials: &UserCredentials,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Lists claims visible to the authenticated identity
    ///
    /// When `filter_by_user` is given it is passed through verbatim as a
    /// query parameter; whether a technician may see another user's claims is
    /// vendor policy, not client policy.
    async fn list_claims(
        &self,
        filter_by_user: Option<String>,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Claim>, PortError>;

    /// Looks up warranty entitlement for a service tag
    ///
    /// A vendor-side "no record" comes back as `Ok` with `is_valid == false`;
    /// only transport and parse failures are errors.
    async fn check_warranty(
        &self,
        service_tag: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<WarrantyInfo, PortError>;

    /// Creates a new claim
    ///
    /// Local validation (field presence, the vendor's attachment policy) runs
    /// before any network call. Vendor-side rejections carry the vendor's
    /// error code and message and are never silently swallowed — claim
    /// creation has real side effects on the vendor system.
    async fn create_claim(
        &self,
        request: CreateClaimRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Claim, PortError>;

    /// Identifies which vendor this port talks to
    fn vendor_type(&self) -> VendorType;
}
