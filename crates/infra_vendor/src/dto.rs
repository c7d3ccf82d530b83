//! Wire data transfer objects
//!
//! Vendor payloads are deserialized into explicit typed structures with
//! required-field validation; a response that does not carry what the portal
//! needs fails with a clear `MalformedResponse` instead of silently yielding
//! absent values. Field aliases absorb the naming differences between the
//! vendors' JSON without loosening the types.

use chrono::{DateTime, Utc};
use core_kernel::{PortError, VendorType};
use domain_claims::{Claim, CreateClaimRequest, WarrantyInfo};
use serde::{Deserialize, Serialize};

/// Login request body
///
/// Both vendors take the technician's credentials as JSON; Dell additionally
/// expects OAuth2 client credentials, supplied from external configuration.
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<&'a str>,
}

/// Login response body
///
/// The token is opaque to the portal; it is stored and attached as a bearer
/// credential for the rest of the session.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
}

/// Claims listing envelope
///
/// Vendors disagree on whether the list arrives wrapped (`{"claims": [...]}`)
/// or bare (`[...]`); both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClaimsEnvelope {
    Wrapped { claims: Vec<ClaimDto> },
    Bare(Vec<ClaimDto>),
}

impl ClaimsEnvelope {
    pub fn into_claims(self) -> Vec<ClaimDto> {
        match self {
            ClaimsEnvelope::Wrapped { claims } => claims,
            ClaimsEnvelope::Bare(claims) => claims,
        }
    }
}

/// One claim entry as a vendor reports it
#[derive(Debug, Deserialize)]
pub struct ClaimDto {
    #[serde(
        default,
        alias = "claim_id",
        alias = "claimId",
        alias = "code",
        alias = "dispatch_number",
        alias = "dispatchNumber"
    )]
    pub id: Option<String>,
    #[serde(default, alias = "serviceTag", alias = "serial")]
    pub service_tag: Option<String>,
    #[serde(default, alias = "problem_description")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "created_date",
        alias = "createdDate",
        alias = "created_at",
        alias = "submitted_at"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "createdBy")]
    pub created_by: Option<String>,
    #[serde(default, alias = "imagePaths")]
    pub image_paths: Option<Vec<String>>,
    #[serde(default, alias = "partNumber")]
    pub part_number: Option<String>,
    #[serde(default, alias = "serialNumber")]
    pub serial_number: Option<String>,
}

impl ClaimDto {
    /// Maps a listing entry into the domain, stamping the vendor
    ///
    /// The claim identifier and creation date are required; a payload without
    /// them is malformed.
    pub fn into_claim(self, vendor: VendorType) -> Result<Claim, PortError> {
        let claim_id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PortError::malformed("claim entry is missing its identifier"))?;
        let created_date = self.created.ok_or_else(|| {
            PortError::malformed(format!("claim {claim_id} is missing its creation date"))
        })?;

        Ok(Claim {
            claim_id,
            service_tag: self.service_tag.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            created_date,
            status: self.status.unwrap_or_else(|| "Unknown".to_string()),
            created_by: self.created_by.unwrap_or_default(),
            vendor,
            image_paths: self.image_paths,
            part_number: self.part_number,
            serial_number: self.serial_number,
        })
    }

    /// Maps a claim-creation acknowledgement into the domain
    ///
    /// Creation responses are often thinner than listing entries, so fields
    /// the vendor omits are filled from the request that was just submitted.
    /// Only the assigned claim identifier is strictly required.
    pub fn into_created_claim(
        self,
        vendor: VendorType,
        request: &CreateClaimRequest,
        created_by: &str,
    ) -> Result<Claim, PortError> {
        let claim_id = self.id.filter(|id| !id.is_empty()).ok_or_else(|| {
            PortError::malformed("claim creation response did not carry a claim identifier")
        })?;

        Ok(Claim {
            claim_id,
            service_tag: self
                .service_tag
                .unwrap_or_else(|| request.service_tag.clone()),
            description: self
                .description
                .unwrap_or_else(|| request.description.clone()),
            created_date: self.created.unwrap_or_else(Utc::now),
            status: self.status.unwrap_or_else(|| "Open".to_string()),
            created_by: self
                .created_by
                .unwrap_or_else(|| created_by.to_string()),
            vendor,
            image_paths: self.image_paths,
            part_number: self.part_number.or_else(|| request.part_number.clone()),
            serial_number: self
                .serial_number
                .or_else(|| request.serial_number.clone()),
        })
    }
}

/// Warranty lookup response
#[derive(Debug, Deserialize)]
pub struct WarrantyDto {
    #[serde(default, alias = "serviceTag", alias = "serial")]
    pub service_tag: Option<String>,
    #[serde(default, alias = "productName", alias = "product")]
    pub product_name: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "endDate", alias = "expires_on")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "isValid")]
    pub is_valid: Option<bool>,
    #[serde(default, alias = "serviceLevel", alias = "service_level_description")]
    pub service_level: Option<String>,
}

impl WarrantyDto {
    /// Maps a warranty response into the domain, stamping the vendor
    ///
    /// When the payload carries no explicit validity flag, an entitlement is
    /// considered active if the vendor's status text says so.
    pub fn into_warranty(self, vendor: VendorType, requested_tag: &str) -> WarrantyInfo {
        let status = self.status.unwrap_or_else(|| "Unknown".to_string());
        let is_valid = self
            .is_valid
            .unwrap_or_else(|| matches!(status.to_lowercase().as_str(), "in warranty" | "active"));

        WarrantyInfo {
            service_tag: self
                .service_tag
                .unwrap_or_else(|| requested_tag.to_string()),
            product_name: self.product_name.unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            status,
            is_valid,
            service_level: self.service_level,
            vendor,
        }
    }
}

/// Error body some vendor endpoints return alongside a 4xx status
#[derive(Debug, Default, Deserialize)]
pub struct VendorErrorBody {
    #[serde(default, alias = "error_code", alias = "errorCode")]
    pub code: Option<String>,
    #[serde(default, alias = "error", alias = "detail")]
    pub message: Option<String>,
}
