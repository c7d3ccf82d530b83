//! Per-vendor policy profiles
//!
//! The two vendor integrations are structurally similar today, but their
//! contracts are expected to diverge once the real APIs replace the stubs.
//! Everything vendor-specific is captured here so the adapter itself stays
//! generic, and each vendor's policy is independently testable.

use core_kernel::{PortError, VendorType};

/// Bounds on the number of image attachments a vendor accepts per claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentPolicy {
    /// Minimum number of attachments, inclusive
    pub min: usize,
    /// Maximum number of attachments, inclusive; `None` means no stated bound
    pub max: Option<usize>,
}

impl AttachmentPolicy {
    /// Policy with inclusive lower and upper bounds
    pub const fn bounded(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Policy with no attachment requirements
    pub const fn unbounded() -> Self {
        Self { min: 0, max: None }
    }

    /// Checks an attachment count against the policy
    ///
    /// Runs before any network call; violations surface as `Validation`.
    pub fn check(&self, count: usize) -> Result<(), PortError> {
        if count < self.min {
            return Err(PortError::validation_field(
                format!(
                    "at least {} image attachment(s) required, got {}",
                    self.min, count
                ),
                "images",
            ));
        }
        if let Some(max) = self.max {
            if count > max {
                return Err(PortError::validation_field(
                    format!("at most {} image attachments allowed, got {}", max, count),
                    "images",
                ));
            }
        }
        Ok(())
    }
}

/// Everything one vendor's integration does differently from another's
#[derive(Debug, Clone)]
pub struct VendorProfile {
    /// Vendor this profile describes
    pub vendor: VendorType,
    /// Login endpoint, relative to the base URL
    pub auth_path: &'static str,
    /// Claims listing/creation endpoint
    pub claims_path: &'static str,
    /// Warranty lookup endpoint; the service tag is appended as a path segment
    pub warranty_path: &'static str,
    /// Query parameter name for the list-claims user filter
    pub user_filter_param: &'static str,
    /// Prefix for positional multipart image fields (`image1`, `image2`, ...)
    pub image_field_prefix: &'static str,
    /// Attachment-count bounds enforced before any network call
    pub attachments: AttachmentPolicy,
    /// Whether the login payload must carry OAuth2 client credentials
    pub sends_client_credentials: bool,
}

impl VendorProfile {
    /// Dell TechDirect profile
    ///
    /// Dell requires between one and eight attachments per claim, inclusive
    /// on both bounds, and its login flow expects externally configured
    /// client credentials alongside the technician's own.
    pub fn dell() -> Self {
        Self {
            vendor: VendorType::Dell,
            auth_path: "/auth/login",
            claims_path: "/claims",
            warranty_path: "/warranty",
            user_filter_param: "user",
            image_field_prefix: "image",
            attachments: AttachmentPolicy::bounded(1, 8),
            sends_client_credentials: true,
        }
    }

    /// Lenovo self-dispatch profile
    ///
    /// Lenovo states no attachment requirements; zero images is a valid
    /// claim. An upper bound is deliberately not imposed here until vendor
    /// documentation defines one.
    pub fn lenovo() -> Self {
        Self {
            vendor: VendorType::Lenovo,
            auth_path: "/auth/login",
            claims_path: "/claims",
            warranty_path: "/warranty",
            user_filter_param: "user",
            image_field_prefix: "image",
            attachments: AttachmentPolicy::unbounded(),
            sends_client_credentials: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dell_policy_bounds_are_inclusive() {
        let policy = VendorProfile::dell().attachments;
        assert!(policy.check(1).is_ok());
        assert!(policy.check(8).is_ok());
        assert!(policy.check(0).is_err());
        assert!(policy.check(9).is_err());
    }

    #[test]
    fn test_lenovo_policy_accepts_zero_images() {
        let policy = VendorProfile::lenovo().attachments;
        assert!(policy.check(0).is_ok());
        assert!(policy.check(40).is_ok());
    }

    #[test]
    fn test_violation_is_validation_error() {
        let err = AttachmentPolicy::bounded(1, 8).check(0).unwrap_err();
        assert!(err.is_validation());
        match err {
            PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("images")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_profiles_identify_their_vendor() {
        assert_eq!(VendorProfile::dell().vendor, VendorType::Dell);
        assert_eq!(VendorProfile::lenovo().vendor, VendorType::Lenovo);
    }
}
