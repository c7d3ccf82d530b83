//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::VendorType;
use domain_claims::{Claim, CreateClaimRequest, ImageAttachment, WarrantyInfo};

use crate::fixtures::ImageFixtures;

/// Builder for constructing test claims
pub struct ClaimBuilder {
    claim_id: String,
    service_tag: String,
    description: String,
    created_date: DateTime<Utc>,
    status: String,
    created_by: String,
    vendor: VendorType,
    part_number: Option<String>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            claim_id: "SR100000001".to_string(),
            service_tag: "7GHJK12".to_string(),
            description: "Display flickers at low brightness".to_string(),
            created_date: Utc.with_ymd_and_hms(2025, 2, 10, 14, 5, 0).unwrap(),
            status: "Open".to_string(),
            created_by: "tech01".to_string(),
            vendor: VendorType::Dell,
            part_number: None,
        }
    }

    pub fn with_claim_id(mut self, claim_id: impl Into<String>) -> Self {
        self.claim_id = claim_id.into();
        self
    }

    pub fn with_service_tag(mut self, service_tag: impl Into<String>) -> Self {
        self.service_tag = service_tag.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn with_vendor(mut self, vendor: VendorType) -> Self {
        self.vendor = vendor;
        self
    }

    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            claim_id: self.claim_id,
            service_tag: self.service_tag,
            description: self.description,
            created_date: self.created_date,
            status: self.status,
            created_by: self.created_by,
            vendor: self.vendor,
            image_paths: None,
            part_number: self.part_number,
            serial_number: None,
        }
    }
}

/// Builder for constructing claim-creation requests
pub struct CreateClaimRequestBuilder {
    request: CreateClaimRequest,
}

impl Default for CreateClaimRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateClaimRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: CreateClaimRequest::new("7GHJK12", "Fan makes grinding noise under load"),
        }
    }

    pub fn with_service_tag(mut self, service_tag: impl Into<String>) -> Self {
        self.request.service_tag = service_tag.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = description.into();
        self
    }

    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.request.part_number = Some(part_number.into());
        self
    }

    pub fn with_tech_email(mut self, email: impl Into<String>) -> Self {
        self.request.tech_email = Some(email.into());
        self
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.request.images.push(image);
        self
    }

    /// Attaches `count` distinct JPEG fixtures named `photo0.jpg`..
    pub fn with_image_count(mut self, count: usize) -> Self {
        for i in 0..count {
            self.request.images.push(ImageAttachment::new(
                format!("photo{i}.jpg"),
                ImageFixtures::jpeg(i as u8),
            ));
        }
        self
    }

    pub fn build(self) -> CreateClaimRequest {
        self.request
    }
}

/// Builder for constructing warranty results
pub struct WarrantyInfoBuilder {
    info: WarrantyInfo,
}

impl Default for WarrantyInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WarrantyInfoBuilder {
    pub fn new() -> Self {
        Self {
            info: WarrantyInfo {
                service_tag: "7GHJK12".to_string(),
                product_name: "Latitude 5440".to_string(),
                start_date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
                end_date: Some(Utc.with_ymd_and_hms(2027, 6, 1, 0, 0, 0).unwrap()),
                status: "In Warranty".to_string(),
                is_valid: true,
                service_level: Some("ProSupport Next Business Day".to_string()),
                vendor: VendorType::Dell,
            },
        }
    }

    pub fn with_service_tag(mut self, service_tag: impl Into<String>) -> Self {
        self.info.service_tag = service_tag.into();
        self
    }

    pub fn with_vendor(mut self, vendor: VendorType) -> Self {
        self.info.vendor = vendor;
        self
    }

    pub fn invalid(mut self) -> Self {
        self.info.is_valid = false;
        self.info.status = "Expired".to_string();
        self
    }

    pub fn build(self) -> WarrantyInfo {
        self.info
    }
}
