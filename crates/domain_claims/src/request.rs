//! Claim-creation request
//!
//! Constructed by the claim form, consumed exactly once by a vendor port's
//! `create_claim`, then discarded. Field-presence rules are checked locally
//! before any network call; per-vendor attachment-count policies live with
//! the vendor adapters, since they are vendor contract, not domain shape.

use core_kernel::PortError;
use validator::Validate;

/// An image attached to a new claim
///
/// Ordered within the request; encoding must preserve both order and bytes.
/// The file name and optional description travel with the binary part.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    /// Original file name, sent as the multipart part's file name
    pub file_name: String,
    /// Optional free-text description supplied by the technician
    pub description: Option<String>,
    /// Raw image bytes
    pub content: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            description: None,
            content,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request to create a new claim against a vendor system
#[derive(Debug, Clone, Validate)]
pub struct CreateClaimRequest {
    /// Service tag / serial the claim is filed against
    #[validate(length(min = 1, message = "service tag is required"))]
    pub service_tag: String,
    /// Problem description
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Part number to dispatch, if known
    pub part_number: Option<String>,
    /// Serial number of the failing part, if known
    pub serial_number: Option<String>,
    /// Vendor-specific issue category, if known
    pub issue_category: Option<String>,
    /// Technician's email address
    #[validate(email(message = "technician email is not a valid address"))]
    pub tech_email: Option<String>,
    /// On-site contact name
    pub primary_contact_name: Option<String>,
    /// On-site contact phone
    pub primary_contact_phone: Option<String>,
    /// Troubleshooting already performed
    pub troubleshooting_notes: Option<String>,
    /// Customer purchase-order reference
    pub reference_po_number: Option<String>,
    /// Whether an on-site technician is requested
    pub request_on_site_technician: bool,
    /// Image attachments, in submission order
    pub images: Vec<ImageAttachment>,
}

impl CreateClaimRequest {
    /// Creates a request with the required fields; everything else defaults
    pub fn new(service_tag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            service_tag: service_tag.into(),
            description: description.into(),
            part_number: None,
            serial_number: None,
            issue_category: None,
            tech_email: None,
            primary_contact_name: None,
            primary_contact_phone: None,
            troubleshooting_notes: None,
            reference_po_number: None,
            request_on_site_technician: false,
            images: Vec::new(),
        }
    }

    /// Appends an image attachment, preserving submission order
    pub fn attach_image(mut self, image: ImageAttachment) -> Self {
        self.images.push(image);
        self
    }

    /// Validates the text fields, mapping failures into the port error
    /// taxonomy so callers see the same shape for every local rejection
    pub fn validate_local(&self) -> Result<(), PortError> {
        self.validate().map_err(|errors| {
            let field = errors
                .field_errors()
                .keys()
                .next()
                .map(|field| field.to_string());
            PortError::Validation {
                message: format!("invalid claim request: {errors}"),
                field,
            }
        })
    }
}
