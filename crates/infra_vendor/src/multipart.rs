//! Multipart encoding for claim creation
//!
//! A claim submission mixes text fields and binary image parts in one
//! multipart body. Encoding happens in two stages: `encode_claim` produces an
//! inspectable list of `FormPart`s, and `into_form` converts that list into
//! the transport form. The intermediate list is what makes "N images in, N
//! binary parts out, in order" directly testable without a server.

use core_kernel::PortError;
use domain_claims::CreateClaimRequest;

use crate::profile::VendorProfile;

/// Content type stamped on every image part
///
/// Sources are normalized to JPEG at the boundary regardless of the original
/// file format; the vendors' intake pipelines expect a single image type.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Body of a single multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    Bytes {
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    },
}

/// One field of the multipart request, in submission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub body: PartBody,
}

impl FormPart {
    fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: PartBody::Text(value.into()),
        }
    }

    /// True for binary image parts
    pub fn is_binary(&self) -> bool {
        matches!(self.body, PartBody::Bytes { .. })
    }
}

/// Encodes a claim request into an ordered list of multipart fields
///
/// Text fields come first; image parts follow in submission order, named
/// positionally from the profile's prefix (`image1`, `image2`, ...). An
/// image's optional description travels as a companion text field named
/// `<field>_description`.
pub fn encode_claim(profile: &VendorProfile, request: &CreateClaimRequest) -> Vec<FormPart> {
    let mut parts = vec![
        FormPart::text("service_tag", &request.service_tag),
        FormPart::text("description", &request.description),
    ];

    push_optional(&mut parts, "part_number", &request.part_number);
    push_optional(&mut parts, "serial_number", &request.serial_number);
    push_optional(&mut parts, "issue_category", &request.issue_category);
    push_optional(&mut parts, "tech_email", &request.tech_email);
    push_optional(&mut parts, "primary_contact_name", &request.primary_contact_name);
    push_optional(&mut parts, "primary_contact_phone", &request.primary_contact_phone);
    push_optional(&mut parts, "troubleshooting_notes", &request.troubleshooting_notes);
    push_optional(&mut parts, "reference_po_number", &request.reference_po_number);
    parts.push(FormPart::text(
        "request_on_site_technician",
        request.request_on_site_technician.to_string(),
    ));

    for (index, image) in request.images.iter().enumerate() {
        let field = format!("{}{}", profile.image_field_prefix, index + 1);
        parts.push(FormPart {
            name: field.clone(),
            body: PartBody::Bytes {
                file_name: image.file_name.clone(),
                content_type: IMAGE_CONTENT_TYPE.to_string(),
                data: image.content.clone(),
            },
        });
        if let Some(description) = &image.description {
            parts.push(FormPart::text(format!("{field}_description"), description));
        }
    }

    parts
}

/// Converts the encoded parts into a transport form
pub fn into_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, PortError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part.body {
            PartBody::Text(value) => form.text(part.name, value),
            PartBody::Bytes {
                file_name,
                content_type,
                data,
            } => {
                let binary = reqwest::multipart::Part::bytes(data)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| {
                        PortError::internal(format!("invalid part content type: {e}"))
                    })?;
                form.part(part.name, binary)
            }
        };
    }
    Ok(form)
}

fn push_optional(parts: &mut Vec<FormPart>, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        parts.push(FormPart::text(name, value));
    }
}
