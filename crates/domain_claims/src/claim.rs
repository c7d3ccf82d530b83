//! Claim entity

use chrono::{DateTime, Utc};
use core_kernel::VendorType;
use serde::{Deserialize, Serialize};

/// A vendor-tracked service claim (e.g. a repair dispatch)
///
/// Claims are always sourced live from the vendor port and are immutable once
/// received; the UI re-fetches the list to observe status changes. The
/// `claim_id` is vendor-assigned and unique within that vendor, and `status`
/// is vendor-defined free text ("Open", "Closed", ...) — the portal does not
/// interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Vendor-assigned claim identifier
    pub claim_id: String,
    /// Service tag / serial of the hardware the claim is filed against
    pub service_tag: String,
    /// Problem description
    pub description: String,
    /// When the claim was created on the vendor side
    pub created_date: DateTime<Utc>,
    /// Vendor-defined status text
    pub status: String,
    /// Identity that filed the claim
    pub created_by: String,
    /// Which vendor system this claim lives in; stamped by the adapter
    /// regardless of what the raw payload carries
    pub vendor: VendorType,
    /// Paths of images attached to the claim, when the vendor reports them
    pub image_paths: Option<Vec<String>>,
    /// Part number being dispatched, if any
    pub part_number: Option<String>,
    /// Serial number of the replacement part, if any
    pub serial_number: Option<String>,
}

impl Claim {
    /// Case-insensitive free-text match across the claim's visible fields
    ///
    /// Backs the dashboard's local filter box; an empty needle matches
    /// everything.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            self.claim_id.as_str(),
            self.service_tag.as_str(),
            self.description.as_str(),
            self.status.as_str(),
            self.created_by.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// True if this claim was filed by the given user
    pub fn created_by_user(&self, username: &str) -> bool {
        self.created_by.eq_ignore_ascii_case(username)
    }
}
