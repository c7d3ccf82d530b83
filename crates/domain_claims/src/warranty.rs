//! Warranty lookup results

use chrono::{DateTime, Utc};
use core_kernel::VendorType;
use serde::{Deserialize, Serialize};

/// Result of a single warranty check
///
/// Transient: one value per `check_warranty` call, never persisted.
/// `is_valid == false` encodes "no record found for this service tag" —
/// transport and parse failures are reported as errors instead, so the two
/// cases stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantyInfo {
    /// Service tag the lookup was performed for
    pub service_tag: String,
    /// Product name as the vendor reports it
    pub product_name: String,
    /// Coverage start, when reported
    pub start_date: Option<DateTime<Utc>>,
    /// Coverage end, when reported
    pub end_date: Option<DateTime<Utc>>,
    /// Vendor-defined status text ("In Warranty", "Expired", ...)
    pub status: String,
    /// Whether the vendor found an active entitlement
    pub is_valid: bool,
    /// Service level / entitlement description, when reported
    pub service_level: Option<String>,
    /// Which vendor system answered; stamped by the adapter
    pub vendor: VendorType,
}

impl WarrantyInfo {
    /// Builds the "no record found" result for a lookup that came back empty
    pub fn no_record(service_tag: impl Into<String>, vendor: VendorType) -> Self {
        Self {
            service_tag: service_tag.into(),
            product_name: String::new(),
            start_date: None,
            end_date: None,
            status: "Not Found".to_string(),
            is_valid: false,
            service_level: None,
            vendor,
        }
    }
}
