//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the portal test suite: sample vendor
//! payloads shaped like the real gateways' JSON, image bytes, and login
//! credentials. Fixtures are consistent and predictable for unit tests.

use core_kernel::VendorType;
use domain_claims::UserCredentials;
use serde_json::{json, Value};

/// Sample vendor JSON payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// Successful login response carrying an opaque token
    pub fn auth_token(token: &str) -> Value {
        json!({ "token": token })
    }

    /// Login rejection body
    pub fn auth_rejected() -> Value {
        json!({ "code": "AUTH-401", "message": "invalid credentials" })
    }

    /// Dell claims listing, wrapped in a `claims` envelope
    pub fn dell_claims() -> Value {
        json!({
            "claims": [
                {
                    "dispatch_number": "SR100000001",
                    "service_tag": "7GHJK12",
                    "problem_description": "Display flickers at low brightness",
                    "created": "2025-02-10T14:05:00Z",
                    "status": "Open",
                    "created_by": "tech01",
                    "part_number": "LCD-0C4T1"
                },
                {
                    "dispatch_number": "SR100000002",
                    "service_tag": "9XKWP34",
                    "problem_description": "Battery swelling reported",
                    "created": "2025-02-12T09:41:00Z",
                    "status": "Closed",
                    "created_by": "tech02"
                }
            ]
        })
    }

    /// Lenovo claims listing, returned as a bare array
    pub fn lenovo_claims() -> Value {
        json!([
            {
                "code": "LNV-001",
                "serial": "PF0ABCDE",
                "problem_description": "Sample Lenovo claim",
                "created": "2025-02-11T08:00:00Z",
                "status": "Open",
                "created_by": "tech01"
            }
        ])
    }

    /// Active warranty record
    pub fn warranty_active(service_tag: &str) -> Value {
        json!({
            "service_tag": service_tag,
            "product_name": "Latitude 5440",
            "start_date": "2024-06-01T00:00:00Z",
            "end_date": "2027-06-01T00:00:00Z",
            "status": "In Warranty",
            "service_level": "ProSupport Next Business Day"
        })
    }

    /// Claim-creation acknowledgement
    pub fn dispatch_created(claim_id: &str) -> Value {
        json!({
            "dispatch_number": claim_id,
            "status": "Open",
            "created": "2025-03-01T10:00:00Z"
        })
    }

    /// Vendor business rejection body
    pub fn dispatch_rejected(code: &str, message: &str) -> Value {
        json!({ "code": code, "message": message })
    }
}

/// Image byte fixtures
pub struct ImageFixtures;

impl ImageFixtures {
    /// Minimal JPEG byte stream (SOI .. EOI), distinct per seed
    pub fn jpeg(seed: u8) -> Vec<u8> {
        vec![0xFF, 0xD8, 0xFF, 0xE0, seed, seed, 0xFF, 0xD9]
    }
}

/// Login credential fixtures
pub struct CredentialFixtures;

impl CredentialFixtures {
    pub fn dell_tech() -> UserCredentials {
        UserCredentials::new(VendorType::Dell, "tech01", "correct-horse")
    }

    pub fn lenovo_tech() -> UserCredentials {
        UserCredentials::new(VendorType::Lenovo, "tech01", "correct-horse")
    }

    pub fn empty_username(vendor: VendorType) -> UserCredentials {
        UserCredentials::new(vendor, "", "correct-horse")
    }
}
