//! Vendor identity
//!
//! The portal talks to more than one hardware vendor's self-dispatch system.
//! `VendorType` tags every claim, warranty record, and adapter with the vendor
//! that produced it, so cross-vendor mixing is detectable at the type level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported self-dispatch vendors
///
/// Adding a vendor means adding a new adapter profile; the UI contract and the
/// port trait stay unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorType {
    Dell,
    Lenovo,
}

impl VendorType {
    /// Returns all known vendors
    pub fn all() -> &'static [VendorType] {
        &[VendorType::Dell, VendorType::Lenovo]
    }

    /// Human-readable vendor name
    pub fn name(&self) -> &'static str {
        match self {
            VendorType::Dell => "Dell",
            VendorType::Lenovo => "Lenovo",
        }
    }
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized vendor name
#[derive(Debug, Error)]
#[error("Unknown vendor: {0}")]
pub struct UnknownVendor(pub String);

impl FromStr for VendorType {
    type Err = UnknownVendor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dell" => Ok(VendorType::Dell),
            "lenovo" => Ok(VendorType::Lenovo),
            other => Err(UnknownVendor(other.to_string())),
        }
    }
}
