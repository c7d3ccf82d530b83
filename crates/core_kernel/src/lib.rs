//! Core Kernel - Foundational types for the self-dispatch portal
//!
//! This crate provides the fundamental building blocks used across all domain
//! and infrastructure modules:
//! - Vendor identity (`VendorType`)
//! - The unified port error taxonomy (`PortError`)
//! - Ports-and-adapters infrastructure (marker traits, external system
//!   configuration, health checking, operation metadata)

pub mod error;
pub mod ports;
pub mod vendor;

pub use error::PortError;
pub use ports::{
    AdapterHealth, DomainPort, ExternalConfig, HealthCheckResult, HealthCheckable,
    OperationMetadata,
};
pub use vendor::{UnknownVendor, VendorType};
