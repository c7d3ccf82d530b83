//! Vendor Infrastructure Layer
//!
//! This crate implements the `VendorPort` trait over HTTP for the supported
//! hardware vendors. There is one adapter, `VendorHttpAdapter`, parameterized
//! by a per-vendor `VendorProfile` that captures everything the vendors
//! legitimately disagree on: endpoint paths, attachment-count bounds,
//! multipart field naming, and whether the login payload carries OAuth2
//! client credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::ExternalConfig;
//! use infra_vendor::VendorHttpAdapter;
//!
//! let adapter = VendorHttpAdapter::dell(ExternalConfig::simple(
//!     "https://apigtw.dell.com/techdirect",
//! ))?;
//! adapter.authenticate(&credentials, None).await?;
//! let claims = adapter.list_claims(None, None).await?;
//! ```

pub mod adapter;
pub mod dto;
mod error;
pub mod multipart;
pub mod profile;

pub use adapter::VendorHttpAdapter;
pub use multipart::{encode_claim, FormPart, PartBody, IMAGE_CONTENT_TYPE};
pub use profile::{AttachmentPolicy, VendorProfile};
