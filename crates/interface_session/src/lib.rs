//! Session Orchestration Layer
//!
//! This crate drives the portal's dashboard flows over the vendor port:
//! login, claim listing with filters, warranty checks, and claim submission.
//! A GUI (or any other presentation layer) renders the results and calls the
//! session's operations; it never talks to a vendor adapter directly.
//!
//! Construction is explicit: `build_port` turns environment-driven
//! configuration into the right adapter, and `DispatchSession::login`
//! receives that port as an input. There is no process-wide registry.

pub mod config;
pub mod session;

pub use config::{build_port, PortalConfig, VendorEndpointConfig};
pub use session::{DispatchSession, SessionPhase};
