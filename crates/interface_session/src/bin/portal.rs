//! Self-Dispatch Portal - Smoke Binary
//!
//! Exercises the full stack against a configured vendor gateway: load
//! configuration, build the adapter, log in, list claims, and optionally
//! check a warranty. Useful for verifying connectivity and credentials
//! without a GUI.
//!
//! # Usage
//!
//! ```bash
//! PORTAL_VENDOR=dell \
//! PORTAL_USERNAME=tech01 \
//! PORTAL_PASSWORD=... \
//! PORTAL_DELL__BASE_URL=https://apigtw.dell.com/techdirect \
//! PORTAL_DELL__CLIENT_ID=... \
//! PORTAL_DELL__CLIENT_SECRET=... \
//! cargo run --bin portal
//! ```
//!
//! # Environment Variables
//!
//! * `PORTAL_VENDOR` - `dell` or `lenovo` (default: dell)
//! * `PORTAL_USERNAME` / `PORTAL_PASSWORD` - technician credentials (required)
//! * `PORTAL_SERVICE_TAG` - when set, also runs a warranty check
//! * `PORTAL_DELL__*` / `PORTAL_LENOVO__*` - gateway settings per vendor
//! * `PORTAL_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use core_kernel::VendorType;
use domain_claims::UserCredentials;
use interface_session::{build_port, DispatchSession, PortalConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = PortalConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    let vendor: VendorType = std::env::var("PORTAL_VENDOR")
        .unwrap_or_else(|_| "dell".to_string())
        .parse()?;
    let username = std::env::var("PORTAL_USERNAME")?;
    let password = std::env::var("PORTAL_PASSWORD")?;

    tracing::info!(%vendor, %username, "Opening self-dispatch session");

    let port = build_port(vendor, &config)?;
    let session = DispatchSession::login(port, UserCredentials::new(vendor, username, password))
        .await?;

    let claims = session.refresh_claims().await?;
    tracing::info!(count = claims.len(), "Fetched claims");
    for claim in &claims {
        tracing::info!(
            claim_id = %claim.claim_id,
            status = %claim.status,
            description = %claim.description,
            "Claim"
        );
    }

    if let Ok(service_tag) = std::env::var("PORTAL_SERVICE_TAG") {
        let info = session.check_warranty(&service_tag).await?;
        tracing::info!(
            service_tag = %info.service_tag,
            valid = info.is_valid,
            status = %info.status,
            "Warranty checked"
        );
    }

    session.logout();
    Ok(())
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
