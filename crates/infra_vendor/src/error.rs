//! Transport and HTTP status mapping
//!
//! Translates reqwest failures and vendor HTTP statuses into the unified
//! `PortError` taxonomy so every adapter operation reports failures the same
//! way.

use core_kernel::{PortError, VendorType};
use reqwest::StatusCode;

use crate::dto::VendorErrorBody;

/// Default seconds to suggest waiting when a 429 carries no Retry-After
const DEFAULT_RETRY_AFTER_SECS: u64 = 30;

/// Maps a reqwest transport failure onto the port taxonomy
pub(crate) fn transport_error(
    vendor: VendorType,
    operation: &str,
    timeout_secs: u64,
    err: reqwest::Error,
) -> PortError {
    if err.is_timeout() {
        return PortError::Timeout {
            operation: operation.to_string(),
            duration_ms: timeout_secs * 1000,
        };
    }

    PortError::Connection {
        message: format!("{vendor} {operation}: {err}"),
        source: Some(Box::new(err)),
    }
}

/// Maps a non-success HTTP response onto the port taxonomy
///
/// Consumes the response body to recover the vendor's error code and message
/// when one is present.
pub(crate) async fn error_from_status(
    vendor: VendorType,
    operation: &'static str,
    response: reqwest::Response,
) -> PortError {
    let status = response.status();
    let path = response.url().path().to_string();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let body = response.text().await.unwrap_or_default();
    let vendor_body: VendorErrorBody = serde_json::from_str(&body).unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortError::Unauthorized {
            message: vendor_body
                .message
                .unwrap_or_else(|| format!("{vendor} rejected the credentials ({status})")),
        },
        StatusCode::NOT_FOUND => PortError::not_found(operation, path),
        StatusCode::TOO_MANY_REQUESTS => PortError::RateLimited {
            retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        status if status.is_server_error() => PortError::ServiceUnavailable {
            service: vendor.to_string(),
        },
        status if status.is_client_error() => PortError::VendorRejected {
            code: vendor_body.code,
            message: vendor_body
                .message
                .unwrap_or_else(|| format!("{vendor} returned HTTP {status} for {operation}")),
        },
        status => PortError::internal(format!(
            "{vendor} returned unexpected HTTP {status} for {operation}"
        )),
    }
}
