//! Tests for the port error taxonomy

use core_kernel::PortError;

#[test]
fn test_not_found_error() {
    let error = PortError::not_found("Claim", "SR123");
    assert!(error.is_not_found());
    assert!(!error.is_transient());
    assert!(error.to_string().contains("Claim"));
    assert!(error.to_string().contains("SR123"));
}

#[test]
fn test_transient_errors() {
    let timeout = PortError::Timeout {
        operation: "list_claims".to_string(),
        duration_ms: 30_000,
    };
    assert!(timeout.is_transient());

    let rate_limited = PortError::RateLimited {
        retry_after_secs: 60,
    };
    assert!(rate_limited.is_transient());

    let unavailable = PortError::ServiceUnavailable {
        service: "Dell".to_string(),
    };
    assert!(unavailable.is_transient());

    let connection = PortError::connection("dns lookup failed");
    assert!(connection.is_transient());
}

#[test]
fn test_non_transient_errors() {
    assert!(!PortError::validation("empty username").is_transient());
    assert!(!PortError::unauthorized("bad password").is_transient());
    assert!(!PortError::malformed("missing token field").is_transient());
    assert!(!PortError::vendor_rejected(Some("DX-401".into()), "part not eligible").is_transient());
}

#[test]
fn test_validation_error_carries_field() {
    let error = PortError::validation_field("at least one image required", "images");
    assert!(error.is_validation());
    match error {
        PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("images")),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn test_unauthorized_distinct_from_connection() {
    // The login path must let callers tell a rejected password apart from an
    // unreachable server.
    let rejected = PortError::unauthorized("invalid credentials");
    let unreachable = PortError::connection("connect timed out");

    assert!(!rejected.is_transient());
    assert!(unreachable.is_transient());
}

#[test]
fn test_vendor_rejected_keeps_code() {
    let error = PortError::vendor_rejected(Some("DISP-22".into()), "duplicate dispatch");
    match &error {
        PortError::VendorRejected { code, message } => {
            assert_eq!(code.as_deref(), Some("DISP-22"));
            assert!(message.contains("duplicate"));
        }
        other => panic!("unexpected variant: {other:?}"),
    }
    assert!(error.to_string().contains("duplicate dispatch"));
}

#[test]
fn test_every_error_renders_a_message() {
    let errors = vec![
        PortError::not_found("Warranty", "UNKNOWN"),
        PortError::validation("description is required"),
        PortError::unauthorized("session expired"),
        PortError::connection("refused"),
        PortError::Timeout {
            operation: "create_claim".into(),
            duration_ms: 30_000,
        },
        PortError::RateLimited {
            retry_after_secs: 5,
        },
        PortError::ServiceUnavailable {
            service: "Lenovo".into(),
        },
        PortError::malformed("claims envelope is not an array"),
        PortError::vendor_rejected(None, "rejected"),
        PortError::internal("unexpected"),
    ];

    for error in errors {
        assert!(!error.to_string().is_empty());
    }
}
