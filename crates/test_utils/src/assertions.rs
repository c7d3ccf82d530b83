//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{PortError, VendorType};
use domain_claims::Claim;

/// Asserts that every claim carries the expected vendor stamp
pub fn assert_all_stamped(claims: &[Claim], vendor: VendorType) {
    for claim in claims {
        assert_eq!(
            claim.vendor, vendor,
            "claim {} is stamped {:?}, expected {:?}",
            claim.claim_id, claim.vendor, vendor
        );
    }
}

/// Asserts that two listings contain the same logical set of claims
///
/// Compares claim identifiers order-insensitively, since the contract does
/// not guarantee vendor-side ordering.
pub fn assert_same_claim_set(first: &[Claim], second: &[Claim]) {
    let mut first_ids: Vec<_> = first.iter().map(|c| c.claim_id.as_str()).collect();
    let mut second_ids: Vec<_> = second.iter().map(|c| c.claim_id.as_str()).collect();
    first_ids.sort_unstable();
    second_ids.sort_unstable();
    assert_eq!(
        first_ids, second_ids,
        "listings differ: {first_ids:?} vs {second_ids:?}"
    );
}

/// Asserts that an error is a local validation failure on the given field
pub fn assert_validation_on_field(error: &PortError, expected_field: &str) {
    match error {
        PortError::Validation { field, .. } => {
            assert_eq!(
                field.as_deref(),
                Some(expected_field),
                "validation error on unexpected field: {field:?}"
            );
        }
        other => panic!("expected a validation error, got: {other:?}"),
    }
}

/// Asserts that an error is the unauthorized kind
pub fn assert_unauthorized(error: &PortError) {
    assert!(
        matches!(error, PortError::Unauthorized { .. }),
        "expected Unauthorized, got: {error:?}"
    );
}
