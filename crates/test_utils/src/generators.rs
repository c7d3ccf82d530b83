//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_claims::{CreateClaimRequest, ImageAttachment};
use proptest::prelude::*;

/// Strategy for generating plausible service tags
pub fn service_tag_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9]{5,10}"
}

/// Strategy for generating technician usernames
pub fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,8}[0-9]{0,3}"
}

/// Strategy for generating non-empty problem descriptions
pub fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{5,60}"
}

/// Strategy for generating image attachments with distinct byte payloads
pub fn image_strategy() -> impl Strategy<Value = ImageAttachment> {
    (any::<u8>(), "[a-z]{3,10}").prop_map(|(seed, stem)| {
        ImageAttachment::new(
            format!("{stem}.jpg"),
            vec![0xFF, 0xD8, seed, 0xFF, 0xD9],
        )
    })
}

/// Strategy for generating valid claim requests carrying `count` images
pub fn claim_request_strategy(
    counts: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = CreateClaimRequest> {
    (
        service_tag_strategy(),
        description_strategy(),
        proptest::collection::vec(image_strategy(), counts),
    )
        .prop_map(|(service_tag, description, images)| {
            let mut request = CreateClaimRequest::new(service_tag, description);
            request.images = images;
            request
        })
}
