//! Tests for the self-dispatch claims domain

use chrono::{TimeZone, Utc};

use core_kernel::VendorType;
use domain_claims::{Claim, CreateClaimRequest, ImageAttachment, WarrantyInfo};

fn sample_claim() -> Claim {
    Claim {
        claim_id: "SR123456789".to_string(),
        service_tag: "7GHJK12".to_string(),
        description: "Keyboard stopped responding after liquid spill".to_string(),
        created_date: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        status: "Open".to_string(),
        created_by: "tech01".to_string(),
        vendor: VendorType::Dell,
        image_paths: None,
        part_number: Some("KB-0FW76".to_string()),
        serial_number: None,
    }
}

mod claim_tests {
    use super::*;

    #[test]
    fn test_matches_text_on_claim_id() {
        let claim = sample_claim();
        assert!(claim.matches_text("sr1234"));
    }

    #[test]
    fn test_matches_text_is_case_insensitive() {
        let claim = sample_claim();
        assert!(claim.matches_text("KEYBOARD"));
        assert!(claim.matches_text("keyboard"));
    }

    #[test]
    fn test_matches_text_empty_needle_matches_all() {
        let claim = sample_claim();
        assert!(claim.matches_text(""));
        assert!(claim.matches_text("   "));
    }

    #[test]
    fn test_matches_text_misses() {
        let claim = sample_claim();
        assert!(!claim.matches_text("battery"));
    }

    #[test]
    fn test_created_by_user() {
        let claim = sample_claim();
        assert!(claim.created_by_user("TECH01"));
        assert!(!claim.created_by_user("tech02"));
    }

    #[test]
    fn test_claim_serde_round_trip() {
        let claim = sample_claim();
        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back.claim_id, claim.claim_id);
        assert_eq!(back.vendor, VendorType::Dell);
        assert_eq!(back.created_date, claim.created_date);
    }
}

mod warranty_tests {
    use super::*;

    #[test]
    fn test_no_record_is_invalid() {
        let info = WarrantyInfo::no_record("UNKNOWN", VendorType::Lenovo);
        assert!(!info.is_valid);
        assert_eq!(info.service_tag, "UNKNOWN");
        assert_eq!(info.vendor, VendorType::Lenovo);
        assert!(info.start_date.is_none());
        assert!(info.end_date.is_none());
    }
}

mod request_tests {
    use super::*;

    #[test]
    fn test_minimal_request_is_valid() {
        let request = CreateClaimRequest::new("7GHJK12", "Fan makes grinding noise");
        assert!(request.validate_local().is_ok());
    }

    #[test]
    fn test_empty_service_tag_rejected() {
        let request = CreateClaimRequest::new("", "Fan makes grinding noise");
        let err = request.validate_local().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_description_rejected() {
        let request = CreateClaimRequest::new("7GHJK12", "");
        let err = request.validate_local().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_tech_email_rejected() {
        let mut request = CreateClaimRequest::new("7GHJK12", "Fan makes grinding noise");
        request.tech_email = Some("not-an-email".to_string());
        let err = request.validate_local().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_valid_tech_email_accepted() {
        let mut request = CreateClaimRequest::new("7GHJK12", "Fan makes grinding noise");
        request.tech_email = Some("tech01@example.com".to_string());
        assert!(request.validate_local().is_ok());
    }

    #[test]
    fn test_attach_image_preserves_order() {
        let request = CreateClaimRequest::new("7GHJK12", "Cracked hinge")
            .attach_image(ImageAttachment::new("front.jpg", vec![1, 2, 3]))
            .attach_image(ImageAttachment::new("side.jpg", vec![4, 5, 6]).with_description("left side"))
            .attach_image(ImageAttachment::new("back.jpg", vec![7, 8, 9]));

        let names: Vec<_> = request.images.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["front.jpg", "side.jpg", "back.jpg"]);
        assert_eq!(request.images[1].description.as_deref(), Some("left side"));
        assert_eq!(request.images[2].content, vec![7, 8, 9]);
    }

    #[test]
    fn test_validation_does_not_bound_attachment_count() {
        // Attachment-count policy is vendor contract and lives with the
        // adapters; the domain request accepts any count.
        let mut request = CreateClaimRequest::new("7GHJK12", "Cracked hinge");
        for i in 0..12 {
            request = request.attach_image(ImageAttachment::new(format!("img{i}.jpg"), vec![0]));
        }
        assert!(request.validate_local().is_ok());
    }
}
