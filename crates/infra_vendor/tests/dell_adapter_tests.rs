//! Dell adapter tests
//!
//! Exercises the HTTP adapter against a wiremock gateway: token handling,
//! vendor stamping, the attachment-count policy, and multipart encoding on
//! the wire.

use secrecy::SecretString;
use serde_json::json;

use core_kernel::{AdapterHealth, ExternalConfig, HealthCheckable, PortError, VendorType};
use domain_claims::VendorPort;
use infra_vendor::VendorHttpAdapter;
use test_utils::{
    assert_all_stamped, assert_same_claim_set, assert_unauthorized, assert_validation_on_field,
    init_test_tracing, CreateClaimRequestBuilder, CredentialFixtures, PayloadFixtures,
    VendorMockServer,
};

fn dell_config(base_url: String) -> ExternalConfig {
    ExternalConfig {
        base_url,
        client_id: Some("portal-client".to_string()),
        client_secret: Some(SecretString::from("portal-secret".to_string())),
        timeout_secs: 5,
        headers: Default::default(),
    }
}

async fn authenticated_adapter(server: &VendorMockServer, token: &str) -> VendorHttpAdapter {
    server.mount_login(token).await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();
    adapter
        .authenticate(&CredentialFixtures::dell_tech(), None)
        .await
        .unwrap();
    adapter
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

#[tokio::test]
async fn login_sends_client_credentials_and_stores_bearer_token() {
    init_test_tracing();
    let server = VendorMockServer::start().await;
    server
        .mount_login_expecting(
            json!({
                "username": "tech01",
                "client_id": "portal-client",
                "grant_type": "password"
            }),
            "abc",
        )
        .await;
    server.mount_claims("abc", PayloadFixtures::dell_claims()).await;

    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();
    adapter
        .authenticate(&CredentialFixtures::dell_tech(), None)
        .await
        .unwrap();

    // The claims mount only matches `Authorization: Bearer abc`.
    let claims = adapter.list_claims(None, None).await.unwrap();
    assert_eq!(claims.len(), 2);
    assert_all_stamped(&claims, VendorType::Dell);
}

#[tokio::test]
async fn login_without_configured_client_credentials_fails_locally() {
    let server = VendorMockServer::start().await;
    let config = ExternalConfig::simple(server.uri());
    let adapter = VendorHttpAdapter::dell(config).unwrap();

    let err = adapter
        .authenticate(&CredentialFixtures::dell_tech(), None)
        .await
        .unwrap_err();
    assert_validation_on_field(&err, "client_id");
    assert!(server.received_requests().await.is_empty());
}

#[tokio::test]
async fn login_with_empty_username_is_rejected_before_any_call() {
    let server = VendorMockServer::start().await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();

    let err = adapter
        .authenticate(&CredentialFixtures::empty_username(VendorType::Dell), None)
        .await
        .unwrap_err();
    assert_validation_on_field(&err, "username");
    assert!(server.received_requests().await.is_empty());
}

#[tokio::test]
async fn rejected_login_is_unauthorized_not_connection() {
    let server = VendorMockServer::start().await;
    server.mount_login_rejected().await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();

    let err = adapter
        .authenticate(&CredentialFixtures::dell_tech(), None)
        .await
        .unwrap_err();
    assert_unauthorized(&err);
    assert!(!err.is_transient());
}

#[tokio::test]
async fn login_response_without_token_is_malformed() {
    let server = VendorMockServer::start().await;
    server.mount_login_without_token().await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();

    let err = adapter
        .authenticate(&CredentialFixtures::dell_tech(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::MalformedResponse { .. }));
}

#[tokio::test]
async fn list_claims_before_login_is_unauthorized() {
    let server = VendorMockServer::start().await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();

    let err = adapter.list_claims(None, None).await.unwrap_err();
    assert_unauthorized(&err);
    assert!(server.received_requests().await.is_empty());
}

#[tokio::test]
async fn list_claims_is_idempotent_across_identical_calls() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server.mount_claims("abc", PayloadFixtures::dell_claims()).await;

    let first = adapter.list_claims(None, None).await.unwrap();
    let second = adapter.list_claims(None, None).await.unwrap();
    assert_same_claim_set(&first, &second);
}

#[tokio::test]
async fn user_filter_is_passed_through_as_query_parameter() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server
        .mount_claims_for_user("abc", "tech02", PayloadFixtures::dell_claims())
        .await;

    let claims = adapter
        .list_claims(Some("tech02".to_string()), None)
        .await
        .unwrap();
    assert_eq!(claims.len(), 2);
    // The expect(1) on the filtered mount verifies the query parameter when
    // the server is dropped.
}

#[tokio::test]
async fn create_claim_with_zero_images_is_rejected_before_any_http_call() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server.mount_dispatch_never().await;

    let request = CreateClaimRequestBuilder::new().with_image_count(0).build();
    let err = adapter.create_claim(request, None).await.unwrap_err();
    assert_validation_on_field(&err, "images");
}

#[tokio::test]
async fn create_claim_with_nine_images_is_rejected_before_any_http_call() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server.mount_dispatch_never().await;

    let request = CreateClaimRequestBuilder::new().with_image_count(9).build();
    let err = adapter.create_claim(request, None).await.unwrap_err();
    assert_validation_on_field(&err, "images");
}

#[tokio::test]
async fn create_claim_with_eight_images_produces_eight_positional_parts() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server
        .mount_dispatch(PayloadFixtures::dispatch_created("SR200000001"))
        .await;

    let request = CreateClaimRequestBuilder::new().with_image_count(8).build();
    let claim = adapter.create_claim(request, None).await.unwrap();
    assert_eq!(claim.claim_id, "SR200000001");
    assert_eq!(claim.vendor, VendorType::Dell);
    // The creation ack carried no creator; the adapter fills in the
    // authenticated identity.
    assert_eq!(claim.created_by, "tech01");

    let dispatch = server
        .received_requests()
        .await
        .into_iter()
        .find(|r| r.method.as_str() == "POST" && r.url.path() == "/claims")
        .expect("dispatch request was sent");

    for i in 1..=8 {
        let field = format!("name=\"image{i}\"");
        assert_eq!(
            count_occurrences(&dispatch.body, field.as_bytes()),
            1,
            "expected exactly one {field} part"
        );
    }
    assert_eq!(
        count_occurrences(&dispatch.body, b"name=\"image9\""),
        0,
        "no ninth image part"
    );
    assert_eq!(
        count_occurrences(&dispatch.body, b"content-type: image/jpeg")
            + count_occurrences(&dispatch.body, b"Content-Type: image/jpeg"),
        8,
        "every image part is normalized to JPEG"
    );
    assert_eq!(count_occurrences(&dispatch.body, b"name=\"service_tag\""), 1);
}

#[tokio::test]
async fn vendor_rejection_surfaces_code_and_message() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server
        .mount_dispatch_rejected(
            422,
            PayloadFixtures::dispatch_rejected("DISP-22", "duplicate dispatch for service tag"),
        )
        .await;

    let request = CreateClaimRequestBuilder::new().with_image_count(1).build();
    let err = adapter.create_claim(request, None).await.unwrap_err();
    match err {
        PortError::VendorRejected { code, message } => {
            assert_eq!(code.as_deref(), Some("DISP-22"));
            assert!(message.contains("duplicate"));
        }
        other => panic!("expected VendorRejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn warranty_lookup_maps_entitlement_fields() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server
        .mount_warranty("7GHJK12", PayloadFixtures::warranty_active("7GHJK12"))
        .await;

    let info = adapter.check_warranty("7GHJK12", None).await.unwrap();
    assert!(info.is_valid);
    assert_eq!(info.vendor, VendorType::Dell);
    assert_eq!(info.product_name, "Latitude 5440");
    assert!(info.service_level.is_some());
}

#[tokio::test]
async fn warranty_lookup_for_unknown_tag_is_invalid_not_an_error() {
    let server = VendorMockServer::start().await;
    let adapter = authenticated_adapter(&server, "abc").await;
    server.mount_warranty_missing("UNKNOWN").await;

    let info = adapter.check_warranty("UNKNOWN", None).await.unwrap();
    assert!(!info.is_valid);
    assert_eq!(info.service_tag, "UNKNOWN");
}

#[tokio::test]
async fn vendor_type_is_always_dell() {
    let server = VendorMockServer::start().await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();
    assert_eq!(adapter.vendor_type(), VendorType::Dell);
}

#[tokio::test]
async fn health_check_reports_a_reachable_gateway() {
    let server = VendorMockServer::start().await;
    let adapter = VendorHttpAdapter::dell(dell_config(server.uri())).unwrap();

    let result = adapter.health_check().await;
    assert_eq!(result.adapter_id, "dell-http-adapter");
    assert_eq!(result.status, AdapterHealth::Healthy);
}

#[tokio::test]
async fn invalid_base_url_is_rejected_at_construction() {
    let err = VendorHttpAdapter::dell(ExternalConfig::simple("not a url")).unwrap_err();
    assert_validation_on_field(&err, "base_url");
}
