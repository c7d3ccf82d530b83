//! Wiremock harness for the vendor HTTP endpoints
//!
//! Wraps a `wiremock::MockServer` with mounts shaped like the vendor
//! gateways' endpoints, so adapter tests read as scenarios instead of mock
//! plumbing.

use serde_json::Value;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub struct VendorMockServer {
    mock: MockServer,
}

impl VendorMockServer {
    pub async fn start() -> Self {
        Self {
            mock: MockServer::start().await,
        }
    }

    /// Base URL of the mock gateway
    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    /// Login succeeds with the given opaque token
    pub async fn mount_login(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": token })),
            )
            .mount(&self.mock)
            .await;
    }

    /// Login succeeds only for requests whose JSON body contains
    /// `expected_body`; anything else falls through to wiremock's 404
    pub async fn mount_login_expecting(&self, expected_body: Value, token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(expected_body))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": token })),
            )
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    /// Login is rejected with 401
    pub async fn mount_login_rejected(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(crate::fixtures::PayloadFixtures::auth_rejected()),
            )
            .mount(&self.mock)
            .await;
    }

    /// Login answers with a payload that carries no token
    pub async fn mount_login_without_token(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&self.mock)
            .await;
    }

    /// Claims listing requires the given bearer token
    pub async fn mount_claims(&self, bearer: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/claims"))
            .and(header("Authorization", format!("Bearer {bearer}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock)
            .await;
    }

    /// Claims listing that additionally requires the user filter parameter
    pub async fn mount_claims_for_user(&self, bearer: &str, user: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/claims"))
            .and(query_param("user", user))
            .and(header("Authorization", format!("Bearer {bearer}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    /// Warranty lookup for one service tag
    pub async fn mount_warranty(&self, service_tag: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/warranty/{service_tag}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock)
            .await;
    }

    /// Warranty lookup that finds no record
    pub async fn mount_warranty_missing(&self, service_tag: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/warranty/{service_tag}")))
            .respond_with(ResponseTemplate::new(404))
            .mount(&self.mock)
            .await;
    }

    /// Claim dispatch succeeds with the given acknowledgement body
    pub async fn mount_dispatch(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/claims"))
            .respond_with(ResponseTemplate::new(201).set_body_json(body))
            .mount(&self.mock)
            .await;
    }

    /// Claim dispatch is rejected by the vendor as a business error
    pub async fn mount_dispatch_rejected(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/claims"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock)
            .await;
    }

    /// Asserts that the dispatch endpoint is never reached
    ///
    /// Verified when the server is dropped at the end of the test.
    pub async fn mount_dispatch_never(&self) {
        Mock::given(method("POST"))
            .and(path("/claims"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.mock)
            .await;
    }

    /// All requests the server has received so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.mock
            .received_requests()
            .await
            .expect("request recording is enabled")
    }
}
