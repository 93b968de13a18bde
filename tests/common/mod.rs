//! Common Test Utilities
//!
//! Shared fixtures for the unit tests and the scenario runner: the signing
//! seed every golden was produced with, the addresses it yields, and a mock
//! algod/indexer server serving the JSON bodies under
//! `tests/features/resources/mock`.

#![allow(dead_code)]

use std::path::PathBuf;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// ed25519 seed behind every signed golden
pub const SEED_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// Address derived from [`SEED_HEX`]
pub const SIGNER_ADDRESS: &str = "AOQQPP7TZYIL4HLQ3UMOOS6ATFT6JVRQTOSQ2XY53SDGIESVGG4MPFYUMQ";

/// Address whose public key is 32 bytes of 0x11
pub const OTHER_ADDRESS: &str = "CEIRCEIRCEIRCEIRCEIRCEIRCEIRCEIRCEIRCEIRCEIRCEIRCEI7JH2AYM";

pub const GENESIS_HASH_B64: &str = "XnKpwqtGPNHk1IgVdOK5oZkNLkOPgBveTb8aMWAXyL8=";

pub fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/features/resources")
}

pub fn mock_body(name: &str) -> serde_json::Value {
    let path = resources_dir().join("mock").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing mock fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).unwrap()
}

/// Mock node answering the four application endpoints
///
/// Requests are recorded, so tests can assert on the paths that were hit
/// with [`received_paths`].
pub async fn start_mock_node() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v2/assets/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_body("asset.json")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v2/applications/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_body("application.json")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/applications"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_body("indexer_applications.json")),
        )
        .mount(&server)
        .await;

    server
}

/// Path plus query string of every request the server saw, oldest first
pub async fn received_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| match request.url.query() {
            Some(query) => format!("{}?{}", request.url.path(), query),
            None => request.url.path().to_string(),
        })
        .collect()
}
