use crate::common::{self, OTHER_ADDRESS, SIGNER_ADDRESS};
use algo_app_harness::client::{AlgodClient, IndexerClient};
use algo_app_harness::errors::ClientError;
use anyhow::Result;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Tests for the algod and indexer clients
///
/// Every test runs against a local mock node, no network access needed.

#[tokio::test]
async fn test_get_asset_by_id() -> Result<()> {
    let server = common::start_mock_node().await;
    let client = AlgodClient::new(&server.uri(), "")?;

    let asset = client.get_asset_by_id(100).await?;
    assert_eq!(asset.index, 100);
    assert_eq!(asset.params.decimals, 2);
    assert_eq!(asset.params.total, 1_000_000);
    assert_eq!(asset.params.unit_name.as_deref(), Some("HRN"));
    assert_eq!(asset.params.creator, SIGNER_ADDRESS);

    assert_eq!(common::received_paths(&server).await, vec!["/v2/assets/100"]);
    Ok(())
}

#[tokio::test]
async fn test_get_application_by_id() -> Result<()> {
    let server = common::start_mock_node().await;
    let client = AlgodClient::new(&server.uri(), "")?;

    let app = client.get_application_by_id(123).await?;
    assert_eq!(app.id, 123);
    assert_eq!(app.params.extra_program_pages, Some(1));
    assert_eq!(
        app.params.approval_program_bytes()?,
        vec![0x02, 0x20, 0x01, 0x01, 0x22]
    );
    assert_eq!(
        app.params.clear_state_program_bytes()?,
        vec![0x02, 0x20, 0x01, 0x00, 0x22]
    );
    assert_eq!(app.params.global_state[0].value.uint, 7);

    assert_eq!(
        common::received_paths(&server).await,
        vec!["/v2/applications/123"]
    );
    Ok(())
}

#[tokio::test]
async fn test_algod_token_header() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/assets/5"))
        .and(header("X-Algo-API-Token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mock_body("asset.json")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AlgodClient::new(&server.uri(), "secret")?;
    client.get_asset_by_id(5).await?;
    Ok(())
}

#[tokio::test]
async fn test_search_for_applications_query() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/applications"))
        .and(query_param("application-id", "7"))
        .and(query_param("creator", OTHER_ADDRESS))
        .and(query_param("limit", "2"))
        .and(header("X-Indexer-API-Token", "idx"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::mock_body("indexer_applications.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = IndexerClient::new(&server.uri(), "idx")?;
    let response = client
        .search_for_applications()
        .application_id(7)
        .creator(OTHER_ADDRESS)
        .limit(2)
        .send()
        .await?;

    assert_eq!(response.current_round, 9010);
    assert_eq!(response.next_token.as_deref(), Some("MTIz"));
    assert_eq!(response.applications.len(), 1);
    assert_eq!(response.applications[0].created_at_round, Some(9001));
    Ok(())
}

#[tokio::test]
async fn test_lookup_application_by_id() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/applications/123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::mock_body("indexer_application.json")),
        )
        .mount(&server)
        .await;

    let client = IndexerClient::new(&server.uri(), "")?;
    let response = client.lookup_application_by_id(123).await?;
    let app = response.application.expect("application present");
    assert_eq!(app.id, 123);
    assert_eq!(app.deleted, Some(false));
    assert_eq!(response.current_round, 9010);
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("application does not exist"))
        .mount(&server)
        .await;

    let client = AlgodClient::new(&server.uri(), "")?;
    match client.get_application_by_id(9).await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "application does not exist");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialisation_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = IndexerClient::new(&server.uri(), "")?;
    let result = client.search_for_applications().send().await;
    assert!(matches!(result, Err(ClientError::Deserialisation(_))));
    Ok(())
}

#[test]
fn test_invalid_urls_rejected() {
    assert!(matches!(
        AlgodClient::new("not a url", ""),
        Err(ClientError::InvalidUrl { .. })
    ));
    assert!(matches!(
        IndexerClient::new("ftp://localhost:8980", ""),
        Err(ClientError::InvalidUrl { .. })
    ));
}
