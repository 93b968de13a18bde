use crate::common;
use algo_app_harness::cli::commands::lookup::{LookupCommand, LookupTarget};
use algo_app_harness::config::HarnessConfig;
use anyhow::Result;

/// Tests for the `lookup` subcommand against a mock node

fn lookup(target: LookupTarget, url: Option<String>) -> LookupCommand {
    LookupCommand {
        target,
        url,
        token: None,
    }
}

/// Configuration whose endpoints point nowhere reachable
fn unreachable_config() -> HarnessConfig {
    let mut config = HarnessConfig::default();
    config.algod.url = "http://127.0.0.1:9".to_string();
    config.indexer.url = "http://127.0.0.1:9".to_string();
    config.algod.timeout_seconds = 2;
    config.indexer.timeout_seconds = 2;
    config
}

#[tokio::test]
async fn test_url_flag_overrides_config() -> Result<()> {
    let server = common::start_mock_node().await;
    let command = lookup(LookupTarget::Asset { id: 100 }, Some(server.uri()));

    let out = command.fetch(&unreachable_config()).await?;
    let json: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(json["index"], 100);
    assert_eq!(json["params"]["unit-name"], "HRN");

    assert_eq!(common::received_paths(&server).await, vec!["/v2/assets/100"]);
    Ok(())
}

#[tokio::test]
async fn test_config_endpoint_used_without_flag() -> Result<()> {
    let server = common::start_mock_node().await;
    let mut config = unreachable_config();
    config.algod.url = server.uri();

    let command = lookup(LookupTarget::Application { id: 123 }, None);
    let out = command.fetch(&config).await?;
    let json: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(json["id"], 123);

    assert_eq!(
        common::received_paths(&server).await,
        vec!["/v2/applications/123"]
    );
    Ok(())
}

#[tokio::test]
async fn test_search_sends_include_all() -> Result<()> {
    let server = common::start_mock_node().await;
    let command = lookup(
        LookupTarget::Search {
            application_id: Some(7),
            include_all: true,
            limit: None,
            next: None,
        },
        Some(server.uri()),
    );

    let out = command.fetch(&unreachable_config()).await?;
    let json: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(json["next-token"], "MTIz");

    assert_eq!(
        common::received_paths(&server).await,
        vec!["/v2/applications?application-id=7&include-all=true"]
    );
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_an_error() {
    let command = lookup(LookupTarget::IndexerApplication { id: 1 }, None);
    assert!(command.fetch(&unreachable_config()).await.is_err());
}
