use crate::client::{AlgodClient, IndexerClient};
use crate::config::{HarnessConfig, NodeConfig};
use crate::errors::AppResult;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Query algod or indexer for assets and applications
#[derive(Args)]
pub struct LookupCommand {
    #[command(subcommand)]
    pub target: LookupTarget,

    /// Endpoint URL (overrides harness.toml)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// API token (overrides harness.toml)
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand, Clone)]
pub enum LookupTarget {
    /// algod GET /v2/assets/{id}
    Asset { id: u64 },
    /// algod GET /v2/applications/{id}
    Application { id: u64 },
    /// indexer GET /v2/applications
    Search {
        #[arg(long)]
        application_id: Option<u64>,
        /// Include deleted applications
        #[arg(long)]
        include_all: bool,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        next: Option<String>,
    },
    /// indexer GET /v2/applications/{id}
    IndexerApplication { id: u64 },
}

impl LookupCommand {
    fn node(&self, base: NodeConfig) -> NodeConfig {
        NodeConfig {
            url: self.url.clone().unwrap_or(base.url),
            token: self.token.clone().unwrap_or(base.token),
            timeout_seconds: base.timeout_seconds,
        }
    }

    pub async fn run(&self) -> AppResult<()> {
        println!("{}", self.fetch(&HarnessConfig::get_defaults()).await?);
        Ok(())
    }

    /// Issue the query against the endpoint `config` names (after the
    /// `--url`/`--token` overrides) and render the response as JSON
    pub async fn fetch(&self, config: &HarnessConfig) -> AppResult<String> {
        match &self.target {
            LookupTarget::Asset { id } => {
                let client = AlgodClient::from_config(&self.node(config.algod.clone()))?;
                to_json(&client.get_asset_by_id(*id).await?)
            }
            LookupTarget::Application { id } => {
                let client = AlgodClient::from_config(&self.node(config.algod.clone()))?;
                to_json(&client.get_application_by_id(*id).await?)
            }
            LookupTarget::Search {
                application_id,
                include_all,
                limit,
                next,
            } => {
                let client = IndexerClient::from_config(&self.node(config.indexer.clone()))?;
                let mut search = client.search_for_applications();
                if let Some(id) = application_id {
                    search = search.application_id(*id);
                }
                if *include_all {
                    search = search.include_all(true);
                }
                if let Some(limit) = limit {
                    search = search.limit(*limit);
                }
                if let Some(next) = next {
                    search = search.next(next.clone());
                }
                to_json(&search.send().await?)
            }
            LookupTarget::IndexerApplication { id } => {
                let client = IndexerClient::from_config(&self.node(config.indexer.clone()))?;
                to_json(&client.lookup_application_by_id(*id).await?)
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
