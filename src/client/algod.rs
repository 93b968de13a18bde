use super::http::{HttpClient, DEFAULT_TIMEOUT_SECONDS};
use super::models::{Application, Asset};
use crate::config::NodeConfig;
use crate::errors::ClientResult;
use tracing::info;

pub const ALGOD_TOKEN_HEADER: &str = "X-Algo-API-Token";

/// Client for the algod node REST API
#[derive(Debug, Clone)]
pub struct AlgodClient {
    http: HttpClient,
}

impl AlgodClient {
    /// Token is sent in `X-Algo-API-Token` when non-empty
    pub fn new(address: &str, token: &str) -> ClientResult<Self> {
        Self::with_timeout(address, token, DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn with_timeout(address: &str, token: &str, timeout_seconds: u64) -> ClientResult<Self> {
        let http = HttpClient::new(address, token, ALGOD_TOKEN_HEADER, timeout_seconds)?;
        info!("algod client targeting {}", http.base_url());
        Ok(Self { http })
    }

    pub fn from_config(config: &NodeConfig) -> ClientResult<Self> {
        Self::with_timeout(&config.url, &config.token, config.timeout_seconds)
    }

    /// `GET /v2/assets/{asset-id}`
    pub async fn get_asset_by_id(&self, asset_id: u64) -> ClientResult<Asset> {
        self.http
            .get_json(&format!("/v2/assets/{}", asset_id), &[])
            .await
    }

    /// `GET /v2/applications/{application-id}`
    pub async fn get_application_by_id(&self, application_id: u64) -> ClientResult<Application> {
        self.http
            .get_json(&format!("/v2/applications/{}", application_id), &[])
            .await
    }
}
