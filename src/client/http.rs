use crate::errors::{ClientError, ClientResult};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// JSON-over-HTTP plumbing shared by the algod and indexer clients
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    base_url: String,
    token_header: &'static str,
    token: String,
    inner: Client,
}

impl HttpClient {
    pub(crate) fn new(
        address: &str,
        token: &str,
        token_header: &'static str,
        timeout_seconds: u64,
    ) -> ClientResult<Self> {
        let url = Url::parse(address).map_err(|e| ClientError::InvalidUrl {
            url: address.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: address.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        let inner = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ClientError::RequestFailed {
                endpoint: address.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url: address.trim_end_matches('/').to_string(),
            token_header,
            token: token.to_string(),
            inner,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let endpoint = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", endpoint, query);

        let mut request = self.inner.get(&endpoint).query(query);
        if !self.token.is_empty() {
            request = request.header(self.token_header, &self.token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::RequestFailed {
                endpoint: endpoint.clone(),
                message: format!("Failed to read body: {}", e),
            })?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Deserialisation(e.to_string()))
    }
}
