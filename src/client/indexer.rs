use super::http::{HttpClient, DEFAULT_TIMEOUT_SECONDS};
use super::models::{ApplicationResponse, ApplicationsResponse};
use crate::config::NodeConfig;
use crate::errors::ClientResult;
use tracing::info;

pub const INDEXER_TOKEN_HEADER: &str = "X-Indexer-API-Token";

/// Client for the indexer REST API
#[derive(Debug, Clone)]
pub struct IndexerClient {
    http: HttpClient,
}

impl IndexerClient {
    /// Token is sent in `X-Indexer-API-Token` when non-empty
    pub fn new(address: &str, token: &str) -> ClientResult<Self> {
        Self::with_timeout(address, token, DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn with_timeout(address: &str, token: &str, timeout_seconds: u64) -> ClientResult<Self> {
        let http = HttpClient::new(address, token, INDEXER_TOKEN_HEADER, timeout_seconds)?;
        info!("indexer client targeting {}", http.base_url());
        Ok(Self { http })
    }

    pub fn from_config(config: &NodeConfig) -> ClientResult<Self> {
        Self::with_timeout(&config.url, &config.token, config.timeout_seconds)
    }

    /// Start a `GET /v2/applications` search; filters are added on the returned builder
    pub fn search_for_applications(&self) -> SearchForApplications<'_> {
        SearchForApplications {
            client: self,
            application_id: None,
            creator: None,
            include_all: None,
            limit: None,
            next: None,
        }
    }

    /// `GET /v2/applications/{application-id}`
    pub async fn lookup_application_by_id(
        &self,
        application_id: u64,
    ) -> ClientResult<ApplicationResponse> {
        self.http
            .get_json(&format!("/v2/applications/{}", application_id), &[])
            .await
    }
}

/// Query builder for the indexer application search
#[derive(Debug, Clone)]
pub struct SearchForApplications<'a> {
    client: &'a IndexerClient,
    application_id: Option<u64>,
    creator: Option<String>,
    include_all: Option<bool>,
    limit: Option<u64>,
    next: Option<String>,
}

impl SearchForApplications<'_> {
    pub fn application_id(mut self, application_id: u64) -> Self {
        self.application_id = Some(application_id);
        self
    }

    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn include_all(mut self, include_all: bool) -> Self {
        self.include_all = Some(include_all);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continuation token from a previous page's `next-token`
    pub fn next(mut self, token: impl Into<String>) -> Self {
        self.next = Some(token.into());
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(id) = self.application_id {
            query.push(("application-id", id.to_string()));
        }
        if let Some(creator) = &self.creator {
            query.push(("creator", creator.clone()));
        }
        if let Some(include_all) = self.include_all {
            query.push(("include-all", include_all.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(next) = &self.next {
            query.push(("next", next.clone()));
        }
        query
    }

    pub async fn send(self) -> ClientResult<ApplicationsResponse> {
        let query = self.query();
        self.client.http.get_json("/v2/applications", &query).await
    }
}
