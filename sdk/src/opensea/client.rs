use {
    crate::opensea::{error::*, models::*},
    reqwest::{Client, Url},
    serde::de::DeserializeOwned,
};

/// Default OpenSea v1 API endpoint.
pub const OPENSEA_API_BASE: &str = "https://api.opensea.io/api/v1";
/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";
/// Page size used by OpenSea when listing assets.
pub const DEFAULT_ASSETS_LIMIT: u32 = 20;
/// Offset of the first page of assets.
pub const DEFAULT_ASSETS_OFFSET: u32 = 0;

/// Builder for OpenSeaClient configuration
pub struct OpenSeaClientBuilder {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Default for OpenSeaClientBuilder {
    /// Creates a default OpenSeaClientBuilder pointing to the public API
    /// without an API key
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: OPENSEA_API_BASE.to_string(),
            api_key: None,
        }
    }
}

impl OpenSeaClientBuilder {
    /// Create a new OpenSeaClientBuilder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set a custom API base URL
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the API key sent with every request. `None` sends no key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Build the OpenSeaClient with the configured settings
    pub fn build(self) -> OpenSeaClient {
        OpenSeaClient {
            client: self.client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

/// Read-only client for the OpenSea v1 REST API
pub struct OpenSeaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Default for OpenSeaClient {
    fn default() -> Self {
        OpenSeaClientBuilder::default().build()
    }
}

impl OpenSeaClient {
    /// Create a new OpenSeaClient with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a builder to create a customized OpenSeaClient
    pub fn builder() -> OpenSeaClientBuilder {
        OpenSeaClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch collection metadata by slug.
    pub async fn fetch_collection(&self, slug: &str) -> Result<Collection> {
        let response: CollectionResponse = self.get(&["collection", slug], &[]).await?;

        Ok(response.collection)
    }

    /// Fetch the aggregate market statistics of a collection.
    pub async fn fetch_collection_stats(&self, slug: &str) -> Result<CollectionStats> {
        let response: CollectionStatsResponse =
            self.get(&["collection", slug, "stats"], &[]).await?;

        Ok(response.stats)
    }

    /// List a single page of assets minted by the given contract.
    pub async fn fetch_assets_by_contract(
        &self,
        address: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Asset>> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let query = [
            ("asset_contract_address", address),
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
        ];

        let response: AssetsResponse = self.get(&["assets"], &query).await?;

        Ok(response.assets)
    }

    /// Fetch one asset by contract address and token ID.
    pub async fn fetch_asset(&self, address: &str, token_id: &str) -> Result<Asset> {
        self.get(&["asset", address, token_id], &[]).await
    }

    /// Issue a GET request and classify any failure.
    async fn get<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;

        log::debug!("GET {url}");

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query);

        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| log_failure(OpenSeaError::from_reqwest(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| log_failure(OpenSeaError::from_reqwest(e)))?;

        if !status.is_success() {
            return Err(log_failure(OpenSeaError::from_response(
                status.as_u16(),
                text,
            )));
        }

        serde_json::from_str::<T>(&text).map_err(|e| log_failure(OpenSeaError::from_decode(e)))
    }

    /// Join the base URL with percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid = |reason: String| {
            OpenSeaError::classify(
                Failure::Transport {
                    code: None,
                    message: &reason,
                },
                None,
            )
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("invalid base URL '{}': {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| invalid(format!("base URL '{}' cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

fn log_failure(error: OpenSeaError) -> OpenSeaError {
    log::debug!("request failed with {}: {}", error.kind(), error.message());

    error
}
