//! Firecrawl client implementation.

use crate::error::{Error, Result};
use crate::types::{ScrapeData, ScrapeRequest, ScrapeResponse};
use crate::version::build_user_agent;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent_suffix: None,
        }
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    ///
    /// Fails before any network activity if the API key is empty.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("API key is required".into()));
        }

        // Warn about insecure connections
        if !self.base_url.starts_with("https://") {
            warn!(
                base_url = %self.base_url,
                "API base URL is not using HTTPS. This is insecure."
            );
        }

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::Http)?;

        let user_agent = build_user_agent(self.user_agent_suffix.as_deref());

        Ok(Client {
            api_key: self.api_key,
            base_url: self.base_url,
            http_client,
            user_agent,
        })
    }
}

/// Client for the Firecrawl scrape API.
///
/// # Example
///
/// ```rust,no_run
/// use firecrawl_product::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), firecrawl_product::Error> {
///     let client = Client::builder("your-api-key").build()?;
///
///     let product = client
///         .extract_product("https://example.com/product")
///         .await?;
///
///     println!("{:#}", product);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
    user_agent: String,
}

impl Client {
    /// Create a new client builder.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Extract structured product data from a product page URL.
    ///
    /// Issues exactly one scrape request and returns the schema-guided JSON
    /// extraction verbatim. Fields absent on the page may be omitted by the
    /// service; nothing is validated, coerced or defaulted locally. If the
    /// response carries no structured extraction at all, an empty object is
    /// returned.
    pub async fn extract_product(&self, url: impl Into<String>) -> Result<Value> {
        let data = self.scrape(ScrapeRequest::for_product(url)).await?;
        Ok(data.json.unwrap_or_else(|| Value::Object(Default::default())))
    }

    /// Issue a scrape request and return the raw per-format output.
    ///
    /// Exposes the markdown fallback alongside the structured extraction.
    pub async fn scrape(&self, request: ScrapeRequest) -> Result<ScrapeData> {
        debug!(url = %request.url, "sending scrape request");

        let response = self.post("/v2/scrape", &request).await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        let body: ScrapeResponse = response.json().await.map_err(Error::Http)?;

        if !body.success {
            let message = body.error.unwrap_or_else(|| "Unknown error".into());
            debug!(message = %message, "scrape rejected by API");
            return Err(Error::Rejected { message });
        }

        Ok(body.data.unwrap_or_default())
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| Error::Config("API key contains invalid characters".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|_| Error::Config("User-Agent contains invalid characters".into()))?,
        );

        // One attempt only. Failures are terminal and reported to the caller.
        match self
            .http_client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
        {
            Ok(response) => Ok(response),
            Err(e) if e.is_timeout() => Err(Error::Timeout),
            Err(e) => Err(Error::Http(e)),
        }
    }
}
