use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};
use crate::logging::{RequestLogger, TracingLogger};

/// Deadline applied to every GET request. POST requests, which may carry
/// file uploads of arbitrary size, have no deadline.
const GET_TIMEOUT: Duration = Duration::from_secs(10);

/// Asynchronous Mattermost client bound to a single channel
pub struct MattermostClient {
    /// HTTP client for REST API calls
    http_client: Client,
    /// Base URL for the Mattermost server (e.g., "https://mattermost.example.com")
    base_url: Url,
    /// Bot token sent as a bearer credential on every request
    token: String,
    /// Channel all posts go to
    channel_id: String,
    /// Sink for one log line per outgoing request
    logger: Arc<dyn RequestLogger>,
}

impl MattermostClient {
    /// Create a new Mattermost client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Mattermost server (e.g., "https://mattermost.example.com")
    /// * `token` - Bot or Personal Access Token used for bearer authentication
    /// * `channel_id` - The channel that messages will be posted to
    ///
    /// # Returns
    /// A Result containing the MattermostClient or an Error
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::request(format!("Invalid base URL: {base_url}")).with_source(e))?;

        // Redirects are not followed, so 3xx statuses reach handle_response
        // and fail like any other unexpected status. A connection is not
        // reused across requests.
        let http_client = Client::builder()
            .redirect(Policy::none())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::request("Failed to create HTTP client").with_source(e))?;

        Ok(Self {
            http_client,
            base_url,
            token: token.into(),
            channel_id: channel_id.into(),
            logger: Arc::new(TracingLogger),
        })
    }

    /// Replace the default `tracing` logger (builder pattern)
    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Get the configured server base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the channel this client posts to
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Build the full API URL for a given endpoint
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path (e.g., "/users/me")
    ///
    /// # Returns
    /// The full URL string
    pub fn api_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/api/v4/{endpoint}")
    }

    /// Make a GET request to the Mattermost API
    ///
    /// The request is abandoned with an error if the server takes longer
    /// than ten seconds to respond.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query` - Query parameters, percent-encoded before sending
    ///
    /// # Returns
    /// A Result containing the reqwest::Response or an Error
    pub async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let url = self.api_url(endpoint);
        self.logger.info(&format!("GET {url}"));

        self.http_client
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .timeout(GET_TIMEOUT)
            .send()
            .await
            .map_err(|e| Error::request("GET request failed").with_source(e))
    }

    /// Make a POST request with a JSON body to the Mattermost API
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `body` - The request body (will be serialized to JSON)
    ///
    /// # Returns
    /// A Result containing the reqwest::Response or an Error
    pub async fn post_json<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        let url = self.api_url(endpoint);
        self.logger.info(&format!("POST {url}"));

        self.http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::request("POST request failed").with_source(e))
    }

    /// Make a POST request with a raw byte body to the Mattermost API
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `query` - Query parameters, percent-encoded before sending
    /// * `body` - The request body, sent verbatim
    ///
    /// # Returns
    /// A Result containing the reqwest::Response or an Error
    pub async fn post_bytes(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Vec<u8>,
    ) -> Result<reqwest::Response> {
        let url = self.api_url(endpoint);
        self.logger.info(&format!("POST {url}"));

        self.http_client
            .post(&url)
            .query(query)
            .bearer_auth(&self.token)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::request("POST request failed").with_source(e))
    }

    /// Check the response status and extract the JSON body
    ///
    /// Only 200 and 201 count as success. A 404 maps to the not-found error;
    /// every other status, including redirects and 204, fails with the status
    /// code attached.
    ///
    /// # Arguments
    /// * `response` - The HTTP response from the API
    ///
    /// # Returns
    /// A Result containing the deserialized response body or an Error
    pub async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        match response.status().as_u16() {
            200 | 201 => response
                .json::<T>()
                .await
                .map_err(|e| Error::request("Failed to decode response body").with_source(e)),
            404 => Err(Error::not_found("resource not found")),
            code => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(
                    Error::request(format!("API request failed with status {code}: {error_text}"))
                        .with_http_status(code),
                )
            }
        }
    }
}
