/*
[INPUT]:  HTTP configuration (base URLs, timeouts)
[OUTPUT]: Configured reqwest client ready for Horizon and Friendbot calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{HorizonError, Result};
use crate::types::Problem;

/// Base URLs for the Stellar test network
const HORIZON_TESTNET_URL: &str = "https://horizon-testnet.stellar.org";
const FRIENDBOT_URL: &str = "https://friendbot.stellar.org";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for Horizon testnet and the Friendbot faucet
#[derive(Debug, Clone)]
pub struct HorizonClient {
    http_client: Client,
    horizon_base_url: Url,
    friendbot_base_url: Url,
}

impl HorizonClient {
    /// Create a new client against the fixed testnet endpoints
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(config, HORIZON_TESTNET_URL, FRIENDBOT_URL)
    }

    /// Create a new client against explicit base URLs (test seam)
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        horizon_base_url: &str,
        friendbot_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            horizon_base_url: Url::parse(horizon_base_url)?,
            friendbot_base_url: Url::parse(friendbot_base_url)?,
        })
    }

    /// Build request builder for Horizon endpoints
    pub(crate) fn horizon_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.horizon_base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build the Friendbot funding request for a public key
    pub(crate) fn friendbot_request(&self, public_key: &str) -> Result<RequestBuilder> {
        let mut url = self.friendbot_base_url.clone();
        url.query_pairs_mut().append_pair("addr", public_key);
        Ok(self.http_client.request(Method::GET, url))
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-success statuses are decoded as Horizon `problem+json` payloads
    /// and surfaced as typed errors.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = %status, url = %response.url(), "received response");

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(problem_to_error(status, &body))
    }
}

/// Decode a Horizon problem body into a typed error.
///
/// A `result_codes` extra marks a rejected transaction; anything else keeps
/// the problem title and detail. Bodies that are not problem JSON fall back
/// to the raw text.
fn problem_to_error(status: StatusCode, body: &str) -> HorizonError {
    match serde_json::from_str::<Problem>(body) {
        Ok(problem) => {
            if let Some(codes) = problem.extras.and_then(|extras| extras.result_codes) {
                return HorizonError::TransactionFailed {
                    transaction: codes.transaction.unwrap_or_else(|| "unknown".to_string()),
                    operations: codes.operations,
                };
            }
            HorizonError::Api {
                status: problem.status.unwrap_or_else(|| status.as_u16()),
                title: problem.title,
                detail: problem.detail.unwrap_or_default(),
            }
        }
        Err(_) => HorizonError::Api {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("unknown")
                .to_string(),
            detail: body.to_string(),
        },
    }
}
