use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::Transport;
use crate::config::ClientConfig;
use crate::errors::{MarketDataError, Result};

/// [`Transport`] backed by a `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    url: url.to_string(),
                }
            } else {
                MarketDataError::Connection {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    url: url.to_string(),
                }
            } else {
                MarketDataError::Connection {
                    url: url.to_string(),
                    message: format!("Failed to read response: {}", e),
                }
            }
        })?;

        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(MarketDataError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        debug!("GET {} returned {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}
