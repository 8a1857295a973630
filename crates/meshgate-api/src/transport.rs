// Shared transport configuration for building reqwest::Client instances.
//
// The Meshgate API is a public TLS endpoint, so there is no verification
// knob here -- only request tuning and the default header set (API key).

use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::error::Error;

/// Transport configuration for the GraphQL client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config with the given default
    /// headers (the GraphQL client injects `X-API-KEY` here).
    pub fn build_client(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("meshgate-rs/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(client)
    }
}
