// ── Runtime connection configuration ──
//
// Describes *how* to reach a Meshgate tenant. Carries credential data
// and connection tuning; `from_env` is the only place that touches
// process state. Consumers may also construct the struct directly.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::CoreError;

const DEFAULT_DOMAIN: &str = "meshgate.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to a single tenant network.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Tenant network slug (the `{network}` in
    /// `https://{network}.meshgate.com`).
    pub network: String,
    /// Service domain. Overridable for staging environments.
    pub domain: String,
    /// API token, sent as the `X-API-KEY` header on every request.
    pub api_token: SecretString,
    /// Request timeout.
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Config with default domain and timeout.
    pub fn new(network: impl Into<String>, api_token: SecretString) -> Self {
        Self {
            network: network.into(),
            domain: DEFAULT_DOMAIN.into(),
            api_token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Resolve configuration from `MESHGATE_*` environment variables.
    ///
    /// `MESHGATE_NETWORK` and `MESHGATE_API_TOKEN` are required.
    /// `MESHGATE_URL` overrides the service domain and
    /// `MESHGATE_HTTP_TIMEOUT` the timeout (seconds).
    pub fn from_env() -> Result<Self, CoreError> {
        let network = require_env("MESHGATE_NETWORK")?;
        let api_token = SecretString::from(require_env("MESHGATE_API_TOKEN")?);
        let domain =
            std::env::var("MESHGATE_URL").unwrap_or_else(|_| DEFAULT_DOMAIN.into());

        let timeout = match std::env::var("MESHGATE_HTTP_TIMEOUT") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| CoreError::Config {
                    message: format!(
                        "MESHGATE_HTTP_TIMEOUT must be a number of seconds, got \"{raw}\""
                    ),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            network,
            domain,
            api_token,
            timeout,
        })
    }
}

fn require_env(name: &'static str) -> Result<String, CoreError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::Config {
            message: format!("{name} is not set"),
        }),
    }
}
