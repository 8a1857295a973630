// Meshgate GraphQL client
//
// Wraps `reqwest::Client` with endpoint construction, API-key header
// injection, and the `{ data, errors }` envelope. Entity operations
// (resources, groups, remote networks) are implemented as inherent
// methods via separate files to keep this module focused on transport
// mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{MutationPayload, MutationStatus};

/// Raw GraphQL client for the Meshgate API.
///
/// Every request is a POST of `{ query, variables }` to the tenant
/// endpoint `https://{network}.{domain}/api/graphql/`. The envelope is
/// stripped before the caller sees it: methods return the unwrapped
/// per-operation payload.
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: Url,
}

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

impl GraphqlClient {
    /// Create a client for the given tenant network.
    ///
    /// `network` is the tenant slug, `domain` the service domain
    /// (normally `meshgate.com`). The API token is sent on every request
    /// via the `X-API-KEY` header, marked sensitive so it never appears
    /// in logs.
    pub fn new(
        network: &str,
        domain: &str,
        api_token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let endpoint = Url::parse(&format!("https://{network}.{domain}/api/graphql/"))?;

        let mut headers = reqwest::header::HeaderMap::new();
        let mut value = reqwest::header::HeaderValue::from_str(api_token.expose_secret())
            .map_err(|_| Error::Authentication {
                message: "API token contains characters not allowed in a header".into(),
            })?;
        value.set_sensitive(true);
        headers.insert("X-API-KEY", value);

        let http = transport.build_client(headers)?;
        Ok(Self { http, endpoint })
    }

    /// Create a client with a pre-built `reqwest::Client` and a base URL.
    ///
    /// The GraphQL endpoint is derived as `{base}/api/graphql/`. Used by
    /// tests to point at a mock server.
    pub fn from_reqwest(base: &str, http: reqwest::Client) -> Result<Self, Error> {
        let endpoint = Url::parse(base)?.join("/api/graphql/")?;
        Ok(Self { http, endpoint })
    }

    /// The resolved GraphQL endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── Request mechanics ────────────────────────────────────────────

    /// Execute a GraphQL document and extract `data.{field}`.
    ///
    /// Maps HTTP 401 to [`Error::Authentication`], top-level GraphQL
    /// errors to [`Error::Graphql`], and undecodable bodies to
    /// [`Error::Deserialization`] (carrying the raw body).
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        field: &'static str,
        query: &'static str,
        variables: Value,
    ) -> Result<T, Error> {
        debug!(field, "POST {}", self.endpoint);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(Error::Transport)?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "API token rejected by the service".into(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let message = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(Error::Graphql { message });
            }
        }

        let data = envelope.data.ok_or_else(|| Error::Deserialization {
            message: "response has no data".into(),
            body: body.clone(),
        })?;

        let value = data.get(field).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| Error::Deserialization {
            message: format!("field {field}: {e}"),
            body,
        })
    }
}

// ── Mutation payload helpers ─────────────────────────────────────────

/// Check a mutation payload's `ok` flag, surfacing the service's error
/// string as [`Error::Rejected`] when the mutation was refused.
pub(crate) fn accept<E>(payload: MutationPayload<E>, operation: String) -> Result<Option<E>, Error> {
    if payload.ok {
        Ok(payload.entity)
    } else {
        Err(Error::Rejected {
            operation,
            message: payload
                .error
                .unwrap_or_else(|| "no error message returned".into()),
        })
    }
}

/// Like [`accept`], for mutations that carry no entity.
pub(crate) fn confirm(status: MutationStatus, operation: String) -> Result<(), Error> {
    if status.ok {
        Ok(())
    } else {
        Err(Error::Rejected {
            operation,
            message: status
                .error
                .unwrap_or_else(|| "no error message returned".into()),
        })
    }
}
