// Rust guideline compliant 2026-10-18

//! Blocking REST client for the tracker.
//!
//! Status classification:
//! - 2xx: the body is decoded as JSON (an empty body decodes to `null`)
//! - 4xx: `RemoteRejected` carrying the decoded error payload
//! - anything else, or no response at all: `TransportFailure`

use jira_util_core::config::require;
use jira_util_core::{AuthScheme, EnvironmentConfig, Error, IssueKey, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode, Url};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error};

/// Credentials attached to every request.
#[derive(Clone)]
enum Credentials {
    Basic { user: String, token: String },
    Bearer(String),
}

impl Credentials {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Basic { user, token } => request.basic_auth(user, Some(token)),
            Credentials::Bearer(token) => request.bearer_auth(token),
        }
    }
}

/// Tracker client over the REST API.
#[derive(Clone)]
pub struct HttpTracker {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl std::fmt::Debug for HttpTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTracker")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Adds `https://` to bare hosts and drops trailing slashes.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

impl HttpTracker {
    /// Creates a client for one environment section.
    ///
    /// # Arguments
    ///
    /// * `env` - Connection settings; field ids are not needed here
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` or `api_token` is missing, or `user` for basic auth
    /// - `base_url` is not a valid URL
    /// - The HTTP client cannot be built
    pub fn new(env: &EnvironmentConfig) -> Result<Self> {
        env.validate()?;
        let token = require(&env.api_token, "api_token")?.to_string();
        let credentials = match env.auth {
            AuthScheme::Basic => Credentials::Basic {
                user: require(&env.user, "user")?.to_string(),
                token,
            },
            AuthScheme::Bearer => Credentials::Bearer(token),
        };

        let raw = require(&env.base_url, "base_url")?;
        let base_url = normalize_base_url(raw);
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid base_url '{}': {}", raw, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(env.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Normalized base URL, always with a scheme.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Human-facing link to a ticket.
    pub fn browse_url(&self, key: &IssueKey) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    /// Lists the comments of a ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn comments(&self, key: &IssueKey) -> Result<Value> {
        self.request(
            Method::GET,
            &format!("/rest/api/2/issue/{}/comment", key),
            &[],
            None,
        )
    }

    /// Adds a comment to a ticket and returns the created comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn add_comment(&self, key: &IssueKey, body: &str) -> Result<Value> {
        self.request(
            Method::POST,
            &format!("/rest/api/2/issue/{}/comment", key),
            &[],
            Some(&json!({ "body": body })),
        )
    }

    /// Sends one request and classifies the response.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Absolute API path such as `/rest/api/2/issue`
    /// * `query` - Query parameters, URL-encoded by the client
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns `RemoteRejected` for 4xx responses and `TransportFailure`
    /// for every other failure.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        let url = parsed
            .map_err(|e| Error::Config(format!("Invalid request URL for {}: {}", path, e)))?;
        let pretty_body = body
            .and_then(|b| serde_json::to_string_pretty(b).ok())
            .unwrap_or_default();
        debug!(%method, %url, body = %pretty_body, "sending request");

        let mut builder = self
            .credentials
            .apply(self.client.request(method.clone(), url.clone()));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let outcome = builder
            .send()
            .map_err(|e| e.to_string())
            .and_then(|response| {
                let status = response.status();
                response
                    .text()
                    .map(|text| (status, text))
                    .map_err(|e| e.to_string())
            });

        let result = match outcome {
            Ok((status, text)) => classify(&method, &url, status, &text),
            Err(message) => Err(Error::TransportFailure {
                method: method.to_string(),
                url: url.to_string(),
                message,
            }),
        };

        match &result {
            Ok(value) => debug!(%method, %url, response = %value, "request succeeded"),
            Err(err) => error!(%method, %url, body = %pretty_body, error = %err, "request failed"),
        }
        result
    }
}

fn classify(method: &Method, url: &Url, status: StatusCode, text: &str) -> Result<Value> {
    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(text).map_err(|e| Error::TransportFailure {
            method: method.to_string(),
            url: url.to_string(),
            message: format!("Undecodable response body: {}", e),
        });
    }

    if status.is_client_error() {
        let payload =
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        return Err(Error::RemoteRejected {
            status: status.as_u16(),
            method: method.to_string(),
            url: url.to_string(),
            payload,
        });
    }

    Err(Error::TransportFailure {
        method: method.to_string(),
        url: url.to_string(),
        message: format!("Unexpected status {}: {}", status, text),
    })
}
