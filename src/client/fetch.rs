//! reqwest-backed [`Transport`] implementation.
//!
//! # Examples
//!
//! ```ignore
//! use github_teams::{ClientConfig, HttpTransport, Teams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::with_config(ClientConfig::from_env())?;
//!     let teams = Teams::new(transport);
//!
//!     let response = teams.all("acme").await?;
//!     let listing: serde_json::Value = response.json()?;
//!     println!("{listing:#}");
//!     Ok(())
//! }
//! ```

use crate::client::config::ClientConfig;
use crate::client::utils::{parse_base_url, resolve_path};
use crate::error::{Error, Result};
use crate::params::Params;
use crate::transport::Transport;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response headers with string values
    pub headers: BTreeMap<String, String>,
    /// Raw body
    pub body: Bytes,
}

impl HttpResponse {
    /// Decode the body as JSON.
    ///
    /// An empty body (e.g. `204 No Content`) decodes as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Look up a header by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// HTTP transport sending JSON requests with reqwest.
///
/// Sends one request per call: no retries, no pagination. Non-2xx responses
/// become [`Error::Status`].
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&config.accept)?);
        headers.insert(USER_AGENT, header_value(&config.user_agent)?);
        if let Some(token) = &config.token {
            let mut auth = header_value(&format!("Bearer {}", token))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .pool_idle_timeout(Duration::from_secs(90))
            .default_headers(headers);

        if !config.proxy_url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.proxy_url)
                .map_err(|e| Error::Config(format!("invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(HttpTransport {
            client,
            base,
            config: Arc::new(config),
        })
    }

    /// Get the transport configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL a relative path resolves to.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        resolve_path(&self.base, path)
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Params>) -> Result<HttpResponse> {
        let url = self.url_for(path)?;
        let mut req_builder = self.client.request(method.clone(), url);
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await?;

        if self.config.enable_logging {
            tracing::debug!(%method, path, status, bytes = body.len(), "response received");
        }

        if !(200..300).contains(&status) {
            return Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(HttpResponse { status, headers, body })
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::Config(format!("invalid header value: {}", e)))
}

#[async_trait]
impl Transport for HttpTransport {
    type Response = HttpResponse;
    type Error = Error;

    async fn get(&self, path: &str) -> Result<HttpResponse> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Params) -> Result<HttpResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Params) -> Result<HttpResponse> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Option<&Params>) -> Result<HttpResponse> {
        self.send(Method::PUT, path, body).await
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse> {
        self.send(Method::DELETE, path, None).await
    }
}
