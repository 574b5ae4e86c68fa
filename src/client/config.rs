//! Configuration for the bundled HTTP transport.

use serde::Deserialize;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default `Accept` header.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github+json";

/// Settings for [`HttpTransport`](crate::HttpTransport).
///
/// Deserializable with every field optional, so it can be embedded in a host
/// application's own config file.
///
/// # Examples
///
/// ```
/// use github_teams::ClientConfig;
///
/// let config = ClientConfig {
///     base_url: "https://ghe.example.com/api/v3".into(),
///     token: Some("ghp_example".into()),
///     ..Default::default()
/// };
/// assert_eq!(config.request_timeout_ms, 30_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root that relative paths are resolved against
    pub base_url: String,
    /// Bearer token sent in `Authorization`, if any
    pub token: Option<String>,
    /// `User-Agent` header value
    pub user_agent: String,
    /// `Accept` header value
    pub accept: String,
    /// Per-request timeout
    pub request_timeout_ms: u64,
    /// Proxy for all traffic; empty disables
    pub proxy_url: String,
    /// Emit a debug event for every response
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: concat!("github_teams/", env!("CARGO_PKG_VERSION")).to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            request_timeout_ms: 30_000,
            proxy_url: String::new(),
            enable_logging: false,
        }
    }
}

impl ClientConfig {
    /// Defaults pointed at another API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `GITHUB_API_URL` and `GITHUB_TOKEN`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("GITHUB_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config.token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        config
    }

    /// Builder-style token setter.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
