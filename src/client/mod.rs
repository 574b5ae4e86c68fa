//! Bundled HTTP transport.
//!
//! [`Teams`](crate::Teams) works with any [`Transport`](crate::Transport);
//! this module provides a ready-made one on top of `reqwest`.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config - ClientConfig (base URL, token, headers, timeout, proxy)
//! ├── fetch  - HttpTransport and HttpResponse
//! └── utils  - status classification and URL resolution
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HttpTransport`] | reqwest-backed transport |
//! | [`HttpResponse`] | Status, headers and body of a 2xx response |
//! | [`ClientConfig`] | Transport configuration |
//!
//! # Examples
//!
//! ```
//! use github_teams::client::{ClientConfig, HttpTransport};
//!
//! // Default configuration
//! let transport = HttpTransport::new().unwrap();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     request_timeout_ms: 5_000,
//!     ..ClientConfig::new("https://ghe.example.com/api/v3")
//! };
//! let transport = HttpTransport::with_config(config).unwrap();
//! assert_eq!(
//!     transport.url_for("orgs/acme/teams").unwrap().as_str(),
//!     "https://ghe.example.com/api/v3/orgs/acme/teams"
//! );
//! ```

mod config;
mod fetch;
mod utils;

pub use config::{ClientConfig, DEFAULT_ACCEPT, DEFAULT_BASE_URL};
pub use fetch::{HttpResponse, HttpTransport};
pub use utils::*;
