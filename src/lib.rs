#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # github_teams: validated requests for the GitHub team endpoints
//!
//! This crate maps team-management operations (create a team, add a member,
//! grant a repository, ...) onto well-formed HTTP requests. It checks required
//! fields, normalizes enum-like values and percent-encodes every identifier
//! before handing the request to a [`Transport`].
//!
//! ## Overview
//!
//! - **One request per call**: no caching, retries or pagination
//! - **Validation**: `name` is required for create and update
//! - **Normalization**: unknown `permission` values become `pull`, a scalar
//!   `repo_names` becomes a one-element list
//! - **Safe paths**: identifiers are percent-encoded, so `a/b` stays one segment
//! - **Dual routing**: single-team operations take `Option<&str>` organization;
//!   `None` uses the legacy `teams/{team}` routes and emits a
//!   [`DeprecationNotice`]
//!
//! ## Usage
//!
//! ```ignore
//! use github_teams::{ClientConfig, HttpTransport, Params, Permission, Teams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let teams = Teams::new(HttpTransport::with_config(ClientConfig::from_env())?);
//!
//!     let params = Params::new()
//!         .with("name", "eng")
//!         .with("repo_names", "acme/widgets");
//!     teams.create("acme", &params).await?;
//!
//!     teams.add_member("eng", "octocat", Some("acme")).await?;
//!     teams
//!         .add_repository("eng", "acme", "widgets", &Params::new().with("permission", Permission::Push))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[teams]** - The [`Teams`] request builder
//! - **[params]** - Parameter bags, [`Permission`], normalization rules
//! - **[path]** - Percent-encoded path construction
//! - **[deprecation]** - Legacy-route notices and sinks
//! - **[transport]** - The [`Transport`] trait
//! - **[client]** - reqwest-backed [`HttpTransport`]
//! - **[error]** - Error types and result handling

pub mod client;
pub mod deprecation;
pub mod error;
pub mod params;
pub mod path;
pub mod teams;
pub mod transport;

pub use client::{ClientConfig, HttpResponse, HttpTransport};
pub use deprecation::{
    CollectingSink, DeprecationNotice, DeprecationSink, FnSink, NoopSink, TracingSink,
};
pub use error::{Error, InvalidIdentifier, MissingRequiredField, Result};
pub use params::{Params, Permission};
pub use path::ApiPath;
pub use teams::Teams;
pub use transport::Transport;
