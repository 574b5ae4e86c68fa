//! The transport seam.
//!
//! [`Teams`](crate::Teams) never talks to the network itself. It builds a path
//! and an optional body, then hands them to a [`Transport`]. Authentication,
//! base URLs, decoding, retries and rate limiting all live behind this trait.
//!
//! The bundled [`HttpTransport`](crate::HttpTransport) is a reqwest-backed
//! implementation; tests and host applications can supply their own.
//!
//! # Implementing a transport
//!
//! ```
//! use async_trait::async_trait;
//! use github_teams::{Error, Params, Transport};
//!
//! /// Echoes the verb and path back instead of sending anything.
//! struct DryRun;
//!
//! #[async_trait]
//! impl Transport for DryRun {
//!     type Response = String;
//!     type Error = Error;
//!
//!     async fn get(&self, path: &str) -> Result<String, Self::Error> {
//!         Ok(format!("GET {path}"))
//!     }
//!     async fn post(&self, path: &str, _body: &Params) -> Result<String, Self::Error> {
//!         Ok(format!("POST {path}"))
//!     }
//!     async fn patch(&self, path: &str, _body: &Params) -> Result<String, Self::Error> {
//!         Ok(format!("PATCH {path}"))
//!     }
//!     async fn put(&self, path: &str, _body: Option<&Params>) -> Result<String, Self::Error> {
//!         Ok(format!("PUT {path}"))
//!     }
//!     async fn delete(&self, path: &str) -> Result<String, Self::Error> {
//!         Ok(format!("DELETE {path}"))
//!     }
//! }
//! ```

use crate::error::{InvalidIdentifier, MissingRequiredField};
use crate::params::Params;
use async_trait::async_trait;

/// HTTP primitives consumed by [`Teams`](crate::Teams).
///
/// Paths are relative (no leading slash) with identifiers already
/// percent-encoded. Errors are returned to the caller exactly as produced.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whatever a successful call yields.
    type Response: Send;

    /// Transport failure type. Must absorb request-builder precondition
    /// failures (missing fields, unusable identifiers) so both share one
    /// error channel.
    type Error: From<MissingRequiredField> + From<InvalidIdentifier> + Send;

    /// Issue a `GET`.
    async fn get(&self, path: &str) -> Result<Self::Response, Self::Error>;

    /// Issue a `POST` with a JSON body.
    async fn post(&self, path: &str, body: &Params) -> Result<Self::Response, Self::Error>;

    /// Issue a `PATCH` with a JSON body.
    async fn patch(&self, path: &str, body: &Params) -> Result<Self::Response, Self::Error>;

    /// Issue a `PUT`, with or without a JSON body.
    async fn put(&self, path: &str, body: Option<&Params>)
        -> Result<Self::Response, Self::Error>;

    /// Issue a `DELETE`.
    async fn delete(&self, path: &str) -> Result<Self::Response, Self::Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;
    type Error = T::Error;

    async fn get(&self, path: &str) -> Result<Self::Response, Self::Error> {
        (**self).get(path).await
    }

    async fn post(&self, path: &str, body: &Params) -> Result<Self::Response, Self::Error> {
        (**self).post(path, body).await
    }

    async fn patch(&self, path: &str, body: &Params) -> Result<Self::Response, Self::Error> {
        (**self).patch(path, body).await
    }

    async fn put(&self, path: &str, body: Option<&Params>)
        -> Result<Self::Response, Self::Error> {
        (**self).put(path, body).await
    }

    async fn delete(&self, path: &str) -> Result<Self::Response, Self::Error> {
        (**self).delete(path).await
    }
}
