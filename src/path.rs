//! Request path construction.
//!
//! Paths are built from a mix of fixed literals (`orgs`, `teams`, `repos`, ...)
//! and caller-supplied identifiers. Identifiers are always percent-encoded with
//! the RFC 3986 unreserved set, so a team slug such as `a/b` can never inject an
//! extra path segment.
//!
//! Encoding alone does not cover `.` and `..`: both are unreserved and URL
//! resolution collapses them, so `orgs/acme/teams/..` would address the
//! organization itself. Such identifiers (and empty ones) are rejected when the
//! path is built.
//!
//! ```
//! use github_teams::ApiPath;
//!
//! let path = ApiPath::new()
//!     .literal("orgs")
//!     .segment("acme corp")
//!     .literal("teams")
//!     .segment("a/b");
//! assert_eq!(path.build().unwrap(), "orgs/acme%20corp/teams/a%2Fb");
//!
//! let escape = ApiPath::new().literal("teams").segment("..");
//! assert!(escape.build().is_err());
//! ```

use crate::error::InvalidIdentifier;
use std::fmt;

/// A relative API path made of already-encoded segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
    rejected: Option<InvalidIdentifier>,
}

impl ApiPath {
    /// Start an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fixed segment verbatim.
    pub fn literal(mut self, segment: &'static str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append a caller-supplied identifier, percent-encoded.
    ///
    /// An identifier that is empty or a dot segment is remembered and
    /// reported by [`build`](ApiPath::build).
    pub fn segment(mut self, value: &str) -> Self {
        let encoded = encode_segment(value);
        if self.rejected.is_none() && !is_addressable_segment(&encoded) {
            self.rejected = Some(InvalidIdentifier(value.to_string()));
        }
        self.segments.push(encoded);
        self
    }

    /// Encoded segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render the path.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] for the first identifier that would not
    /// survive URL resolution as its own segment.
    pub fn build(self) -> Result<String, InvalidIdentifier> {
        match self.rejected {
            Some(rejected) => Err(rejected),
            None => Ok(self.segments.join("/")),
        }
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Percent-encode one path segment.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is encoded.
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Whether an encoded segment stays in place when resolved as part of a URL.
///
/// False for empty segments and for `.`/`..`, including spellings with
/// `%2E`, which URL parsers also treat as dot segments.
pub fn is_addressable_segment(encoded: &str) -> bool {
    let decoded_dots = encoded.to_ascii_lowercase().replace("%2e", ".");
    !matches!(decoded_dots.as_str(), "" | "." | "..")
}
