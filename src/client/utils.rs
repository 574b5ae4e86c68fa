//! Helpers shared by the HTTP transport.

use crate::error::{InvalidIdentifier, Result};
use crate::path::is_addressable_segment;
use url::Url;

/// Check if status code indicates retryable error
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 425 | 429 | 502 | 503 | 504)
}

/// Check if status code indicates access denied
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Parse an API root so relative paths resolve beneath it.
///
/// A trailing slash is added when missing, otherwise `Url::join` would
/// replace the last segment (`.../api/v3` + `teams` = `.../api/teams`).
pub fn parse_base_url(base: &str) -> Result<Url> {
    let trimmed = base.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Ok(Url::parse(&with_slash)?)
}

/// Resolve an encoded relative path against the API root.
///
/// Empty and dot segments are refused: `Url::join` would collapse them and
/// address a different resource than the one named.
pub fn resolve_path(base: &Url, path: &str) -> Result<Url> {
    let relative = path.trim_start_matches('/');
    if let Some(segment) = relative.split('/').find(|s| !is_addressable_segment(s)) {
        return Err(InvalidIdentifier(segment.to_string()).into());
    }
    Ok(base.join(relative)?)
}
