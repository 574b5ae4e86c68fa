//! Deprecation notices for legacy, organization-less team routes.
//!
//! Calling a team operation without an organization still works, but routes
//! to the legacy `teams/{team}` endpoints. Each such call fires exactly one
//! [`DeprecationNotice`] through the [`DeprecationSink`] injected into
//! [`Teams`](crate::Teams). The notice is a side channel: it never changes the
//! request or its result.
//!
//! # Sinks
//!
//! | Sink | Behaviour |
//! |------|-----------|
//! | [`TracingSink`] | `tracing::warn!` on target `github_teams::deprecation` (default) |
//! | [`CollectingSink`] | Keeps every notice for later inspection |
//! | [`NoopSink`] | Drops notices |
//! | [`FnSink`] | Wraps any `Fn(&DeprecationNotice)` closure |
//!
//! # Examples
//!
//! ```
//! use github_teams::{CollectingSink, DeprecationNotice, DeprecationSink};
//!
//! let sink = CollectingSink::new();
//! sink.notify(&DeprecationNotice::legacy_team_route("show", "teams/eng"));
//! assert_eq!(sink.len(), 1);
//! assert_eq!(sink.notices()[0].operation, "show");
//! ```

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Tracing target used by [`TracingSink`].
pub const DEPRECATION_TARGET: &str = "github_teams::deprecation";

/// A single deprecation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// Operation that took the legacy branch (e.g. `show`)
    pub operation: &'static str,
    /// Path actually requested
    pub legacy_path: String,
    /// Human-readable explanation
    pub message: &'static str,
}

impl DeprecationNotice {
    /// Notice for a team operation called without an organization.
    pub fn legacy_team_route(operation: &'static str, legacy_path: impl Into<String>) -> Self {
        Self {
            operation,
            legacy_path: legacy_path.into(),
            message: "calling team endpoints without an organization is deprecated; \
                      pass the organization to use orgs/{org}/teams/{team}",
        }
    }
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.operation, self.legacy_path, self.message)
    }
}

/// Receives deprecation notices.
pub trait DeprecationSink: Send + Sync {
    /// Handle one notice.
    fn notify(&self, notice: &DeprecationNotice);
}

/// Emits notices as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DeprecationSink for TracingSink {
    fn notify(&self, notice: &DeprecationNotice) {
        tracing::warn!(
            target: DEPRECATION_TARGET,
            operation = notice.operation,
            path = %notice.legacy_path,
            "{}",
            notice.message
        );
    }
}

/// Discards notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DeprecationSink for NoopSink {
    fn notify(&self, _notice: &DeprecationNotice) {}
}

/// Records notices in memory.
///
/// Clones share the same storage, so a clone can be handed to
/// [`Teams`](crate::Teams) while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    notices: Arc<Mutex<Vec<DeprecationNotice>>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    pub fn notices(&self) -> Vec<DeprecationNotice> {
        self.notices.lock().clone()
    }

    /// Number of notices received.
    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    /// Whether no notice has been received.
    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }

    /// Remove and return all notices.
    pub fn drain(&self) -> Vec<DeprecationNotice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl DeprecationSink for CollectingSink {
    fn notify(&self, notice: &DeprecationNotice) {
        self.notices.lock().push(notice.clone());
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> DeprecationSink for FnSink<F>
where
    F: Fn(&DeprecationNotice) + Send + Sync,
{
    fn notify(&self, notice: &DeprecationNotice) {
        (self.0)(notice)
    }
}

impl<S: DeprecationSink + ?Sized> DeprecationSink for Arc<S> {
    fn notify(&self, notice: &DeprecationNotice) {
        (**self).notify(notice)
    }
}
