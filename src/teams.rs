//! Team management requests.
//!
//! [`Teams`] turns one method call into exactly one transport call. Before
//! dispatch it validates and normalizes the caller's [`Params`] and builds a
//! path from percent-encoded identifiers.
//!
//! # Routing
//!
//! Operations addressing a single team accept an optional organization:
//!
//! | Organization | Path prefix | Side effect |
//! |--------------|-------------|-------------|
//! | `Some(org)` | `orgs/{org}/teams/{team}` | none |
//! | `None` | `teams/{team}` (legacy) | one [`DeprecationNotice`] |
//!
//! Verb and body are the same either way.
//!
//! # Operations
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | [`all`](Teams::all) | GET | `orgs/{org}/teams` |
//! | [`create`](Teams::create) | POST | `orgs/{org}/teams` |
//! | [`show`](Teams::show) | GET | `{team}` |
//! | [`update`](Teams::update) | PATCH | `{team}` |
//! | [`remove`](Teams::remove) | DELETE | `{team}` |
//! | [`members`](Teams::members) | GET | `{team}/members` |
//! | [`check`](Teams::check) | GET | `{team}/memberships/{user}` |
//! | [`add_member`](Teams::add_member) | PUT | `{team}/memberships/{user}` |
//! | [`remove_member`](Teams::remove_member) | DELETE | `{team}/memberships/{user}` |
//! | [`repositories`](Teams::repositories) | GET | `teams/{team}/repos` |
//! | [`repository`](Teams::repository) | GET | `teams/{team}/repos/{org}/{repo}` |
//! | [`add_repository`](Teams::add_repository) | PUT | `teams/{team}/repos/{org}/{repo}` |
//! | [`remove_repository`](Teams::remove_repository) | DELETE | `teams/{team}/repos/{org}/{repo}` |
//!
//! `{team}` stands for the routed team prefix from the table above.
//!
//! # Identifiers
//!
//! An empty identifier, `.` or `..` fails with
//! [`InvalidIdentifier`](crate::InvalidIdentifier) before any request is made
//! or notice emitted; URL resolution would otherwise collapse it into a
//! different resource.

use crate::deprecation::{DeprecationNotice, DeprecationSink, TracingSink};
use crate::error::InvalidIdentifier;
use crate::params::{Params, NAME};
use crate::path::ApiPath;
use crate::transport::Transport;
use http::Method;

type Outcome<T> = Result<<T as Transport>::Response, <T as Transport>::Error>;

/// Request builder for the team endpoints.
///
/// Holds no per-call state; a shared reference can serve concurrent callers.
///
/// # Examples
///
/// ```ignore
/// use github_teams::{HttpTransport, Params, Teams};
///
/// let teams = Teams::new(HttpTransport::new()?);
/// let params = Params::new().with("name", "eng").with("repo_names", "acme/widgets");
/// teams.create("acme", &params).await?;
/// teams.add_member("eng", "octocat", Some("acme")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Teams<T, D = TracingSink> {
    transport: T,
    deprecations: D,
}

impl<T: Transport> Teams<T> {
    /// Builder reporting deprecations through `tracing`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            deprecations: TracingSink,
        }
    }
}

impl<T: Transport, D: DeprecationSink> Teams<T, D> {
    /// Builder reporting deprecations to `deprecations`.
    pub fn with_deprecation_sink(transport: T, deprecations: D) -> Self {
        Self {
            transport,
            deprecations,
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The deprecation sink.
    pub fn deprecation_sink(&self) -> &D {
        &self.deprecations
    }

    /// List the teams of an organization.
    pub async fn all(&self, organization: &str) -> Outcome<T> {
        let path = org_teams(organization).build()?;
        self.get(path).await
    }

    /// Create a team.
    ///
    /// `name` is required. A scalar `repo_names` is sent as a one-element list
    /// and an unknown `permission` as `pull`.
    ///
    /// # Errors
    ///
    /// [`MissingRequiredField`](crate::MissingRequiredField) (converted into the transport error) when
    /// `name` is absent; no request is made in that case.
    pub async fn create(&self, organization: &str, params: &Params) -> Outcome<T> {
        params.require(NAME)?;
        let body = params.with_repo_names_as_list().with_coerced_permission();
        let path = org_teams(organization).build()?;
        self.post(path, &body).await
    }

    /// Fetch a team.
    pub async fn show(&self, team: &str, organization: Option<&str>) -> Outcome<T> {
        let path = self.team_path("show", team, organization, |p| p)?;
        self.get(path).await
    }

    /// Edit a team.
    ///
    /// `name` is required and an unknown `permission` is sent as `pull`.
    ///
    /// # Errors
    ///
    /// [`MissingRequiredField`](crate::MissingRequiredField) when `name` is absent, raised before routing
    /// so no deprecation notice is emitted either.
    pub async fn update(
        &self,
        team: &str,
        params: &Params,
        organization: Option<&str>,
    ) -> Outcome<T> {
        params.require(NAME)?;
        let body = params.with_coerced_permission();
        let path = self.team_path("update", team, organization, |p| p)?;
        self.patch(path, &body).await
    }

    /// Delete a team.
    pub async fn remove(&self, team: &str, organization: Option<&str>) -> Outcome<T> {
        let path = self.team_path("remove", team, organization, |p| p)?;
        self.delete(path).await
    }

    /// List the members of a team.
    pub async fn members(&self, team: &str, organization: Option<&str>) -> Outcome<T> {
        let path = self.team_path("members", team, organization, |p| p.literal("members"))?;
        self.get(path).await
    }

    /// Fetch a user's membership in a team.
    pub async fn check(
        &self,
        team: &str,
        username: &str,
        organization: Option<&str>,
    ) -> Outcome<T> {
        let path = self.team_path("check", team, organization, |p| membership(p, username))?;
        self.get(path).await
    }

    /// Add a user to a team, or update their membership.
    pub async fn add_member(
        &self,
        team: &str,
        username: &str,
        organization: Option<&str>,
    ) -> Outcome<T> {
        let path =
            self.team_path("add_member", team, organization, |p| membership(p, username))?;
        self.put(path, None).await
    }

    /// Remove a user from a team.
    pub async fn remove_member(
        &self,
        team: &str,
        username: &str,
        organization: Option<&str>,
    ) -> Outcome<T> {
        let path = self.team_path("remove_member", team, organization, |p| {
            membership(p, username)
        })?;
        self.delete(path).await
    }

    /// List the repositories a team can access.
    pub async fn repositories(&self, team: &str) -> Outcome<T> {
        let path = team_repos(team).build()?;
        self.get(path).await
    }

    /// Check whether a team can access a repository.
    pub async fn repository(&self, team: &str, organization: &str, repository: &str) -> Outcome<T> {
        let path = team_repo(team, organization, repository).build()?;
        self.get(path).await
    }

    /// Grant a team access to a repository.
    ///
    /// The (possibly empty) bag is always sent as the body; an unknown
    /// `permission` is sent as `pull`.
    pub async fn add_repository(
        &self,
        team: &str,
        organization: &str,
        repository: &str,
        params: &Params,
    ) -> Outcome<T> {
        let body = params.with_coerced_permission();
        let path = team_repo(team, organization, repository).build()?;
        self.put(path, Some(&body)).await
    }

    /// Revoke a team's access to a repository.
    pub async fn remove_repository(
        &self,
        team: &str,
        organization: &str,
        repository: &str,
    ) -> Outcome<T> {
        let path = team_repo(team, organization, repository).build()?;
        self.delete(path).await
    }

    /// Resolve the path for a single-team operation.
    ///
    /// `tail` appends the sub-resource. Without an organization the legacy
    /// shape is used and one notice is emitted for the final path, only once
    /// every identifier has been accepted.
    fn team_path(
        &self,
        operation: &'static str,
        team: &str,
        organization: Option<&str>,
        tail: impl FnOnce(ApiPath) -> ApiPath,
    ) -> Result<String, InvalidIdentifier> {
        match organization {
            Some(org) => tail(org_teams(org).segment(team)).build(),
            None => {
                let path = tail(ApiPath::new().literal("teams").segment(team)).build()?;
                self.deprecations
                    .notify(&DeprecationNotice::legacy_team_route(operation, path.as_str()));
                Ok(path)
            }
        }
    }

    async fn get(&self, path: String) -> Outcome<T> {
        trace_dispatch(Method::GET, &path);
        self.transport.get(&path).await
    }

    async fn post(&self, path: String, body: &Params) -> Outcome<T> {
        trace_dispatch(Method::POST, &path);
        self.transport.post(&path, body).await
    }

    async fn patch(&self, path: String, body: &Params) -> Outcome<T> {
        trace_dispatch(Method::PATCH, &path);
        self.transport.patch(&path, body).await
    }

    async fn put(&self, path: String, body: Option<&Params>) -> Outcome<T> {
        trace_dispatch(Method::PUT, &path);
        self.transport.put(&path, body).await
    }

    async fn delete(&self, path: String) -> Outcome<T> {
        trace_dispatch(Method::DELETE, &path);
        self.transport.delete(&path).await
    }
}

fn trace_dispatch(method: Method, path: &str) {
    tracing::debug!(%method, path, "dispatching team request");
}

fn org_teams(organization: &str) -> ApiPath {
    ApiPath::new().literal("orgs").segment(organization).literal("teams")
}

fn membership(path: ApiPath, username: &str) -> ApiPath {
    path.literal("memberships").segment(username)
}

fn team_repos(team: &str) -> ApiPath {
    ApiPath::new().literal("teams").segment(team).literal("repos")
}

fn team_repo(team: &str, organization: &str, repository: &str) -> ApiPath {
    team_repos(team).segment(organization).segment(repository)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_paths() {
        assert_eq!(org_teams("acme").to_string(), "orgs/acme/teams");
        assert_eq!(org_teams("a/b").to_string(), "orgs/a%2Fb/teams");
    }

    #[test]
    fn test_repo_paths() {
        assert_eq!(team_repos("42").to_string(), "teams/42/repos");
        assert_eq!(
            team_repo("42", "acme", "widgets").to_string(),
            "teams/42/repos/acme/widgets"
        );
        assert_eq!(
            team_repo("e ng", "ac/me", "wid?gets").to_string(),
            "teams/e%20ng/repos/ac%2Fme/wid%3Fgets"
        );
    }

    #[test]
    fn test_membership_path() {
        let path = membership(ApiPath::new().literal("teams").segment("eng"), "octo cat");
        assert_eq!(path.to_string(), "teams/eng/memberships/octo%20cat");
    }
}
