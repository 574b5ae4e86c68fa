//! Parameter bags and the normalization rules applied before dispatch.
//!
//! Callers hand [`Teams`](crate::Teams) a [`Params`] bag for create, update and
//! add-repository calls. The bag is never modified in place: every rule below
//! borrows the input and returns a new, normalized bag.
//!
//! | Rule | Applies to | Effect |
//! |------|------------|--------|
//! | [`Params::require`] | create, update | `name` must be present |
//! | [`Params::with_coerced_permission`] | create, update, add repository | unknown `permission` becomes `pull` |
//! | [`Params::with_repo_names_as_list`] | create | scalar `repo_names` becomes a one-element list |
//!
//! A key holding JSON `null` is treated as absent by every rule.
//!
//! # Examples
//!
//! ```
//! use github_teams::Params;
//! use serde_json::json;
//!
//! let params = Params::new()
//!     .with("name", "eng")
//!     .with("permission", "superadmin")
//!     .with("repo_names", "acme/widgets");
//!
//! let normalized = params.with_coerced_permission().with_repo_names_as_list();
//! assert_eq!(normalized.get("permission"), Some(&json!("pull")));
//! assert_eq!(normalized.get("repo_names"), Some(&json!(["acme/widgets"])));
//!
//! // the original bag is untouched
//! assert_eq!(params.get("permission"), Some(&json!("superadmin")));
//! ```

use crate::error::MissingRequiredField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Key holding the team name.
pub const NAME: &str = "name";
/// Key holding the permission level.
pub const PERMISSION: &str = "permission";
/// Key holding the repositories a new team is granted.
pub const REPO_NAMES: &str = "repo_names";

/// Permission a team holds on a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Read access
    #[default]
    Pull,
    /// Read and write access
    Push,
    /// Full administrative access
    Admin,
}

impl Permission {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Push => "push",
            Permission::Admin => "admin",
        }
    }

    /// Map any JSON value onto a permission.
    ///
    /// Only the exact strings `pull`, `push` and `admin` are recognised;
    /// everything else, including other JSON types, yields [`Permission::Pull`].
    pub fn coerce(value: &Value) -> Permission {
        value
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three permission levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission level: {0}")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pull" => Ok(Permission::Pull),
            "push" => Ok(Permission::Push),
            "admin" => Ok(Permission::Admin),
            other => Err(UnknownPermission(other.to_string())),
        }
    }
}

impl From<Permission> for Value {
    fn from(permission: Permission) -> Self {
        Value::String(permission.as_str().to_string())
    }
}

/// An unordered string-keyed bag of JSON values sent as a request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value. `null` values are reported as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Whether `key` holds a non-null value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries, `null` values included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the bag into the underlying JSON map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Fail unless `field` holds a non-null value.
    ///
    /// # Errors
    ///
    /// Returns [`MissingRequiredField`] naming `field`.
    pub fn require(&self, field: &'static str) -> Result<(), MissingRequiredField> {
        if self.contains(field) {
            Ok(())
        } else {
            Err(MissingRequiredField(field))
        }
    }

    /// Copy of this bag with an unrecognised `permission` replaced by `pull`.
    ///
    /// Absent permissions stay absent so the server default applies.
    pub fn with_coerced_permission(&self) -> Params {
        let mut out = self.clone();
        if let Some(value) = self.get(PERMISSION) {
            let permission = Permission::coerce(value);
            if value.as_str() != Some(permission.as_str()) {
                out.0.insert(PERMISSION.to_string(), permission.into());
            }
        }
        out
    }

    /// Copy of this bag with a scalar `repo_names` wrapped in a list.
    pub fn with_repo_names_as_list(&self) -> Params {
        let mut out = self.clone();
        if let Some(value) = self.get(REPO_NAMES) {
            if !value.is_array() {
                out.0
                    .insert(REPO_NAMES.to_string(), Value::Array(vec![value.clone()]));
            }
        }
        out
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        Value::Object(params.0)
    }
}

/// Fails for anything but a JSON object.
impl TryFrom<Value> for Params {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permission_parse_and_display() {
        for p in [Permission::Pull, Permission::Push, Permission::Admin] {
            assert_eq!(p.as_str().parse::<Permission>().unwrap(), p);
            assert_eq!(p.to_string(), p.as_str());
        }
        assert!("Admin".parse::<Permission>().is_err());
    }

    #[test]
    fn test_permission_coerce() {
        assert_eq!(Permission::coerce(&json!("push")), Permission::Push);
        assert_eq!(Permission::coerce(&json!("superadmin")), Permission::Pull);
        assert_eq!(Permission::coerce(&json!(1)), Permission::Pull);
        assert_eq!(Permission::coerce(&json!(["admin"])), Permission::Pull);
    }

    #[test]
    fn test_permission_serde() {
        assert_eq!(serde_json::to_value(Permission::Admin).unwrap(), json!("admin"));
        let p: Permission = serde_json::from_value(json!("push")).unwrap();
        assert_eq!(p, Permission::Push);
    }

    #[test]
    fn test_require() {
        let params = Params::new().with("name", "eng");
        assert!(params.require(NAME).is_ok());
        assert_eq!(Params::new().require(NAME), Err(MissingRequiredField("name")));

        let null_name = Params::new().with("name", Value::Null);
        assert_eq!(null_name.require(NAME), Err(MissingRequiredField("name")));
    }

    #[test]
    fn test_coerce_permission_rewrites_unknown() {
        for bad in [json!("superadmin"), json!("PUSH"), json!(""), json!(7), json!(true)] {
            let params = Params::new().with(PERMISSION, bad);
            assert_eq!(params.with_coerced_permission().get(PERMISSION), Some(&json!("pull")));
        }
    }

    #[test]
    fn test_coerce_permission_keeps_valid() {
        for good in ["pull", "push", "admin"] {
            let params = Params::new().with(PERMISSION, good);
            assert_eq!(params.with_coerced_permission(), params);
        }
    }

    #[test]
    fn test_coerce_permission_leaves_absent_and_null() {
        let params = Params::new().with("name", "eng");
        assert_eq!(params.with_coerced_permission(), params);

        let null = Params::new().with(PERMISSION, Value::Null);
        assert_eq!(null.with_coerced_permission(), null);
    }

    #[test]
    fn test_repo_names_wrapping() {
        let scalar = Params::new().with(REPO_NAMES, "acme/widgets");
        assert_eq!(
            scalar.with_repo_names_as_list().get(REPO_NAMES),
            Some(&json!(["acme/widgets"]))
        );

        let list = Params::new().with(REPO_NAMES, json!(["a", "b"]));
        assert_eq!(list.with_repo_names_as_list(), list);

        assert_eq!(Params::new().with_repo_names_as_list(), Params::new());
    }

    #[test]
    fn test_normalization_does_not_touch_input() {
        let params = Params::new()
            .with(PERMISSION, "owner")
            .with(REPO_NAMES, "widgets");
        let _ = params.with_coerced_permission().with_repo_names_as_list();
        assert_eq!(params.get(PERMISSION), Some(&json!("owner")));
        assert_eq!(params.get(REPO_NAMES), Some(&json!("widgets")));
    }

    #[test]
    fn test_conversions() {
        let params = Params::try_from(json!({"name": "eng"})).unwrap();
        assert_eq!(params.len(), 1);
        assert!(Params::try_from(json!("eng")).is_err());

        let collected: Params = vec![("name", "eng"), ("privacy", "closed")].into_iter().collect();
        assert_eq!(Value::from(collected), json!({"name": "eng", "privacy": "closed"}));
    }
}
