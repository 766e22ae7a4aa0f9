use crate::Role;
use std::collections::BTreeMap;

/// Route the guards redirect to when access is denied.
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

/// Landing route for a user without any recognised role.
pub const FALLBACK_HOME_PATH: &str = "/access-denied";

/// Entry route for each role, plus a fallback for users with no known role.
///
/// The built-in map is total over [`Role::ALL`]; overrides replace entries
/// but can never remove one.
#[derive(Debug, Clone, PartialEq)]
pub struct RolePathMap {
    paths: BTreeMap<Role, String>,
    fallback: String,
}

impl Default for RolePathMap {
    fn default() -> Self {
        let paths = Role::ALL
            .iter()
            .map(|role| (*role, default_home_path(*role).to_string()))
            .collect();
        Self {
            paths,
            fallback: FALLBACK_HOME_PATH.to_string(),
        }
    }
}

/// Built-in entry route for a role.
pub fn default_home_path(role: Role) -> &'static str {
    match role {
        Role::CsAdmin => "/admin",
        Role::CsUser => "/support",
        Role::TenantAdmin => "/tenant",
        Role::EndUser => "/reports",
    }
}

impl RolePathMap {
    /// Replace the entry route for one role. Empty paths are ignored.
    pub fn with_override(mut self, role: Role, path: impl Into<String>) -> Self {
        let path = path.into();
        if !path.is_empty() {
            self.paths.insert(role, path);
        }
        self
    }

    /// Replace the fallback route. Empty paths are ignored.
    pub fn with_fallback(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !path.is_empty() {
            self.fallback = path;
        }
        self
    }

    pub fn path_for(&self, role: Role) -> Option<&str> {
        self.paths.get(&role).map(String::as_str)
    }

    /// Look up a canonical role identifier. Unknown identifiers have no path.
    pub fn path_for_str(&self, role: &str) -> Option<&str> {
        Role::parse(role).and_then(|r| self.path_for(r))
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
