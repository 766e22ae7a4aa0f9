use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Role, RolePathMap, ACCESS_DENIED_PATH, FALLBACK_HOME_PATH};

/// Route settings from the `[routes]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    /// Where guards redirect when no explicit fallback is given.
    #[serde(default = "default_access_denied")]
    pub access_denied: String,
    /// Landing route for users without a recognised role.
    #[serde(default = "default_fallback_home")]
    pub fallback_home: String,
    /// Per-role landing routes keyed by canonical role identifier.
    /// Entries override the built-in map; missing roles keep their default.
    #[serde(default)]
    pub home: BTreeMap<String, String>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            access_denied: default_access_denied(),
            fallback_home: default_fallback_home(),
            home: BTreeMap::new(),
        }
    }
}

/// Settings for the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Identity-provider sign-in page the login view links to.
    #[serde(default = "default_sign_in_url")]
    pub sign_in_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_url: default_sign_in_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file yields the
/// built-in configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortalConfig {
    #[serde(default)]
    pub routes: RouteConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_access_denied() -> String {
    ACCESS_DENIED_PATH.to_string()
}

fn default_fallback_home() -> String {
    FALLBACK_HOME_PATH.to_string()
}

fn default_sign_in_url() -> String {
    "/auth/sign-in".to_string()
}

impl PortalConfig {
    /// Effective role-path map: built-in defaults with configured overrides.
    /// Keys that are not canonical role identifiers are skipped.
    pub fn role_paths(&self) -> RolePathMap {
        self.routes
            .home
            .iter()
            .filter_map(|(key, path)| Role::parse(key).map(|role| (role, path)))
            .fold(RolePathMap::default(), |map, (role, path)| {
                map.with_override(role, path.clone())
            })
            .with_fallback(self.routes.fallback_home.clone())
    }

    /// `[routes.home]` keys that do not name a canonical role.
    pub fn unknown_home_keys(&self) -> Vec<&str> {
        self.routes
            .home
            .keys()
            .filter(|key| Role::parse(key).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Guard redirect target, never empty.
    pub fn access_denied_path(&self) -> &str {
        if self.routes.access_denied.is_empty() {
            ACCESS_DENIED_PATH
        } else {
            &self.routes.access_denied
        }
    }
}
