//! Role resolution over a session's role set.
//!
//! Every member is canonicalized (legacy aliases map onto their role) and
//! unknown strings are dropped before any comparison. Matching is exact and
//! case-sensitive. All functions are pure.

use crate::{Role, RolePathMap};
use std::collections::BTreeSet;

/// Canonicalize a role set into the known roles it contains.
pub fn known_roles<S: AsRef<str>>(roles: &[S]) -> BTreeSet<Role> {
    roles.iter().filter_map(|r| Role::resolve(r.as_ref())).collect()
}

/// The most privileged known role in the set, or `None` for an empty or all-unknown set.
pub fn highest_role<S: AsRef<str>>(roles: &[S]) -> Option<Role> {
    known_roles(roles).into_iter().min_by_key(Role::rank)
}

/// True if `role`, after alias canonicalization, is a member of the canonicalized set.
/// Unknown strings never match, not even themselves.
pub fn has_role<S: AsRef<str>>(roles: &[S], role: &str) -> bool {
    match Role::resolve(role) {
        Some(wanted) => roles
            .iter()
            .any(|r| Role::resolve(r.as_ref()) == Some(wanted)),
        None => false,
    }
}

/// True if any of `wanted` is held according to [`has_role`].
pub fn has_any_role<S: AsRef<str>, W: AsRef<str>>(roles: &[S], wanted: &[W]) -> bool {
    wanted.iter().any(|w| has_role(roles, w.as_ref()))
}

/// Entry route for a role set using the built-in role-path map.
pub fn home_path_for_roles<S: AsRef<str>>(roles: &[S]) -> String {
    RolePathMap::default().home_path_for_roles(roles).to_string()
}

impl RolePathMap {
    /// Entry route for the highest role in the set. Falls back to the
    /// configured fallback when no role is known or the role is unmapped.
    pub fn home_path_for_roles<S: AsRef<str>>(&self, roles: &[S]) -> &str {
        highest_role(roles)
            .and_then(|role| self.path_for(role))
            .unwrap_or(self.fallback())
    }
}
