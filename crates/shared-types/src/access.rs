//! Render decisions behind the three access guards.
//!
//! Each decision is evaluated fresh from the current role set; nothing is
//! cached between evaluations.

use crate::{authority::authority_match, resolver::has_any_role, ACCESS_DENIED_PATH};

/// Outcome of a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

/// What a route-level guard should do with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    /// Replace the current history entry with this path.
    Redirect(String),
}

/// Check a role set against a guard's allowed roles.
///
/// An empty or absent requirement grants unconditionally. Otherwise the
/// session must hold at least one allowed role (aliases canonicalized).
pub fn role_access<S, A>(session_roles: &[S], allowed_roles: Option<&[A]>) -> Access
where
    S: AsRef<str>,
    A: AsRef<str>,
{
    match allowed_roles {
        None => Access::Granted,
        Some(allowed) if allowed.is_empty() => Access::Granted,
        Some(allowed) if has_any_role(session_roles, allowed) => Access::Granted,
        Some(_) => Access::Denied,
    }
}

/// Route redirect guard: render on match, otherwise redirect to
/// `fallback_path` (default [`ACCESS_DENIED_PATH`]).
pub fn route_guard<S, A>(
    session_roles: &[S],
    allowed_roles: Option<&[A]>,
    fallback_path: Option<&str>,
) -> RouteDecision
where
    S: AsRef<str>,
    A: AsRef<str>,
{
    match role_access(session_roles, allowed_roles) {
        Access::Granted => RouteDecision::Render,
        Access::Denied => RouteDecision::Redirect(
            fallback_path
                .filter(|p| !p.is_empty())
                .unwrap_or(ACCESS_DENIED_PATH)
                .to_string(),
        ),
    }
}

/// Legacy authority guard: the authority matcher decides first; only when
/// it denies does the route guard run, with `authority` as the allowed roles.
pub fn authority_guard<U, R, S>(
    user_authority: &[U],
    authority: Option<&[R]>,
    session_roles: &[S],
    fallback_path: Option<&str>,
) -> RouteDecision
where
    U: AsRef<str>,
    R: AsRef<str>,
    S: AsRef<str>,
{
    if authority_match(user_authority, authority, false) {
        return RouteDecision::Render;
    }
    route_guard(session_roles, authority, fallback_path)
}

/// Content visibility guard: children are shown iff access is granted.
/// Denial has no side effect; the caller shows its fallback instead.
pub fn content_visible<S, A>(session_roles: &[S], allowed_roles: Option<&[A]>) -> bool
where
    S: AsRef<str>,
    A: AsRef<str>,
{
    role_access(session_roles, allowed_roles).is_granted()
}
