//! Access guards.
//!
//! - [`RoleGuard`] protects a route: children render on match, otherwise the
//!   current history entry is replaced with the fallback path.
//! - [`AuthorityGuard`] keeps the old authority-list semantics: the legacy
//!   matcher runs first and only a denial falls through to [`RoleGuard`].
//! - [`RoleBasedContent`] hides a widget: on denial it renders its fallback
//!   and never navigates.
//!
//! Every guard re-evaluates against the session on each render.

use crate::auth::{use_authority, use_portal_config};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{authority_match, content_visible, route_guard, Role, RouteDecision};
use std::rc::Rc;

/// Allowed-role list for a guard from typed roles.
pub fn allow(roles: &[Role]) -> Vec<String> {
    roles.iter().map(|r| r.as_str().to_string()).collect()
}

/// Overrides how redirects replace the current history entry.
/// Without one in context the router's navigator is used.
#[derive(Clone)]
pub struct HistoryReplace(pub Rc<dyn Fn(&str)>);

/// Replace the current history entry with `path`.
pub(crate) fn redirect_replace(path: &str) {
    if let Some(HistoryReplace(replace)) = try_consume_context::<HistoryReplace>() {
        replace(path);
        return;
    }

    match path.parse::<Route>() {
        Ok(route) => {
            navigator().replace(route);
        }
        Err(_) => {
            navigator().replace(NavigationTarget::<Route>::External(path.to_string()));
        }
    }
}

/// Route-level guard. An empty `allowed_roles` renders children unconditionally.
#[component]
pub fn RoleGuard(
    #[props(default)] allowed_roles: Vec<String>,
    fallback_path: Option<String>,
    children: Element,
) -> Element {
    let roles = use_authority();
    let config = use_portal_config();
    let fallback = fallback_path
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| config.access_denied_path().to_string());

    match route_guard(&roles, Some(allowed_roles.as_slice()), Some(fallback.as_str())) {
        RouteDecision::Render => rsx! { {children} },
        RouteDecision::Redirect(path) => {
            tracing::debug!(?allowed_roles, %path, "role guard denied access");
            redirect_replace(&path);
            rsx! {}
        }
    }
}

/// Legacy guard over flat authority lists.
///
/// `user_authority` is compared literally against `authority`; an empty
/// side (or no `authority` at all) lets the children through.
#[component]
pub fn AuthorityGuard(
    user_authority: Option<Vec<String>>,
    authority: Option<Vec<String>>,
    children: Element,
) -> Element {
    let user_authority = user_authority.unwrap_or_default();

    if authority_match(&user_authority, authority.as_deref(), false) {
        return rsx! { {children} };
    }

    rsx! {
        RoleGuard { allowed_roles: authority.unwrap_or_default(), {children} }
    }
}

/// Widget-level guard. Renders `fallback` (nothing by default) when denied.
#[component]
pub fn RoleBasedContent(
    #[props(default)] allowed_roles: Vec<String>,
    fallback: Option<Element>,
    children: Element,
) -> Element {
    let roles = use_authority();

    if content_visible(&roles, Some(allowed_roles.as_slice())) {
        return rsx! { {children} };
    }

    tracing::trace!(?allowed_roles, "hiding role-based content");
    match fallback {
        Some(fallback) => rsx! { {fallback} },
        None => rsx! {},
    }
}
