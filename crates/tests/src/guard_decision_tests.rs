use pretty_assertions::assert_eq;
use shared_types::{
    authority_guard, content_visible, route_guard, Session, ACCESS_DENIED_PATH,
};

use crate::common::{roles, session_with};

const NO_FALLBACK: Option<&str> = None;

#[test]
fn route_guard_redirects_end_user_away_from_tenant_page() {
    let session = session_with(&["END_USER"]);
    let decision = route_guard(session.role_set(), Some(&["TENANT_ADMIN"][..]), NO_FALLBACK);
    assert_eq!(decision, shared_types::RouteDecision::Redirect("/access-denied".into()));
}

#[test]
fn route_guard_without_requirement_renders_for_any_session() {
    for session in [Session::Anonymous, session_with(&["END_USER"]), session_with(&["bogus"])] {
        let decision = route_guard::<_, &str>(session.role_set(), Some(&[]), NO_FALLBACK);
        assert_eq!(decision, shared_types::RouteDecision::Render);
        let decision = route_guard::<_, &str>(session.role_set(), None, NO_FALLBACK);
        assert_eq!(decision, shared_types::RouteDecision::Render);
    }
}

#[test]
fn route_guard_uses_explicit_fallback() {
    let decision = route_guard(
        Session::Anonymous.role_set(),
        Some(&["CS_USER"][..]),
        Some("/login"),
    );
    assert_eq!(decision, shared_types::RouteDecision::Redirect("/login".into()));
}

#[test]
fn route_guard_never_redirects_to_empty_path() {
    let decision = route_guard(Session::Anonymous.role_set(), Some(&["CS_USER"][..]), Some(""));
    assert_eq!(
        decision,
        shared_types::RouteDecision::Redirect(ACCESS_DENIED_PATH.into())
    );
}

#[test]
fn content_guard_hides_children_without_session() {
    assert!(!content_visible(Session::Anonymous.role_set(), Some(&["CS_USER"][..])));
}

#[test]
fn content_guard_without_requirement_is_visible() {
    assert!(content_visible::<_, &str>(Session::Anonymous.role_set(), Some(&[])));
}

#[test]
fn legacy_guard_lets_matcher_allow_before_route_guard() {
    // Same requirement on both paths: the literal matcher accepts a string
    // the role registry does not know, so route_guard alone denies it.
    let session = session_with(&["END_USER"]);
    let authority = roles(&["report:read"]);
    let user_authority = roles(&["report:read"]);

    let alone = route_guard(session.role_set(), Some(authority.as_slice()), NO_FALLBACK);
    assert_eq!(alone, shared_types::RouteDecision::Redirect("/access-denied".into()));

    let legacy = authority_guard(
        &user_authority,
        Some(authority.as_slice()),
        session.role_set(),
        NO_FALLBACK,
    );
    assert_eq!(legacy, shared_types::RouteDecision::Render);
}

#[test]
fn legacy_guard_fails_open_on_empty_user_authority() {
    let session = session_with(&["END_USER"]);
    let legacy = authority_guard::<String, _, _>(
        &[],
        Some(&["TENANT_ADMIN"][..]),
        session.role_set(),
        NO_FALLBACK,
    );
    assert_eq!(legacy, shared_types::RouteDecision::Render);
}

#[test]
fn legacy_guard_falls_through_to_route_guard_on_mismatch() {
    // Literal match fails, the route guard resolves the ADMIN alias.
    let session = session_with(&["ADMIN"]);
    let legacy = authority_guard(
        &["ADMIN"],
        Some(&["CS_ADMIN"][..]),
        session.role_set(),
        NO_FALLBACK,
    );
    assert_eq!(legacy, shared_types::RouteDecision::Render);

    let session = session_with(&["END_USER"]);
    let legacy = authority_guard(
        &["END_USER"],
        Some(&["CS_ADMIN"][..]),
        session.role_set(),
        Some("/denied"),
    );
    assert_eq!(legacy, shared_types::RouteDecision::Redirect("/denied".into()));
}

#[test]
fn decisions_are_pure() {
    let session = session_with(&["TENANT_ADMIN"]);
    let allowed = ["CS_ADMIN", "TENANT_ADMIN"];
    let first = route_guard(session.role_set(), Some(&allowed[..]), NO_FALLBACK);
    for _ in 0..5 {
        assert_eq!(route_guard(session.role_set(), Some(&allowed[..]), NO_FALLBACK), first);
    }
}
