use pretty_assertions::assert_eq;
use shared_types::{
    has_role, highest_role, home_path_for_roles, Role, RolePathMap, FALLBACK_HOME_PATH,
};

use crate::common::roles;

#[test]
fn highest_role_of_empty_set_is_none() {
    assert_eq!(highest_role::<String>(&[]), None);
}

#[test]
fn highest_role_prefers_best_rank_regardless_of_order() {
    let orders: [&[&str]; 3] = [
        &["END_USER", "TENANT_ADMIN", "CS_USER"],
        &["CS_USER", "END_USER", "TENANT_ADMIN"],
        &["TENANT_ADMIN", "CS_USER", "END_USER"],
    ];
    for set in orders {
        assert_eq!(highest_role(set), Some(Role::CsUser), "{set:?}");
    }
}

#[test]
fn highest_role_ignores_unknown_members() {
    assert_eq!(highest_role(&["bogus", "END_USER", ""]), Some(Role::EndUser));
    assert_eq!(highest_role(&["bogus", "cs_admin"]), None);
}

#[test]
fn highest_role_canonicalizes_legacy_aliases() {
    assert_eq!(highest_role(&["END_USER", "ADMIN"]), Some(Role::CsAdmin));
    assert_eq!(highest_role(&["TENANT_ADMIN", "USER"]), Some(Role::CsUser));
}

#[test]
fn highest_role_is_deterministic() {
    let set = roles(&["TENANT_ADMIN", "USER", "bogus"]);
    let first = highest_role(&set);
    for _ in 0..10 {
        assert_eq!(highest_role(&set), first);
    }
}

#[test]
fn has_role_holds_for_every_known_role_next_to_noise() {
    for role in Role::ALL {
        assert!(has_role(&[role.as_str(), "bogus"], role.as_str()), "{role}");
    }
}

#[test]
fn home_path_for_admin_is_configured_admin_path() {
    assert_eq!(home_path_for_roles(&["CS_ADMIN"]), "/admin");
    assert_eq!(
        home_path_for_roles(&["CS_ADMIN"]),
        RolePathMap::default().path_for(Role::CsAdmin).unwrap()
    );
}

#[test]
fn home_path_for_no_roles_is_fallback() {
    assert_eq!(home_path_for_roles::<&str>(&[]), FALLBACK_HOME_PATH);
    assert_eq!(home_path_for_roles(&["SUPERVISOR"]), FALLBACK_HOME_PATH);
}

#[test]
fn home_path_is_never_empty() {
    let paths = RolePathMap::default().with_fallback("/welcome");
    let sets: [&[&str]; 5] = [&[], &["bogus"], &["END_USER"], &["USER"], &["ADMIN", "END_USER"]];
    for set in sets {
        assert!(!paths.home_path_for_roles(set).is_empty(), "{set:?}");
    }
}
