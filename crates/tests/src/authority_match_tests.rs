use shared_types::{authority_match, has_any_role};

const NONE: Option<&[&str]> = None;

#[test]
fn empty_user_roles_fail_open() {
    assert!(authority_match::<&str, &str>(&[], Some(&["X"][..]), false));
}

#[test]
fn empty_requirement_fails_open() {
    assert!(authority_match::<&str, &str>(&["X"], Some(&[]), false));
}

#[test]
fn absent_requirement_fails_open() {
    assert!(authority_match(&["X"], NONE, false));
}

#[test]
fn literal_intersection_grants() {
    assert!(authority_match(&["X"], Some(&["X"][..]), false));
    assert!(authority_match(&["A", "X"], Some(&["X", "B"][..]), false));
}

#[test]
fn disjoint_sets_deny() {
    assert!(!authority_match(&["Y"], Some(&["X"][..]), false));
}

#[test]
fn empty_check_flag_denies_empty_inputs() {
    assert!(!authority_match::<&str, &str>(&[], Some(&["X"][..]), true));
    assert!(!authority_match::<&str, &str>(&["X"], Some(&[]), true));
    assert!(!authority_match(&["X"], NONE, true));
}

#[test]
fn empty_check_flag_does_not_affect_non_empty_inputs() {
    assert!(authority_match(&["X"], Some(&["X"][..]), true));
    assert!(!authority_match(&["Y"], Some(&["X"][..]), true));
}

#[test]
fn matcher_does_not_resolve_aliases() {
    // The resolver treats ADMIN as CS_ADMIN; the literal matcher must not.
    assert!(!authority_match(&["ADMIN"], Some(&["CS_ADMIN"][..]), false));
    assert!(has_any_role(&["ADMIN"], &["CS_ADMIN"]));
}

#[test]
fn matcher_accepts_strings_outside_the_role_registry() {
    assert!(authority_match(&["report:read"], Some(&["report:read"][..]), false));
    assert!(!has_any_role(&["report:read"], &["report:read"]));
}
