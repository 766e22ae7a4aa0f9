use pretty_assertions::assert_eq;
use server::config::{parse_portal_config, read_portal_config};
use shared_types::{Role, RoleSummary, ACCESS_DENIED_PATH};

const SAMPLE: &str = r#"
[routes]
access_denied = "/no-access"
fallback_home = "/start"

[routes.home]
CS_ADMIN = "/ops"
END_USER = "/my"
USER = "/ignored"

[auth]
sign_in_url = "https://id.example.com/authorize"
"#;

#[test]
fn sample_config_drives_home_paths() {
    let config = parse_portal_config(SAMPLE).unwrap();
    let paths = config.role_paths();
    assert_eq!(paths.home_path_for_roles(&["ADMIN"]), "/ops");
    assert_eq!(paths.home_path_for_roles(&["END_USER"]), "/my");
    assert_eq!(paths.home_path_for_roles(&["CS_USER"]), "/support");
    assert_eq!(paths.home_path_for_roles::<&str>(&[]), "/start");
    assert_eq!(config.access_denied_path(), "/no-access");
    assert_eq!(config.auth.sign_in_url, "https://id.example.com/authorize");
    assert_eq!(config.unknown_home_keys(), vec!["USER"]);
}

#[test]
fn catalog_reflects_configured_paths() {
    let config = parse_portal_config(SAMPLE).unwrap();
    let catalog = RoleSummary::catalog(&config.role_paths());
    let homes: Vec<(Role, &str)> = catalog
        .iter()
        .map(|s| (s.role, s.home_path.as_str()))
        .collect();
    assert_eq!(
        homes,
        vec![
            (Role::CsAdmin, "/ops"),
            (Role::CsUser, "/support"),
            (Role::TenantAdmin, "/tenant"),
            (Role::EndUser, "/my"),
        ]
    );
}

#[test]
fn missing_config_file_keeps_built_in_routes() {
    let config = read_portal_config("/nonexistent/portal/config.toml");
    assert_eq!(config.access_denied_path(), ACCESS_DENIED_PATH);
    assert_eq!(config.role_paths().path_for(Role::TenantAdmin), Some("/tenant"));
}
