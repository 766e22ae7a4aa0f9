use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{create_test_token, get_json, get_with_cookie, send, test_app};

#[tokio::test]
async fn anonymous_visitor_has_empty_role_set() {
    let app = test_app();
    let body = get_json(&app, None).await;
    assert_eq!(
        body,
        json!({ "authenticated": false, "highest": null, "roles": [] })
    );
}

#[tokio::test]
async fn authority_is_passed_through_verbatim() {
    let app = test_app();
    let token = create_test_token(&["USER", "bogus", "END_USER"]);
    let body = get_json(&app, Some(token.as_str())).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["highest"], "CS_USER");
    assert_eq!(body["roles"], json!(["USER", "bogus", "END_USER"]));
}

#[tokio::test]
async fn tenant_page_renders_for_tenant_admin() {
    let app = test_app();
    let token = create_test_token(&["TENANT_ADMIN"]);
    let (status, body) = send(&app, get_with_cookie("/tenant", Some(token.as_str()))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "tenant");
}

#[tokio::test]
async fn tenant_page_redirects_end_user_to_access_denied() {
    let app = test_app();
    let token = create_test_token(&["END_USER"]);
    let (status, body) = send(&app, get_with_cookie("/tenant", Some(token.as_str()))).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(body, "/access-denied");
}

#[tokio::test]
async fn tenant_page_redirects_anonymous_visitor() {
    let app = test_app();
    let (status, body) = send(&app, get_with_cookie("/tenant", None)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(body, "/access-denied");
}

#[tokio::test]
async fn forged_token_is_anonymous() {
    let app = test_app();
    let body = get_json(&app, Some("eyJhbGciOiJIUzI1NiJ9.e30.c2lnbmF0dXJl")).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn sign_out_expires_cookie() {
    let app = test_app();
    let token = create_test_token(&["CS_ADMIN"]);
    let response = app
        .oneshot(get_with_cookie("/sign-out", Some(token.as_str())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("portal_session=;"), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"), "{set_cookie}");
}
