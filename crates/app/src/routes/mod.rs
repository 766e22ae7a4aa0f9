pub mod access_denied;
pub mod account;
pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod programs;
pub mod reports;
pub mod support;
pub mod tenant;

use crate::auth::{sign_out_then, use_auth, use_role, use_session};
use dioxus::prelude::*;
use shared_types::nav_visibility;

use access_denied::AccessDenied;
use account::Account;
use admin::{AdminDashboard, RoleCatalog};
use home::Home;
use login::Login;
use not_found::NotFound;
use programs::Programs;
use reports::Reports;
use support::SupportDashboard;
use tenant::TenantDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/access-denied")]
    AccessDenied {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/roles")]
    RoleCatalog {},
    #[route("/support")]
    SupportDashboard {},
    #[route("/tenant")]
    TenantDashboard {},
    #[route("/reports")]
    Reports {},
    #[route("/programs")]
    Programs {},
    #[route("/account")]
    Account {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Session layout. Loads the current user and sends anonymous visitors to /login.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                tracing::debug!(user_id = %user.user_id, roles = ?user.authority, "session established");
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {
                redirect: Some(route.to_string()),
            });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with role-derived navigation.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let session = use_session();
    let role = use_role();

    let vis = nav_visibility(role.highest);

    let page_title = match &route {
        Route::Home {} => "Home",
        Route::AdminDashboard {} => "Administration",
        Route::RoleCatalog {} => "Roles",
        Route::SupportDashboard {} => "Support",
        Route::TenantDashboard {} => "Tenant",
        Route::Reports {} => "Reports",
        Route::Programs {} => "Programs",
        Route::Account {} => "Account",
        _ => "",
    };

    let user_name = session
        .user()
        .map(|u| u.user_name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let role_label = role
        .highest
        .map(|r| r.as_str().to_string())
        .unwrap_or_else(|| "no role".to_string());

    rsx! {
        div { class: "portal-shell",
            nav { class: "portal-nav",
                div { class: "portal-brand", "Reporting Portal" }

                if vis.overview {
                    Link { to: Route::Home {}, class: "portal-nav-link", "Home" }
                }
                if vis.reports {
                    Link { to: Route::Reports {}, class: "portal-nav-link", "Reports" }
                }
                if vis.programs {
                    Link { to: Route::Programs {}, class: "portal-nav-link", "Programs" }
                }
                if vis.support {
                    Link { to: Route::SupportDashboard {}, class: "portal-nav-link", "Support" }
                }
                if vis.tenant {
                    Link { to: Route::TenantDashboard {}, class: "portal-nav-link", "Tenant" }
                }
                if vis.administration {
                    Link { to: Route::AdminDashboard {}, class: "portal-nav-link", "Administration" }
                    Link { to: Route::RoleCatalog {}, class: "portal-nav-link", "Roles" }
                }

                div { class: "portal-nav-footer",
                    Link { to: Route::Account {}, class: "portal-nav-link", "{user_name}" }
                    span { class: "portal-role-badge", "{role_label}" }
                    button {
                        class: "portal-sign-out",
                        onclick: move |_| async move {
                            sign_out_then(server::api::sign_out(), move || {
                                auth.clear_auth();
                                navigator().push(Route::Login { redirect: None });
                            })
                            .await;
                        },
                        "Sign Out"
                    }
                }
            }

            main { class: "portal-main",
                h1 { class: "portal-page-title", "{page_title}" }
                Outlet::<Route> {}
            }
        }
    }
}
