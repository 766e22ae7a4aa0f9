use crate::guards::{allow, RoleGuard};
use dioxus::prelude::*;
use shared_types::{Role, RoleSummary};

/// Portal administration landing page.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RoleGuard { allowed_roles: allow(&[Role::CsAdmin]),
            section { class: "portal-panel",
                h2 { "Administration" }
                p { "Manage tenants, users and role assignments across the portal." }
                Link { to: crate::routes::Route::RoleCatalog {}, class: "portal-link", "View role catalog" }
            }
        }
    }
}

/// Role catalog with the effective landing route for each role.
#[component]
pub fn RoleCatalog() -> Element {
    rsx! {
        RoleGuard { allowed_roles: allow(&[Role::CsAdmin]),
            RoleTable {}
        }
    }
}

#[component]
fn RoleTable() -> Element {
    let roles = use_server_future(move || async move { server::api::list_roles().await })?;

    let view = match &*roles.read() {
        Some(Ok(list)) => rsx! { RoleRows { roles: list.clone() } },
        Some(Err(e)) => {
            let msg = shared_types::AppError::friendly_message(&e.to_string());
            rsx! { div { class: "portal-error", "{msg}" } }
        }
        None => rsx! { p { "Loading roles..." } },
    };
    view
}

#[component]
fn RoleRows(roles: Vec<RoleSummary>) -> Element {
    rsx! {
        table { class: "portal-table",
            thead {
                tr {
                    th { "Role" }
                    th { "Rank" }
                    th { "Home" }
                    th { "Aliases" }
                }
            }
            tbody {
                for summary in roles {
                    tr { key: "{summary.role}",
                        td { "{summary.role}" }
                        td { "{summary.rank}" }
                        td { code { "{summary.home_path}" } }
                        td { {summary.aliases.join(", ")} }
                    }
                }
            }
        }
    }
}
