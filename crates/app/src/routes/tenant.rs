use crate::guards::{allow, RoleGuard};
use dioxus::prelude::*;
use shared_types::Role;

#[component]
pub fn TenantDashboard() -> Element {
    rsx! {
        RoleGuard { allowed_roles: allow(&[Role::CsAdmin, Role::TenantAdmin]),
            section { class: "portal-panel",
                h2 { "Tenant Administration" }
                p { "Manage the users and programs of your organisation." }
            }
        }
    }
}
