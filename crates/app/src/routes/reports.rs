use crate::guards::{allow, RoleBasedContent, RoleGuard};
use dioxus::prelude::*;
use shared_types::Role;

/// Reports landing page. Every recognised role may open it; the widgets
/// below narrow down per role.
#[component]
pub fn Reports() -> Element {
    rsx! {
        RoleGuard { allowed_roles: allow(&Role::ALL),
            section { class: "portal-panel",
                h2 { "My Reports" }
                p { "Reports shared with you appear here." }
            }

            RoleBasedContent {
                allowed_roles: allow(&[Role::CsAdmin, Role::CsUser, Role::TenantAdmin]),
                fallback: rsx! {
                    p { class: "portal-muted", "Organisation reports are available to tenant administrators." }
                },
                section { class: "portal-panel",
                    h3 { "Organisation Reports" }
                    p { "Usage and activity across your organisation." }
                }
            }

            RoleBasedContent { allowed_roles: allow(&[Role::CsAdmin]),
                section { class: "portal-panel",
                    h3 { "Cross-Tenant Reports" }
                    p { "Aggregates over every tenant on the portal." }
                }
            }
        }
    }
}
