use crate::guards::{allow, RoleBasedContent, RoleGuard};
use dioxus::prelude::*;
use shared_types::Role;

/// Customer-support desk.
#[component]
pub fn SupportDashboard() -> Element {
    rsx! {
        RoleGuard { allowed_roles: allow(&[Role::CsAdmin, Role::CsUser]),
            section { class: "portal-panel",
                h2 { "Support Desk" }
                p { "Look up tenants and review their configuration." }
            }
            RoleBasedContent { allowed_roles: allow(&[Role::CsAdmin]),
                section { class: "portal-panel",
                    h3 { "Escalations" }
                    p { "Escalated tickets are routed to portal administrators." }
                }
            }
        }
    }
}
