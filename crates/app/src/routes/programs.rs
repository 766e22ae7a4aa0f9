use crate::auth::use_authority;
use crate::guards::AuthorityGuard;
use dioxus::prelude::*;

/// Program management, still guarded with the legacy authority list.
#[component]
pub fn Programs() -> Element {
    let user_authority = use_authority();

    rsx! {
        AuthorityGuard {
            user_authority,
            authority: vec!["ADMIN".to_string(), "USER".to_string()],
            section { class: "portal-panel",
                h2 { "Programs" }
                p { "Configure the programs offered to tenants." }
            }
        }
    }
}
