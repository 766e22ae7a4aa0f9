use crate::auth::use_role;
use crate::guards::redirect_replace;
use dioxus::prelude::*;

/// Root route. Sends the user on to the landing route of their highest role.
#[component]
pub fn Home() -> Element {
    let role = use_role();

    if role.home_path != "/" {
        tracing::debug!(highest = ?role.highest, path = %role.home_path, "redirecting to role home");
        redirect_replace(&role.home_path);
    }

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}
