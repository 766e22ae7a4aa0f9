use crate::auth::use_session;
use crate::routes::Route;
use dioxus::prelude::*;

/// Shown when a route guard turns the user away.
#[component]
pub fn AccessDenied() -> Element {
    let session = use_session();

    rsx! {
        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "403" }
                h1 { class: "status-title", "Access Denied" }
                p { class: "status-message",
                    "You do not have permission to view this page."
                }
                if session.is_authenticated() {
                    Link { to: Route::Home {}, class: "status-link", "Back to Home" }
                } else {
                    Link { to: Route::Login { redirect: None }, class: "status-link", "Sign In" }
                }
            }
        }
    }
}
