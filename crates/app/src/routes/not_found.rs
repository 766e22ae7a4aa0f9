use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "404" }
                h1 { class: "status-title", "Page Not Found" }
                p { class: "status-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::Home {},
                    class: "status-link",
                    "Back to Home"
                }
            }
        }
    }
}
