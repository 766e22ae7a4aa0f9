use crate::auth::{sign_out_then, use_auth, use_role, use_session};
use crate::routes::Route;
use dioxus::prelude::*;

/// Session details for the signed-in user.
#[component]
pub fn Account() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let role = use_role();

    let Some(user) = session.user().cloned() else {
        return rsx! {};
    };
    let highest = role
        .highest
        .map(|r| r.as_str().to_string())
        .unwrap_or_else(|| "none".to_string());
    let roles = if role.roles.is_empty() {
        "none".to_string()
    } else {
        role.roles.join(", ")
    };

    rsx! {
        section { class: "portal-panel",
            h2 { "{user.user_name}" }
            dl { class: "portal-details",
                dt { "User ID" }
                dd { "{user.user_id}" }
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Roles" }
                dd { "{roles}" }
                dt { "Highest role" }
                dd { "{highest}" }
                dt { "Home" }
                dd { code { "{role.home_path}" } }
            }
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
}
