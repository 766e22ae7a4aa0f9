use crate::auth::{use_auth, use_portal_config};
use crate::routes::Route;
use dioxus::prelude::*;

/// Login page. Sign-in itself happens at the identity provider; this page
/// links there and re-checks the session when the user comes back.
/// Accepts an optional `redirect` query param to return to after sign-in.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let config = use_portal_config();
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        match redirect_target.read().as_deref().map(str::parse::<Route>) {
            Some(Ok(route)) => navigator().replace(route),
            _ => navigator().replace(Route::Home {}),
        };
    };

    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_check = move |_| async move {
        loading.set(true);
        error_msg.set(None);

        match server::api::get_current_user().await {
            Ok(Some(user)) => {
                auth.set_user(user);
                go_to_destination();
            }
            Ok(None) => {
                error_msg.set(Some("No active session found. Please sign in first.".to_string()));
            }
            Err(e) => {
                error_msg.set(Some(shared_types::AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    let sign_in_url = config.auth.sign_in_url.clone();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Sign In" }
                p { class: "auth-description",
                    "Sign in with your organisation account to access the portal."
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                a { class: "auth-button", href: "{sign_in_url}", "Continue to sign in" }

                button {
                    class: "auth-button-secondary",
                    disabled: loading(),
                    onclick: handle_check,
                    if loading() { "Checking..." } else { "I have signed in" }
                }
            }
        }
    }
}
