use dioxus::prelude::*;
use shared_types::PortalConfig;

mod auth;
mod guards;
mod routes;
use auth::AuthState;
use routes::Route;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_portal_config();
        server::health::record_start_time();

        let router = dioxus::server::router(App)
            .merge(server::health::health_router())
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch portal routes once and provide via context (defaults on error)
    let config_resource =
        use_server_future(move || async move { server::api::get_portal_config().await })?;

    let config = config_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(PortalConfig::default()))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load portal config, using defaults");
            PortalConfig::default()
        });

    use_context_provider(|| config);

    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
