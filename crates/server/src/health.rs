use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// Number of role entries in the effective role-path map.
    pub routed_roles: usize,
}

/// Health check handler.
pub async fn health_check() -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);
    let paths = crate::config::portal_config().role_paths();
    let routed_roles = shared_types::Role::ALL
        .iter()
        .filter(|role| paths.path_for(**role).is_some())
        .count();

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
        routed_roles,
    })
}

/// Router exposing `/health`.
pub fn health_router() -> axum::Router {
    axum::Router::new().route("/health", axum::routing::get(health_check))
}
