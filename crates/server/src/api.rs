use dioxus::prelude::*;
use shared_types::{AuthUser, PortalConfig, RoleSummary};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── Session helpers for server functions ──────────────────

/// Claims of the caller's session token, if any.
/// Checks middleware-injected Claims first, falls back to header parsing.
#[cfg(feature = "server")]
fn current_claims() -> Option<crate::auth::jwt::Claims> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    let token = cookies::extract_session_token(&parts.headers)?;
    match jwt::validate_session_token(&token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "session token rejected");
            None
        }
    }
}

/// Require a session holding `CS_ADMIN`.
#[cfg(feature = "server")]
fn require_portal_admin() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::AppError;

    let claims = current_claims()
        .ok_or_else(|| AppError::unauthorized("Sign in required").into_server_fn_error())?;
    if !crate::auth::is_portal_admin(&claims) {
        return Err(AppError::forbidden("CS_ADMIN role required").into_server_fn_error());
    }
    Ok(claims)
}

/// The signed-in user, or `None` for an anonymous caller.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    Ok(current_claims().map(AuthUser::from))
}

/// End the session by clearing the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    if let Some(claims) = current_claims() {
        tracing::info!(user_id = %claims.sub, "signing out");
    }
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

/// Route configuration for the client. No auth required.
#[server]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    Ok(crate::config::portal_config().clone())
}

/// Role catalog with effective landing routes. Requires `CS_ADMIN`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_roles() -> Result<Vec<RoleSummary>, ServerFnError> {
    let claims = require_portal_admin()?;
    tracing::debug!(user_id = %claims.sub, "listing role catalog");
    let paths = crate::config::portal_config().role_paths();
    Ok(RoleSummary::catalog(&paths))
}
