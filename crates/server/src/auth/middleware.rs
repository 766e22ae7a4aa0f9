use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot};
use super::jwt::validate_session_token;

/// Permissive session middleware.
///
/// On each request:
/// 1. Validates the session token from the cookie (or Bearer header fallback)
///    and inserts its `Claims` into request extensions
/// 2. Inserts a `CookieSlot` so server functions can ask for sign-out
/// 3. After the handler runs, clears the session cookie if requested
///
/// Does NOT reject anonymous requests. Access decisions belong to the guards.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = cookies::extract_session_token(req.headers()) {
        match validate_session_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid session token");
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if cookie_slot.clear_requested() {
        cookies::clear_session_cookie(response.headers_mut());
    }

    response
}
