use axum::http::header::InvalidHeaderValue;
use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "portal_session";

/// Extract the session token from the cookie (preferred) or a Bearer header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Set-Cookie header value that expires the session cookie.
pub fn build_clear_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();
    HeaderValue::from_str(&cookie.to_string())
}

pub fn clear_session_cookie(headers: &mut HeaderMap) {
    match build_clear_cookie() {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "failed to build session clear cookie"),
    }
}

/// Flag shared between server functions and the session middleware.
/// Stored in request extensions so `sign_out` can ask for the cookie to be cleared.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<AtomicBool>);

impl CookieSlot {
    pub fn request_clear(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn clear_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.request_clear();
        }
    }
}
