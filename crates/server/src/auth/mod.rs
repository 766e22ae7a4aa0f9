pub mod cookies;
pub mod jwt;
pub mod middleware;

use shared_types::{resolver, Role};

/// True if the token grants `CS_ADMIN` (the legacy `ADMIN` alias included).
pub fn is_portal_admin(claims: &jwt::Claims) -> bool {
    resolver::has_role(&claims.authority, Role::CsAdmin.as_str())
}
