use dioxus::prelude::*;
use shared_types::{resolver, AuthUser, PortalConfig, Role, RolePathMap, Session};

/// Global session state, fed by the session provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::with_session(Session::Anonymous)
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.session.set(Session::Authenticated(user));
    }

    pub fn clear_auth(&mut self) {
        self.session.set(Session::Anonymous);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Current session. Without a session provider in scope the caller is anonymous.
pub fn use_session() -> Session {
    try_use_context::<AuthState>()
        .map(|auth| auth.session.read().clone())
        .unwrap_or_default()
}

/// Role set of the current session, verbatim. Empty when signed out.
pub fn use_authority() -> Vec<String> {
    use_session().role_set().to_vec()
}

/// Portal configuration provided by `App`, or the built-in defaults.
pub fn use_portal_config() -> PortalConfig {
    try_use_context::<PortalConfig>().unwrap_or_default()
}

/// Roles of the current session resolved against the role registry.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleState {
    pub roles: Vec<String>,
    pub highest: Option<Role>,
    pub home_path: String,
}

impl RoleState {
    pub fn resolve(roles: Vec<String>, paths: &RolePathMap) -> Self {
        let highest = resolver::highest_role(&roles);
        let home_path = paths.home_path_for_roles(&roles).to_string();
        Self {
            roles,
            highest,
            home_path,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        resolver::has_role(&self.roles, role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        resolver::has_any_role(&self.roles, roles)
    }
}

/// Resolve the current session's highest role and landing route.
/// Recomputed on every render; subscribes the caller to session changes.
pub fn use_role() -> RoleState {
    let roles = use_authority();
    let config = use_portal_config();
    RoleState::resolve(roles, &config.role_paths())
}

/// Await the sign-out request, then run `finish`. A failed request is logged
/// and the local session still ends.
pub async fn sign_out_then<E: std::fmt::Display>(
    request: impl std::future::Future<Output = Result<(), E>>,
    finish: impl FnOnce(),
) {
    if let Err(e) = request.await {
        tracing::warn!(error = %e, "sign-out request failed");
    }
    finish();
}
