use serde::{Deserialize, Serialize};

use crate::{resolver, Role};

/// Authenticated user info as handed out by the session provider.
///
/// `authority` carries role strings verbatim, legacy aliases and unknown
/// values included. Resolution happens on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub authority: Vec<String>,
}

/// Current session as seen by the role-resolution layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthUser),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }

    /// Role set of the session. Empty for anonymous sessions.
    pub fn role_set(&self) -> &[String] {
        match self {
            Session::Authenticated(user) => &user.authority,
            Session::Anonymous => &[],
        }
    }

    pub fn highest_role(&self) -> Option<Role> {
        resolver::highest_role(self.role_set())
    }

    pub fn has_role(&self, role: &str) -> bool {
        resolver::has_role(self.role_set(), role)
    }
}

impl From<Option<AuthUser>> for Session {
    fn from(user: Option<AuthUser>) -> Self {
        match user {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        }
    }
}
