use serde::{Deserialize, Serialize};

/// Portal role controlling which regions of the UI a user may reach.
///
/// - `CsAdmin`: customer-success administrator. Full access.
/// - `CsUser`: customer-success staff. Support tooling and reports.
/// - `TenantAdmin`: administrator of a single tenant.
/// - `EndUser`: tenant end user. Reports only.
///
/// The vocabulary is closed: strings outside it never match anything and
/// never raise an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "CS_ADMIN")]
    CsAdmin,
    #[serde(rename = "CS_USER")]
    CsUser,
    #[serde(rename = "TENANT_ADMIN")]
    TenantAdmin,
    #[serde(rename = "END_USER")]
    EndUser,
}

/// Deprecated flat authority strings and the role each one stands for.
pub const LEGACY_ALIASES: &[(&str, Role)] = &[("ADMIN", Role::CsAdmin), ("USER", Role::CsUser)];

impl Role {
    /// Every known role, most privileged first.
    pub const ALL: [Role; 4] = [Role::CsAdmin, Role::CsUser, Role::TenantAdmin, Role::EndUser];

    /// Precedence rank. Lower is more privileged.
    pub fn rank(&self) -> u8 {
        match self {
            Role::CsAdmin => 0,
            Role::CsUser => 1,
            Role::TenantAdmin => 2,
            Role::EndUser => 3,
        }
    }

    /// Canonical identifier as carried in session claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CsAdmin => "CS_ADMIN",
            Role::CsUser => "CS_USER",
            Role::TenantAdmin => "TENANT_ADMIN",
            Role::EndUser => "END_USER",
        }
    }

    /// Parse a canonical identifier. Exact, case-sensitive; aliases are not accepted here.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CS_ADMIN" => Some(Role::CsAdmin),
            "CS_USER" => Some(Role::CsUser),
            "TENANT_ADMIN" => Some(Role::TenantAdmin),
            "END_USER" => Some(Role::EndUser),
            _ => None,
        }
    }

    /// Parse a role string after mapping legacy aliases onto their canonical role.
    pub fn resolve(s: &str) -> Option<Self> {
        Self::parse(canonicalize(s))
    }

    /// Legacy aliases that resolve to this role.
    pub fn aliases(&self) -> Vec<&'static str> {
        LEGACY_ALIASES
            .iter()
            .filter(|(_, role)| role == self)
            .map(|(alias, _)| *alias)
            .collect()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a legacy alias to its canonical identifier. Any other string is returned unchanged.
pub fn canonicalize(s: &str) -> &str {
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == s)
        .map(|(_, role)| role.as_str())
        .unwrap_or(s)
}

/// Precedence rank of a role string, aliases included. `None` for unknown strings.
pub fn rank_of(s: &str) -> Option<u8> {
    Role::resolve(s).map(|r| r.rank())
}

/// One row of the role catalog shown to administrators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleSummary {
    pub role: Role,
    pub rank: u8,
    pub home_path: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl RoleSummary {
    /// Build the full catalog in precedence order.
    pub fn catalog(paths: &crate::RolePathMap) -> Vec<RoleSummary> {
        Role::ALL
            .iter()
            .map(|role| RoleSummary {
                role: *role,
                rank: role.rank(),
                home_path: paths
                    .path_for(*role)
                    .unwrap_or(paths.fallback())
                    .to_string(),
                aliases: role.aliases().into_iter().map(String::from).collect(),
            })
            .collect()
    }
}
