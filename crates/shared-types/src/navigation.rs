use crate::Role;

/// Which navigation sections are visible for a user's highest role.
///
/// Hiding a link is cosmetic; the pages behind it still carry their own guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavVisibility {
    pub overview: bool,
    pub reports: bool,
    pub programs: bool,
    pub support: bool,
    pub tenant: bool,
    pub administration: bool,
}

pub fn nav_visibility(role: Option<Role>) -> NavVisibility {
    match role {
        Some(Role::CsAdmin) => NavVisibility {
            overview: true,
            reports: true,
            programs: true,
            support: true,
            tenant: true,
            administration: true,
        },
        Some(Role::CsUser) => NavVisibility {
            overview: true,
            reports: true,
            programs: true,
            support: true,
            tenant: false,
            administration: false,
        },
        Some(Role::TenantAdmin) => NavVisibility {
            overview: true,
            reports: true,
            programs: false,
            support: false,
            tenant: true,
            administration: false,
        },
        Some(Role::EndUser) => NavVisibility {
            overview: true,
            reports: true,
            programs: false,
            support: false,
            tenant: false,
            administration: false,
        },
        None => NavVisibility {
            overview: true,
            ..NavVisibility::default()
        },
    }
}
