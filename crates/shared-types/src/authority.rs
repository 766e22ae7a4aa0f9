//! Flat "authority list" matching kept for call sites that predate [`crate::Role`].
//!
//! Comparison is literal string equality: aliases are NOT canonicalized and
//! unknown strings match themselves. This is a different recognised-role
//! space from [`crate::resolver`] and must stay separate from it.

/// Legacy authority check.
///
/// When either side is empty, or no requirement is given at all, the result
/// is `!empty_check`: with the default `empty_check = false` that grants
/// access. Legacy call sites rely on this fail-open behaviour.
///
/// Otherwise access is granted iff at least one required authority appears
/// verbatim in `user_roles`.
pub fn authority_match<U, R>(user_roles: &[U], required_roles: Option<&[R]>, empty_check: bool) -> bool
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    let required = match required_roles {
        Some(required) if !required.is_empty() && !user_roles.is_empty() => required,
        _ => return !empty_check,
    };

    required
        .iter()
        .any(|r| user_roles.iter().any(|u| u.as_ref() == r.as_ref()))
}
