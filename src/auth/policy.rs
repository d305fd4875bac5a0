//! Role resolution policy

use crate::config::RolesMode;

/// Whether a role lookup should be made at all.
///
/// An authentication-only deployment (non-strict mode with no role store
/// configured) skips the lookup entirely. Strict mode always looks, even
/// when that can only produce an empty role list.
pub fn should_resolve_roles(
    mode: RolesMode,
    role_field_configured: bool,
    role_name_field_configured: bool,
) -> bool {
    mode.is_strict() || role_field_configured || role_name_field_configured
}
