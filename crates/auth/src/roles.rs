//! Administrative role codes.

/// Role code of tenant administrators.
pub const ROLE_CODE_ADMIN: &str = "admin";

/// Role code of system-level administrators.
pub const ROLE_CODE_SUPER_ADMIN: &str = "super-admin";

/// Whether a role code belongs to the administrative set.
///
/// Administrative callers implicitly hold every capability: the dashboard
/// guard authorizes them without consulting the embedded grant list.
pub fn is_admin_code(code: &str) -> bool {
    code == ROLE_CODE_ADMIN || code == ROLE_CODE_SUPER_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_codes_are_recognized() {
        assert!(is_admin_code(ROLE_CODE_ADMIN));
        assert!(is_admin_code(ROLE_CODE_SUPER_ADMIN));
        assert!(!is_admin_code("operator"));
        assert!(!is_admin_code("Admin"));
    }
}
