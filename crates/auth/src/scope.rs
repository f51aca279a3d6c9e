//! Capability-key evaluation against an ordered grant list.

use warden_core::AccessScope;

use crate::grant::TokenGrant;

/// Evaluate a required capability key (`"group:action"`) against the grants
/// embedded in a token.
///
/// Linear scan; the FIRST grant whose `(group, action)` pair equals the
/// required pair wins and its scope is returned. Duplicate pairs with
/// different scopes are tolerated — list order decides, and list order is
/// the order grants were embedded at issuance. A key that does not split
/// into exactly two parts fails closed.
pub fn evaluate_scope(grants: &[TokenGrant], required: &str) -> Option<AccessScope> {
    let (group, action) = split_capability(required)?;

    grants
        .iter()
        .find(|grant| grant.group == group && grant.action == action)
        .map(|grant| grant.access_scope)
}

fn split_capability(key: &str) -> Option<(&str, &str)> {
    let mut parts = key.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(group), Some(action), None) => Some((group, action)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grants() -> Vec<TokenGrant> {
        vec![
            TokenGrant::new("user", "read", AccessScope::Own),
            TokenGrant::new("user", "read", AccessScope::All),
            TokenGrant::new("product", "delete", AccessScope::All),
        ]
    }

    #[test]
    fn first_match_wins_over_later_duplicates() {
        // user:read appears twice with different scopes; list order decides.
        assert_eq!(
            evaluate_scope(&grants(), "user:read"),
            Some(AccessScope::Own)
        );
    }

    #[test]
    fn match_returns_that_grants_scope() {
        assert_eq!(
            evaluate_scope(&grants(), "product:delete"),
            Some(AccessScope::All)
        );
    }

    #[test]
    fn no_match_denies() {
        assert_eq!(evaluate_scope(&grants(), "category:delete"), None);
    }

    #[test]
    fn empty_grant_list_denies() {
        assert_eq!(evaluate_scope(&[], "user:read"), None);
    }

    #[test]
    fn malformed_capability_fails_closed() {
        assert_eq!(evaluate_scope(&grants(), "user"), None);
        assert_eq!(evaluate_scope(&grants(), "user:read:extra"), None);
        assert_eq!(evaluate_scope(&grants(), ""), None);
    }
}
