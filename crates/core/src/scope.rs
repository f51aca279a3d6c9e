//! Access-scope vocabulary for permission grants.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Authorization breadth modifier attached to a permission grant.
///
/// `Own` restricts downstream data access to rows created by the caller;
/// `All` is unrestricted. The wire representation is lowercase (`"own"`,
/// `"all"`), matching the grant rows and token claims.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessScope {
    Own,
    All,
}

impl AccessScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessScope::Own => "own",
            AccessScope::All => "all",
        }
    }
}

impl core::fmt::Display for AccessScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "own" => Ok(AccessScope::Own),
            "all" => Ok(AccessScope::All),
            other => Err(DomainError::validation(format!(
                "unknown access scope: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_round_trips_through_str() {
        assert_eq!("own".parse::<AccessScope>().unwrap(), AccessScope::Own);
        assert_eq!("all".parse::<AccessScope>().unwrap(), AccessScope::All);
        assert_eq!(AccessScope::Own.as_str(), "own");
    }

    #[test]
    fn unknown_scope_is_rejected() {
        assert!("ALL".parse::<AccessScope>().is_err());
        assert!("".parse::<AccessScope>().is_err());
    }
}
