//! Claim-set models and the fallible wire → typed parse step.
//!
//! Tokens travel as loosely-typed JSON claim maps; numbers may arrive as
//! floats depending on the encoder. Nothing downstream touches the raw map:
//! every read goes through an explicit coercion that fails closed on a type
//! mismatch instead of defaulting.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use warden_core::{RoleId, UserId};

use crate::grant::TokenGrant;

/// Access tokens live for 24 hours.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Temporary tokens live for 5 minutes. Redemption is not single-use; the
/// window is the only bound on replay.
pub const TEMPORARY_TOKEN_TTL_SECS: i64 = 5 * 60;

const CLAIM_USER_ID: &str = "user_id";
const CLAIM_ROLE_ID: &str = "role_id";
const CLAIM_ROLE_NAME: &str = "role_name";
const CLAIM_ROLE_CODE: &str = "role_code";
const CLAIM_ROLE_PERMISSIONS: &str = "role_permissions";
const CLAIM_EXP: &str = "exp";

// ─────────────────────────────────────────────────────────────────────────────
// Typed claim-sets (encode side)
// ─────────────────────────────────────────────────────────────────────────────

/// Claim-set of a full access token.
///
/// Carries the identity plus the permission snapshot taken at issuance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessTokenClaims {
    pub user_id: UserId,
    pub role_id: RoleId,
    pub role_name: String,
    pub role_code: String,
    pub role_permissions: Vec<TokenGrant>,
    /// Expiry as unix seconds.
    pub exp: i64,
}

impl AccessTokenClaims {
    pub fn new(
        user_id: UserId,
        role_id: RoleId,
        role_name: impl Into<String>,
        role_code: impl Into<String>,
        role_permissions: Vec<TokenGrant>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            role_id,
            role_name: role_name.into(),
            role_code: role_code.into(),
            role_permissions,
            exp: now.timestamp() + ACCESS_TOKEN_TTL_SECS,
        }
    }

    /// Seconds until expiry, clamped at zero.
    pub fn ttl_from(&self, now: DateTime<Utc>) -> u64 {
        (self.exp - now.timestamp()).max(0) as u64
    }
}

/// Claim-set of a phase-1 temporary token.
///
/// Carries identity only; permissions are resolved fresh at redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporaryTokenClaims {
    pub user_id: UserId,
    pub role_id: RoleId,
    pub role_code: String,
    /// Expiry as unix seconds.
    pub exp: i64,
}

impl TemporaryTokenClaims {
    pub fn new(user_id: UserId, role_id: RoleId, role_code: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            role_id,
            role_code: role_code.into(),
            exp: now.timestamp() + TEMPORARY_TOKEN_TTL_SECS,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    /// Parse a verified wire map into temporary-token claims.
    pub fn from_wire(claims: &WireClaims) -> Result<Self, ClaimError> {
        Ok(Self {
            user_id: UserId::new(claims.integer(CLAIM_USER_ID)?),
            role_id: RoleId::new(claims.integer(CLAIM_ROLE_ID)?),
            role_code: claims.string(CLAIM_ROLE_CODE)?.to_string(),
            exp: claims.integer(CLAIM_EXP)?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire representation (decode side)
// ─────────────────────────────────────────────────────────────────────────────

/// Failure to coerce a wire claim back to its semantic type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("missing claim: {0}")]
    Missing(&'static str),

    #[error("claim {0} has the wrong type")]
    WrongType(&'static str),

    #[error("claim-set is not a JSON object")]
    NotAnObject,
}

/// Loosely-typed claim map as it comes off the wire, signature already
/// verified.
#[derive(Debug, Clone)]
pub struct WireClaims(Map<String, Value>);

impl WireClaims {
    pub fn from_value(value: Value) -> Result<Self, ClaimError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ClaimError::NotAnObject),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read an integral claim. Whole floats are accepted (some encoders emit
    /// every number as a double); anything fractional or out of range is a
    /// type error, never a silent default.
    fn integer(&self, key: &'static str) -> Result<i64, ClaimError> {
        let value = self.0.get(key).ok_or(ClaimError::Missing(key))?;
        coerce_integer(value).ok_or(ClaimError::WrongType(key))
    }

    fn string(&self, key: &'static str) -> Result<&str, ClaimError> {
        let value = self.0.get(key).ok_or(ClaimError::Missing(key))?;
        value.as_str().ok_or(ClaimError::WrongType(key))
    }

    /// Expiry as unix seconds.
    pub fn expiry(&self) -> Result<i64, ClaimError> {
        self.integer(CLAIM_EXP)
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() != 0.0 || f < i64::MIN as f64 || f > i64::MAX as f64 {
        return None;
    }
    Some(f as i64)
}

/// Identity fields of an access token, coerced back to semantic types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub user_id: UserId,
    pub role_id: RoleId,
    pub role_name: String,
    pub role_code: String,
    pub exp: i64,
}

impl TokenIdentity {
    /// Parse the identity portion of a verified access-token wire map.
    pub fn from_wire(claims: &WireClaims) -> Result<Self, ClaimError> {
        Ok(Self {
            user_id: UserId::new(claims.integer(CLAIM_USER_ID)?),
            role_id: RoleId::new(claims.integer(CLAIM_ROLE_ID)?),
            role_name: claims.string(CLAIM_ROLE_NAME)?.to_string(),
            role_code: claims.string(CLAIM_ROLE_CODE)?.to_string(),
            exp: claims.integer(CLAIM_EXP)?,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

/// Failure to extract the embedded grant list from an access token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrantParseError {
    /// The `role_permissions` claim is absent entirely.
    #[error("role_permissions claim is missing")]
    Missing,

    /// The claim exists but an entry has the wrong shape.
    #[error("invalid permissions format")]
    Malformed,
}

/// Extract the embedded permission snapshot from a verified wire map.
///
/// The snapshot is exactly what was embedded at issuance — this never reads
/// storage. Entry order is preserved; the scope evaluator depends on it.
pub fn grants_from_wire(claims: &WireClaims) -> Result<Vec<TokenGrant>, GrantParseError> {
    let raw = claims
        .get(CLAIM_ROLE_PERMISSIONS)
        .ok_or(GrantParseError::Missing)?;

    let entries = raw.as_array().ok_or(GrantParseError::Malformed)?;

    let mut grants = Vec::with_capacity(entries.len());
    for entry in entries {
        let obj = entry.as_object().ok_or(GrantParseError::Malformed)?;

        let group = obj
            .get("group")
            .and_then(Value::as_str)
            .ok_or(GrantParseError::Malformed)?;
        let action = obj
            .get("action")
            .and_then(Value::as_str)
            .ok_or(GrantParseError::Malformed)?;
        let scope = obj
            .get("access_scope")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .ok_or(GrantParseError::Malformed)?;

        grants.push(TokenGrant::new(group, action, scope));
    }

    Ok(grants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use warden_core::AccessScope;

    fn wire(value: Value) -> WireClaims {
        WireClaims::from_value(value).unwrap()
    }

    #[test]
    fn identity_parses_integral_floats() {
        // Numbers decoded as doubles must coerce back to integers.
        let claims = wire(json!({
            "user_id": 42.0,
            "role_id": 7.0,
            "role_name": "Operator",
            "role_code": "operator",
            "exp": 1_900_000_000.0,
        }));

        let identity = TokenIdentity::from_wire(&claims).unwrap();
        assert_eq!(identity.user_id, UserId::new(42));
        assert_eq!(identity.role_id, RoleId::new(7));
        assert_eq!(identity.exp, 1_900_000_000);
    }

    #[test]
    fn fractional_user_id_fails_closed() {
        let claims = wire(json!({
            "user_id": 42.5,
            "role_id": 7,
            "role_name": "Operator",
            "role_code": "operator",
            "exp": 1_900_000_000,
        }));

        assert_eq!(
            TokenIdentity::from_wire(&claims),
            Err(ClaimError::WrongType("user_id"))
        );
    }

    #[test]
    fn missing_claim_is_reported_by_name() {
        let claims = wire(json!({ "user_id": 1 }));
        assert_eq!(
            TokenIdentity::from_wire(&claims),
            Err(ClaimError::Missing("role_id"))
        );
    }

    #[test]
    fn non_object_claim_set_is_rejected() {
        assert_eq!(
            WireClaims::from_value(json!([1, 2, 3])).unwrap_err(),
            ClaimError::NotAnObject
        );
    }

    #[test]
    fn grants_parse_in_order() {
        let claims = wire(json!({
            "role_permissions": [
                { "group": "user", "action": "read", "access_scope": "own" },
                { "group": "product", "action": "delete", "access_scope": "all" },
            ],
        }));

        let grants = grants_from_wire(&claims).unwrap();
        assert_eq!(grants.len(), 2);
        assert_eq!(grants[0], TokenGrant::new("user", "read", AccessScope::Own));
        assert_eq!(
            grants[1],
            TokenGrant::new("product", "delete", AccessScope::All)
        );
    }

    #[test]
    fn absent_grants_claim_is_missing_not_malformed() {
        let claims = wire(json!({ "user_id": 1 }));
        assert_eq!(grants_from_wire(&claims), Err(GrantParseError::Missing));
    }

    #[test]
    fn malformed_grant_entries_are_rejected() {
        // Entry is not an object.
        let claims = wire(json!({ "role_permissions": ["user:read"] }));
        assert_eq!(grants_from_wire(&claims), Err(GrantParseError::Malformed));

        // Unknown scope value.
        let claims = wire(json!({
            "role_permissions": [
                { "group": "user", "action": "read", "access_scope": "some" },
            ],
        }));
        assert_eq!(grants_from_wire(&claims), Err(GrantParseError::Malformed));
    }

    #[test]
    fn temporary_claims_round_trip_and_expire() {
        let now = Utc::now();
        let claims = TemporaryTokenClaims::new(UserId::new(9), RoleId::new(3), "operator", now);
        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + chrono::Duration::seconds(TEMPORARY_TOKEN_TTL_SECS + 1)));

        let parsed = TemporaryTokenClaims::from_wire(&wire(
            serde_json::to_value(&claims).unwrap(),
        ))
        .unwrap();
        assert_eq!(parsed, claims);
    }
}
