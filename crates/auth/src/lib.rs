//! `warden-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it signs and
//! verifies claim-sets, parses the loose wire representation back into typed
//! values, and evaluates capability keys against embedded grants. Revocation
//! lookups and credential checks live in `warden-infra`/`warden-api`.

pub mod capability;
pub mod claims;
pub mod grant;
pub mod roles;
pub mod scope;
pub mod token;

pub use claims::{
    grants_from_wire, AccessTokenClaims, ClaimError, GrantParseError, TemporaryTokenClaims,
    TokenIdentity, WireClaims, ACCESS_TOKEN_TTL_SECS, TEMPORARY_TOKEN_TTL_SECS,
};
pub use grant::TokenGrant;
pub use roles::{is_admin_code, ROLE_CODE_ADMIN, ROLE_CODE_SUPER_ADMIN};
pub use scope::evaluate_scope;
pub use token::{TokenCodec, TokenError};
