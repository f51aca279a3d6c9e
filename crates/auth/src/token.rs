//! Signed token codec (HMAC-SHA256).
//!
//! One symmetric secret signs both token kinds. Verification pins the
//! algorithm family: a token whose header names anything but HS256 fails
//! before its signature is considered. Expiry is NOT checked here; the
//! guards and the session issuer perform the authoritative `exp` comparison
//! themselves, so the codec stays a pure signature/structure check.

use std::collections::HashSet;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::claims::{AccessTokenClaims, ClaimError, TemporaryTokenClaims, WireClaims};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token")]
    Sign(#[source] jsonwebtoken::errors::Error),

    /// Signature mismatch, wrong algorithm, or structurally broken token.
    #[error("invalid or expired token")]
    Verify(#[source] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Claims(#[from] ClaimError),
}

/// Encodes and verifies signed claim-sets.
///
/// Construct once at startup with the process-wide secret and clone freely;
/// the secret is never read from ambient state.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Callers own the expiry decision (guards re-check `exp` after the
        // revocation lookup), so the codec must not reject expired tokens.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign_access(&self, claims: &AccessTokenClaims) -> Result<String, TokenError> {
        self.sign(claims)
    }

    pub fn sign_temporary(&self, claims: &TemporaryTokenClaims) -> Result<String, TokenError> {
        self.sign(claims)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Verify signature and structure, returning the loose wire claim map.
    ///
    /// Callers must run the typed parse step and their own expiry check.
    pub fn verify(&self, token: &str) -> Result<WireClaims, TokenError> {
        let data = decode::<Value>(token, &self.decoding, &self.validation)
            .map_err(TokenError::Verify)?;
        Ok(WireClaims::from_value(data.claims)?)
    }
}
