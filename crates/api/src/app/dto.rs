//! Request DTOs for the session endpoints.

use serde::Deserialize;

/// Body of `POST /auth/validate` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username_or_email.trim().is_empty() || self.password.is_empty() {
            return Err("username_or_email and password are required");
        }
        Ok(())
    }
}

/// Body of `POST /auth/token` (phase-2 redemption).
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub temporary_token: String,
}

impl TokenRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.temporary_token.trim().is_empty() {
            return Err("temporary_token is required");
        }
        Ok(())
    }
}
