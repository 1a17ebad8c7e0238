//! Bearer-token verification.
//!
//! The HTTP layer consumes verification through the [`TokenVerifier`] trait so
//! the token provider stays swappable; [`Hs256TokenVerifier`] is the shared
//! HMAC implementation used by the server and its tests.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, AccessClaims, TokenValidationError};

#[derive(Debug, Error)]
pub enum TokenError {
    /// The token could not be decoded or its signature did not verify.
    #[error("malformed or unverifiable token: {0}")]
    Verification(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verify a bearer credential into its claims.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError>;
}

/// HMAC-SHA256 token verifier.
pub struct Hs256TokenVerifier {
    decoding_key: DecodingKey,
}

impl Hs256TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time-window checks run through `validate_claims` against the caller's
        // clock; jsonwebtoken must not consult the system clock on its own.
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Verification(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
