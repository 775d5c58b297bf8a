//! Signed bearer credentials
//!
//! HS256 JWTs carrying the user id, valid for a fixed 30 days from issuance.
//! There is no revocation path: logout is a client-side state clear and a
//! token stays usable until natural expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const TOKEN_LIFETIME_DAYS: i64 = 30;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Invalid or expired token")]
    Invalid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a credential for `user_id` with the standard 30-day lifetime.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_valid_for(user_id, Duration::days(TOKEN_LIFETIME_DAYS))
    }

    pub fn issue_valid_for(&self, user_id: Uuid, validity: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Checks signature and expiry, resolving the token to its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify_resolves_same_user() {
        let signer = TokenSigner::new("top-secret");
        let user_id = Uuid::new_v4();
        let token = signer.issue(user_id).unwrap();
        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = TokenSigner::new("top-secret");
        let token = signer
            .issue_valid_for(Uuid::new_v4(), Duration::hours(-2))
            .unwrap();
        assert!(matches!(signer.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = TokenSigner::new("secret-a").issue(Uuid::new_v4()).unwrap();
        assert!(matches!(TokenSigner::new("secret-b").verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let signer = TokenSigner::new("top-secret");
        assert!(matches!(signer.verify("not.a.jwt"), Err(TokenError::Invalid)));
    }
}
