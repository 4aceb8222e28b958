//! Token Service
//!
//! Issues and verifies the signed bearer tokens that every protected
//! route depends on. A token is self-contained: it carries the user id
//! and an absolute expiry, signed with HMAC-SHA256 under the
//! process-wide secret. There is no refresh mechanism; an expired token
//! means re-authentication.
//!
//! Wire format: `base64url(user_id) . expires_at_ms . base64url(hmac)`
//! where the MAC covers the first two segments.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use kernel::id::UserId;
use sha2::Sha256;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Bearer token issue/verify service
pub struct TokenService {
    secret: [u8; 32],
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn from_config(config: &AuthConfig) -> Arc<Self> {
        Arc::new(Self::new(config.token_secret, config.token_ttl))
    }

    /// Issue a signed token for `user_id`, expiring `ttl` from now
    pub fn issue(&self, user_id: &UserId) -> String {
        let expires_at_ms = Utc::now().timestamp_millis() + self.ttl.as_millis() as i64;
        let payload = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(user_id.as_str().as_bytes()),
            expires_at_ms
        );

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify signature and expiry, returning the embedded user id
    ///
    /// A tampered or malformed token fails with `TokenInvalid`; a stale
    /// one with `TokenExpired`. Both render as 401.
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let mut parts = token.split('.');
        let (Some(id_b64), Some(expiry_str), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::TokenInvalid);
        };

        // Signature check first, before trusting anything in the payload
        let payload = format!("{}.{}", id_b64, expiry_str);
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::TokenInvalid)?;

        mac.verify_slice(&signature)
            .map_err(|_| AuthError::TokenInvalid)?;

        let expires_at_ms: i64 = expiry_str.parse().map_err(|_| AuthError::TokenInvalid)?;
        if Utc::now().timestamp_millis() >= expires_at_ms {
            return Err(AuthError::TokenExpired);
        }

        let id_bytes = URL_SAFE_NO_PAD
            .decode(id_b64)
            .map_err(|_| AuthError::TokenInvalid)?;
        let id = String::from_utf8(id_bytes).map_err(|_| AuthError::TokenInvalid)?;

        Ok(UserId::from_string(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new([7u8; 32], Duration::from_secs(7 * 24 * 3600))
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let tokens = service();
        let user_id = UserId::from_string("mem-1");

        let token = tokens.issue(&user_id);
        let verified = tokens.verify(&token).unwrap();

        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let tokens = service();
        let token = tokens.issue(&UserId::from_string("mem-1"));

        // Swap the embedded user id for another one, keeping the signature
        let mut parts: Vec<&str> = token.split('.').collect();
        let other = URL_SAFE_NO_PAD.encode(b"mem-2");
        parts[0] = &other;
        let forged = parts.join(".");

        assert!(matches!(
            tokens.verify(&forged),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service().issue(&UserId::from_string("mem-1"));
        let other = TokenService::new([8u8; 32], Duration::from_secs(3600));

        assert!(matches!(other.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = TokenService::new([7u8; 32], Duration::from_secs(0));
        let token = tokens.issue(&UserId::from_string("mem-1"));

        assert!(matches!(
            tokens.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let tokens = service();

        for garbage in ["", "a", "a.b", "a.b.c.d", "!!.123.sig"] {
            assert!(
                matches!(tokens.verify(garbage), Err(AuthError::TokenInvalid)),
                "expected rejection for {:?}",
                garbage
            );
        }
    }
}
