//! HS256 session tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::store::UserRecord;
use crate::AuthError;

/// A freshly issued session: the encoded token plus its claims.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
}

/// HS256 issuer/decoder for session tokens.
pub struct Hs256Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256Tokens {
    /// 24h session lifetime.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::hours(24))
    }

    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for `user`, valid from `now` for the configured ttl.
    pub fn issue(&self, user: &UserRecord, now: DateTime<Utc>) -> Result<IssuedSession, AuthError> {
        let claims = SessionClaims {
            sub: user.user_id,
            email: user.email.clone(),
            jti: Uuid::now_v7().to_string(),
            iat: now,
            exp: now + self.ttl,
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(IssuedSession { token, claims })
    }

    /// Decode and check the signature, then check expiry against `now`.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let claims = self.decode_ignoring_expiry(token)?;
        if !claims.is_live(now) {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }

    /// Signature check only. Logout accepts expired tokens, so revocation
    /// needs a decode path that skips the time window.
    pub fn decode_ignoring_expiry(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
