//! The auth facade the web layer delegates to.

use chrono::{DateTime, Utc};

use crate::claims::SessionClaims;
use crate::session::SessionRevocations;
use crate::store::{UserId, UserStore};
use crate::token::{Hs256Tokens, IssuedSession};
use crate::AuthError;

const MIN_PASSWORD_LEN: usize = 8;

/// Session validation seam for request gating.
///
/// The web middleware holds this as a trait object so tests can substitute
/// stub validators without a real key or user store.
pub trait SessionValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError>;
}

/// Users + tokens + revocations behind one set of operations.
pub struct AuthService {
    users: UserStore,
    tokens: Hs256Tokens,
    revocations: SessionRevocations,
}

impl AuthService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            users: UserStore::new(),
            tokens: Hs256Tokens::new(secret),
            revocations: SessionRevocations::new(),
        }
    }

    /// Create an account.
    pub fn register(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        validate_email(email)?;
        validate_password(password)?;

        let user_id = self.users.insert(email, password)?;
        tracing::info!(%user_id, "registered user");
        Ok(user_id)
    }

    /// Verify credentials and issue a session token.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedSession, AuthError> {
        let user = self.users.verify_credentials(email, password)?;
        let session = self.tokens.issue(&user, now)?;
        tracing::info!(user_id = %user.user_id, "issued session");
        Ok(session)
    }

    /// Update the credential for an authenticated user.
    pub fn change_password(
        &self,
        user_id: UserId,
        current: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password(new_password)?;
        self.users.change_password(user_id, current, new_password)?;
        tracing::info!(%user_id, "password changed");
        Ok(())
    }

    /// Invalidate the session carried by `token`.
    ///
    /// Expired tokens are accepted (revoking them is harmless and lets a
    /// stale client log out cleanly); undecodable tokens are an error.
    pub fn logout(&self, token: &str) -> Result<(), AuthError> {
        let claims = self.tokens.decode_ignoring_expiry(token)?;
        self.revocations.revoke(&claims.jti);
        tracing::info!(user_id = %claims.sub, "session revoked");
        Ok(())
    }
}

impl SessionValidator for AuthService {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let claims = self.tokens.decode(token, now)?;
        if self.revocations.is_revoked(&claims.jti) {
            return Err(AuthError::SessionRevoked);
        }
        Ok(claims)
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AuthError::InvalidEmail),
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
    }
    Ok(())
}
