use chrono::{serde::ts_seconds, DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::UserId;

/// Session token claims.
///
/// Timestamps serialize as whole seconds (`iat`/`exp` registered claim
/// shape), so the wire form is an ordinary JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the authenticated user.
    pub sub: UserId,

    /// Email at the time the session was issued.
    pub email: String,

    /// Unique token id; the revocation set keys on this.
    pub jti: String,

    /// Issued-at timestamp.
    #[serde(with = "ts_seconds")]
    pub iat: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(with = "ts_seconds")]
    pub exp: DateTime<Utc>,
}

impl SessionClaims {
    /// Whether the claims window covers `now`.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.iat <= now && now < self.exp
    }
}
