use thiserror::Error;

/// Auth-level error.
///
/// Deterministic failures only; the web layer maps these to HTTP statuses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately indistinct so a caller
    /// cannot probe which emails are registered.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account already exists for this email.
    #[error("email already registered")]
    EmailTaken,

    /// The email does not look like an address.
    #[error("invalid email address")]
    InvalidEmail,

    /// The password does not meet the minimum length.
    #[error("password too weak (minimum {0} characters)")]
    WeakPassword(usize),

    /// The token failed decoding or signature verification.
    #[error("invalid session token")]
    InvalidToken,

    /// The token's expiry has passed.
    #[error("session token has expired")]
    TokenExpired,

    /// The session was invalidated by logout.
    #[error("session has been revoked")]
    SessionRevoked,

    /// No account for the given user id.
    #[error("user not found")]
    UserNotFound,

    /// Password hashing backend failure.
    #[error("hashing failure: {0}")]
    Hash(String),
}
