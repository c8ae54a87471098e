//! In-memory user store.
//!
//! Accounts live for the lifetime of the process. Emails are normalized to
//! lowercase and act as the unique key.

use core::str::FromStr;
use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::password;
use crate::AuthError;

/// Identity of a registered user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new identifier (UUIDv7, time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A stored account. The password is kept only as an Argon2 PHC string.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Process-lifetime account storage keyed by normalized email.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account. The password arrives in the clear and is hashed
    /// here; the caller has already validated its shape.
    pub fn insert(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let key = normalize_email(email);
        let password_hash = password::hash_password(password)?;

        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.contains_key(&key) {
            return Err(AuthError::EmailTaken);
        }

        let record = UserRecord {
            user_id: UserId::new(),
            email: key.clone(),
            password_hash,
            created_at: Utc::now(),
        };
        let user_id = record.user_id;
        users.insert(key, record);
        Ok(user_id)
    }

    /// Verify credentials and return the matching record.
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials`.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let key = normalize_email(email);
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());

        let record = users.get(&key).ok_or(AuthError::InvalidCredentials)?;
        if password::verify_password(password, &record.password_hash)? {
            Ok(record.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Replace the stored hash after verifying the current password.
    pub fn change_password(
        &self,
        user_id: UserId,
        current: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());

        let record = users
            .values_mut()
            .find(|r| r.user_id == user_id)
            .ok_or(AuthError::UserNotFound)?;

        if !password::verify_password(current, &record.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        record.password_hash = password::hash_password(new_password)?;
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
