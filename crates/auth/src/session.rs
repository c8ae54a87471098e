//! Revoked-session bookkeeping.

use std::collections::HashSet;
use std::sync::RwLock;

/// Set of revoked token ids (`jti`).
///
/// Grows for the lifetime of the process; entries are never reaped since
/// tokens are short-lived and the site is low-traffic.
#[derive(Debug, Default)]
pub struct SessionRevocations {
    revoked: RwLock<HashSet<String>>,
}

impl SessionRevocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self, jti: &str) {
        let mut revoked = self.revoked.write().unwrap_or_else(|e| e.into_inner());
        revoked.insert(jti.to_string());
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        let revoked = self.revoked.read().unwrap_or_else(|e| e.into_inner());
        revoked.contains(jti)
    }
}
