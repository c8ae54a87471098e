//! `folio-auth` — authentication boundary for the site.
//!
//! This crate is intentionally decoupled from HTTP: it owns users,
//! credentials, and session tokens, and exposes plain operations the web
//! layer delegates to. Storage is in-memory for the lifetime of the process.

pub mod claims;
pub mod error;
pub mod password;
pub mod service;
pub mod session;
pub mod store;
pub mod token;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use service::{AuthService, SessionValidator};
pub use session::SessionRevocations;
pub use store::{UserId, UserRecord, UserStore};
pub use token::{Hs256Tokens, IssuedSession};
