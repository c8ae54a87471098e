//! `folio-web` — route registration and delegation.
//!
//! The core holds no request state of its own: it wires the route table,
//! gates the protected routes behind the session middleware, and hands
//! everything else to the collaborator crates (pages, auth, assets).

pub mod app;
pub mod context;
pub mod middleware;
pub mod serve;
