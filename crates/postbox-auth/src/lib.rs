//! # postbox-auth
//!
//! Authentication for Postbox.
//!
//! ## Modules
//!
//! - `jwt` — session token issuance and verification (HS256)
//! - `password` — Argon2id password hashing
//! - `directory` — in-memory user directory backing signup and login

pub mod directory;
pub mod jwt;
pub mod password;

pub use directory::UserDirectory;
pub use jwt::{Claims, TokenService};
pub use password::PasswordHasher;
