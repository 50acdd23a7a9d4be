//! In-memory user directory backing signup and login.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use postbox_core::error::AppError;
use postbox_core::result::AppResult;

use crate::password::PasswordHasher;

/// The single client-facing message for every login failure. Unknown
/// username and wrong password are indistinguishable to the caller.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// A stored credential record. Created on signup, never mutated or deleted.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Unique login name.
    pub username: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Maps usernames to credential records.
///
/// All operations are atomic with respect to concurrent calls on the same
/// username; the directory offers no update or deregistration operations.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: DashMap<String, Credential>,
    hasher: PasswordHasher,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a new user, hashing the password before storage.
    ///
    /// Fails with a conflict if the username is already taken. The
    /// check-and-insert is atomic via the map's entry API.
    pub fn register(&self, username: &str, password: &str) -> AppResult<()> {
        let password_hash = self.hasher.hash(password)?;

        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict("User already exists")),
            Entry::Vacant(entry) => {
                entry.insert(Credential {
                    username: username.to_string(),
                    password_hash,
                    created_at: Utc::now(),
                });
                debug!(username, "User registered");
                Ok(())
            }
        }
    }

    /// Verifies a username/password pair.
    ///
    /// Fails with the same unauthorized error whether the username is
    /// unknown or the password does not match.
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<()> {
        let credential = self
            .users
            .get(username)
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if self.hasher.verify(password, &credential.password_hash)? {
            Ok(())
        } else {
            Err(AppError::unauthorized(INVALID_CREDENTIALS))
        }
    }

    /// Returns whether a username is registered. Used to validate token
    /// subjects on authenticated requests.
    pub fn exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }
}
