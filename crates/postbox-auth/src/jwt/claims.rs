//! JWT claims structure embedded in session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload signed into every session token.
///
/// The HMAC signature covers the whole payload, so neither the subject nor
/// the expiry can be tampered with independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username this token asserts.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_at_reflects_exp_timestamp() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_001_800,
        };
        assert_eq!(claims.expires_at().timestamp(), 1_700_001_800);
    }
}
