//! Token issuance and verification with a shared symmetric key.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use postbox_core::config::auth::AuthConfig;
use postbox_core::error::AppError;
use postbox_core::result::AppResult;

use super::claims::Claims;

/// The single client-facing message for every token failure. Signature
/// mismatch, malformed structure, and expiry all collapse into this so the
/// response does not reveal which check failed.
const INVALID_TOKEN: &str = "Invalid token";

/// Issues and verifies signed, expiring session tokens.
#[derive(Clone)]
pub struct TokenService {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Default token TTL in minutes.
    ttl_minutes: i64,
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// Absolute expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Zero leeway: a token with TTL T must be rejected at T+1, not T+60.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a signed token for the given subject with the configured TTL.
    pub fn issue(&self, subject: &str) -> AppResult<IssuedToken> {
        self.issue_with_ttl(subject, Duration::minutes(self.ttl_minutes))
    }

    /// Issues a signed token for the given subject with an explicit TTL.
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> AppResult<IssuedToken> {
        let now = Utc::now();

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies a token and returns its subject.
    ///
    /// Checks signature validity and that the token has not expired. All
    /// failures collapse into one opaque unauthorized error. The existence
    /// of the subject in the user directory is the caller's concern.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::unauthorized(INVALID_TOKEN))?;

        Ok(token_data.claims.sub)
    }
}
