/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-bound session tokens
 * carried in the `token` cookie.
 *
 * Tokens are HS256 JWTs signed with a single process-wide secret. The secret
 * is loaded once at startup into a [`SigningSecret`] and moved into the
 * [`TokenService`]; there is no rotation, so every token issued during the
 * process lifetime verifies against the same key.
 *
 * Verification is pure: it never touches the database.
 */

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Session lifetime
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Name of the cookie that carries the session token
pub const TOKEN_COOKIE: &str = "token";

/// HS256 signing secret
///
/// `Debug` output never includes the key material.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User ID
    sub: String,
    /// Username at issuance
    username: String,
    /// Expiration time (Unix timestamp)
    exp: i64,
    /// Issued at time (Unix timestamp)
    iat: i64,
}

/// Verified identity carried by a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaim {
    pub user_id: Uuid,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// A freshly signed token and its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Token verification and signing failures
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed session token")]
    MalformedToken,

    #[error("session token signature does not match")]
    InvalidSignature,

    #[error("session token expired")]
    Expired,

    #[error("failed to sign session token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Build the service from the process secret
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared in verify_at so the boundary is exact
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Session lifetime applied at issuance
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, expiring 24 hours from now
    pub fn issue(&self, user_id: Uuid, username: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// Create a token as if issued at `now`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let iat = now.timestamp();
        let exp = (now + self.ttl).timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp,
            iat,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)?;

        Ok(IssuedToken {
            token,
            expires_at: timestamp_to_utc(exp)?,
        })
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<SessionClaim, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as of `now`
    ///
    /// The token is expired once `now` reaches its `exp` second.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaim, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::MalformedToken,
            },
        )?;
        let claims = data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::MalformedToken)?;

        Ok(SessionClaim {
            user_id,
            username: claims.username,
            expires_at: timestamp_to_utc(claims.exp)?,
        })
    }
}

fn timestamp_to_utc(timestamp: i64) -> Result<DateTime<Utc>, TokenError> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or(TokenError::MalformedToken)
}
