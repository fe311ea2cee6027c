//! Bearer-token codec: HS512-signed JWTs carrying the user's identity,
//! username, and an absolute expiration.
//!
//! The signing key is process-wide state created once at startup and
//! held in [`TokenConfig`]. When no key is configured a random one is
//! generated, which means a restart leaves every token in the session
//! store unverifiable; that is an accepted limitation of the design, not
//! something the codec masks. Multi-instance deployments must set
//! `TOKEN_SECRET` so all processes share one key.

use bookshelf_core::types::UserId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's identity.
    pub sub: UserId,
    /// The username at the time of issue.
    pub username: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier, so two logins in the same second still
    /// produce distinct token strings.
    pub jti: String,
}

/// Configuration for token issue and verification.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA512 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in seconds (default: 3600).
    pub ttl_secs: i64,
}

/// Default token lifetime in seconds.
const DEFAULT_TTL_SECS: i64 = 3600;

/// Length of a generated process-local secret.
const GENERATED_SECRET_LEN: usize = 64;

impl TokenConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var          | Required | Default              |
    /// |------------------|----------|----------------------|
    /// | `TOKEN_SECRET`   | no       | random, process-local|
    /// | `TOKEN_TTL_SECS` | no       | `3600`               |
    ///
    /// # Panics
    ///
    /// Panics if `TOKEN_TTL_SECS` is set but not a valid i64.
    pub fn from_env() -> Self {
        let secret = match std::env::var("TOKEN_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!(
                    "TOKEN_SECRET not set; generated a process-local signing key. \
                     All outstanding sessions become unverifiable on restart."
                );
                generate_secret()
            }
        };

        let ttl_secs: i64 = std::env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TTL_SECS.to_string())
            .parse()
            .expect("TOKEN_TTL_SECS must be a valid i64");

        Self { secret, ttl_secs }
    }
}

/// Generate a random alphanumeric signing secret.
fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}

/// Issue an HS512 token for the given user.
///
/// The expiration is absolute: `now + ttl_secs` at the moment of issue.
pub fn issue(
    user_id: UserId,
    username: &str,
    config: &TokenConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: now + config.ttl_secs,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token and return the embedded [`Claims`].
///
/// Fails closed: any structural, signature, or expiry problem is a
/// rejection, never a partial success.
pub fn verify(token: &str, config: &TokenConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::new(Algorithm::HS512),
    )?;
    Ok(token_data.claims)
}
