/// Bearer token issuance and validation
///
/// Tokens are HS256-signed JWTs whose claims carry a snapshot of the
/// account as the caller is allowed to see it (the credential-free
/// [`PublicAccount`]). The token is handed out at registration and
/// login, both in the `X-Access-Token` header and the `token` cookie.
/// Nothing is persisted server-side and there is no revocation.
///
/// # Example
///
/// ```
/// use gatehouse::auth::token::{issue_token, verify_token};
/// use gatehouse::models::PublicAccount;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let account = PublicAccount {
///     id: Uuid::new_v4(),
///     email: "user@example.com".to_string(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// let secret = "test-secret-key-at-least-32-bytes-long";
/// let token = issue_token(&account, secret)?;
/// let claims = verify_token(&token, secret)?;
/// assert_eq!(claims.user.email, "user@example.com");
/// # Ok(())
/// # }
/// ```

use crate::models::PublicAccount;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer written into and demanded from every token
const ISSUER: &str = "gatehouse";

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Failed to sign a token
    #[error("failed to create token: {0}")]
    Create(String),

    /// Token failed signature, issuer, or structural validation
    #[error("failed to validate token: {0}")]
    Validation(String),

    /// Token has expired
    #[error("token has expired")]
    Expired,
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - account ID
    pub sub: Uuid,

    /// Issuer - always "gatehouse"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Snapshot of the account at issuance, without the credential
    pub user: PublicAccount,
}

impl Claims {
    /// Creates claims for an account with the default 24 h lifetime
    pub fn new(user: PublicAccount) -> Self {
        Self::with_lifetime(user, Duration::hours(24))
    }

    /// Creates claims with a custom lifetime
    pub fn with_lifetime(user: PublicAccount, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user.id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            user,
        }
    }
}

/// Signs a session token for an account snapshot
pub fn issue_token(account: &PublicAccount, secret: &str) -> Result<String, TokenError> {
    let claims = Claims::new(account.clone());
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| TokenError::Create(e.to_string()))
}

/// Validates a session token and extracts its claims
///
/// Checks signature, expiry, and issuer.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);

    let data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Validation(e.to_string()),
    })?;

    Ok(data.claims)
}
