/// Account model
///
/// An account is a stored identity record keyed by email. The password
/// is stored only as an Argon2id hash, and the hash never leaves the
/// service: everything handed to a caller (response bodies, token
/// claims) goes through [`PublicAccount`], the projection that excludes
/// the credential field.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE accounts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email TEXT NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored account, including the password hash
///
/// Only the store layer and the login/reset handlers see this type.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID v4)
    pub id: Uuid,

    /// Email address, unique across all accounts
    pub email: String,

    /// Argon2id password hash, never plaintext
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// The account as exposed to callers: same record minus the credential
///
/// This is what ends up in response bodies and token claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicAccount {
    /// Unique account ID
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub password_hash: String,
}

impl Account {
    /// Projects the account down to its credential-free public form
    ///
    /// Applied immediately after every store read whose result flows
    /// toward a caller.
    pub fn public(&self) -> PublicAccount {
        PublicAccount {
            id: self.id,
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        Account {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_projection_drops_credential() {
        let account = sample_account();
        let public = account.public();

        assert_eq!(public.id, account.id);
        assert_eq!(public.email, account.email);

        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
