/// Password hashing using Argon2id
///
/// Plaintext secrets are hashed with Argon2id and a per-password random
/// salt; the output is a PHC string that embeds the algorithm,
/// parameters, and salt, so verification needs nothing but the hash
/// itself. Comparison is constant-time inside the argon2 crate.
///
/// # Example
///
/// ```
/// use gatehouse::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret")?;
/// assert!(verify_password("super_secret", &hash)?);
/// assert!(!verify_password("not_the_secret", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash a password
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// Failed to verify a password against a hash
    #[error("failed to verify password: {0}")]
    Verify(String),

    /// Stored hash is not a valid PHC string
    #[error("invalid password hash: {0}")]
    InvalidHash(String),
}

/// Hashes a plaintext password with Argon2id and a fresh random salt
///
/// Returns the PHC string form, e.g.
/// `$argon2id$v=19$m=19456,t=2,p=1$...$...`.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash
///
/// `Ok(false)` means the password simply does not match; any other
/// failure (malformed hash, unsupported parameters) is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    // A PHC string can parse and still carry no hash output; verifying
    // against one is a mismatch by construction, not a wrong password.
    if parsed.hash.is_none() {
        return Err(PasswordError::InvalidHash(
            "hash output missing from PHC string".to_string(),
        ));
    }

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_phc_string() {
        let hash = hash_password("test_password").expect("hash should succeed");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_correct_and_incorrect() {
        let hash = hash_password("correct_password").unwrap();

        assert!(verify_password("correct_password", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        // Unparseable string
        assert!(verify_password("password", "not-a-hash").is_err());

        // Parses as a PHC string but carries no hash output; must be an
        // error, not a quiet mismatch
        let err = verify_password("password", "$argon2id$broken").unwrap_err();
        assert!(matches!(err, PasswordError::InvalidHash(_)));
    }
}
