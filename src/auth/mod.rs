/// Authentication primitives
///
/// # Modules
///
/// - [`password`]: Argon2id hashing and verification of plaintext secrets
/// - [`token`]: HS256 bearer tokens carrying the public account snapshot
/// - [`code`]: One-time numeric reset codes

pub mod code;
pub mod password;
pub mod token;
