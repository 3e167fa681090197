/// API route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication workflow (register, login, password reset)

pub mod auth;
pub mod health;
