/// Reset-ticket model
///
/// A reset ticket records that a one-time code was issued for an email
/// address. It is valid evidence of reset intent only for the exact
/// (email, code) pair under which it was created. The workflow never
/// marks a ticket consumed or deletes it; any expiry policy belongs to
/// the store.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE password_resets (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email TEXT NOT NULL,
///     code VARCHAR(16) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored password-reset ticket
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResetTicket {
    /// Unique ticket ID (UUID v4)
    pub id: Uuid,

    /// Email address the code was issued for
    pub email: String,

    /// One-time numeric code, stored and compared as a string
    pub code: String,

    /// When the ticket was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a reset ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResetTicket {
    /// Email address requesting the reset
    pub email: String,

    /// Generated one-time code
    pub code: String,
}
