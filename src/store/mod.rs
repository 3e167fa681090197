/// Persistence seam for accounts and reset tickets
///
/// The workflow talks to its stores only through these traits, so the
/// HTTP layer has no opinion about what backs them. Two implementations
/// live here:
///
/// - [`postgres::PgStore`]: the production backend over sqlx/Postgres
/// - [`memory::MemoryStore`]: an in-process backend for tests and demos
///
/// # Contract
///
/// - Exactly one account per email; `create_account` fails with
///   `StoreError::DuplicateEmail` on a second insert.
/// - `delete_account_by_email` is idempotent and reports whether a row
///   was removed.
/// - Tickets are append-only from the workflow's point of view:
///   creation and exact (email, code) lookup, nothing else.

pub mod memory;
pub mod postgres;

use crate::models::{Account, CreateAccount, CreateResetTicket, ResetTicket};
use async_trait::async_trait;
use uuid::Uuid;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An account with this email already exists
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Any other backend failure
    #[error("store error: {0}")]
    Backend(String),
}

/// Account persistence operations
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Creates an account; fails with `DuplicateEmail` if the email is taken
    async fn create_account(&self, data: CreateAccount) -> Result<Account, StoreError>;

    /// Finds an account by its email address
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Replaces the stored password hash, returning the updated account
    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<Option<Account>, StoreError>;

    /// Removes any account matching the email; true if a row was deleted
    async fn delete_account_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Cheap connectivity check for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Reset-ticket persistence operations
#[async_trait]
pub trait ResetTicketStore: Send + Sync {
    /// Records a newly issued reset code for an email address
    async fn create_ticket(&self, data: CreateResetTicket) -> Result<ResetTicket, StoreError>;

    /// Looks up a ticket by the exact (email, code) pair
    async fn find_ticket(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<ResetTicket>, StoreError>;
}
