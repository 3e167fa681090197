/// In-memory store for tests and demos
///
/// Keeps accounts and tickets in process memory behind async locks.
/// Behavior mirrors the Postgres backend where the workflow can
/// observe it: unique emails, exact (email, code) ticket lookup with
/// newest-first preference, idempotent deletes.
///
/// # Example
///
/// ```
/// use gatehouse::models::CreateAccount;
/// use gatehouse::store::{memory::MemoryStore, AccountStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// let account = store
///     .create_account(CreateAccount {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     })
///     .await?;
/// assert_eq!(account.email, "user@example.com");
/// # Ok(())
/// # }
/// ```

use crate::{
    models::{Account, CreateAccount, CreateResetTicket, ResetTicket},
    store::{AccountStore, ResetTicketStore, StoreError},
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, Account>>,
    tickets: RwLock<Vec<ResetTicket>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tickets on record, across all emails
    pub async fn ticket_count(&self) -> usize {
        self.tickets.read().await.len()
    }

    /// Most recent ticket issued for an email, if any
    pub async fn last_ticket_for(&self, email: &str) -> Option<ResetTicket> {
        self.tickets
            .read()
            .await
            .iter()
            .rev()
            .find(|t| t.email == email)
            .cloned()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(&self, data: CreateAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&data.email) {
            return Err(StoreError::DuplicateEmail(data.email));
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        };

        accounts.insert(data.email, account.clone());
        Ok(account)
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<Option<Account>, StoreError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts.values_mut().find(|a| a.id == id);
        Ok(account.map(|a| {
            a.password_hash = password_hash.to_string();
            a.updated_at = Utc::now();
            a.clone()
        }))
    }

    async fn delete_account_by_email(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.accounts.write().await.remove(email).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl ResetTicketStore for MemoryStore {
    async fn create_ticket(&self, data: CreateResetTicket) -> Result<ResetTicket, StoreError> {
        let ticket = ResetTicket {
            id: Uuid::new_v4(),
            email: data.email,
            code: data.code,
            created_at: Utc::now(),
        };

        self.tickets.write().await.push(ticket.clone());
        Ok(ticket)
    }

    async fn find_ticket(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<ResetTicket>, StoreError> {
        Ok(self
            .tickets
            .read()
            .await
            .iter()
            .rev()
            .find(|t| t.email == email && t.code == code)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(email: &str) -> CreateAccount {
        CreateAccount {
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_account() {
        let store = MemoryStore::new();

        let created = store.create_account(create("a@example.com")).await.unwrap();
        let found = store
            .find_account_by_email("a@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, created.id);
        assert!(store
            .find_account_by_email("b@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.create_account(create("a@example.com")).await.unwrap();

        let err = store
            .create_account(create("a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let store = MemoryStore::new();
        let account = store.create_account(create("a@example.com")).await.unwrap();

        let updated = store
            .update_password_hash(account.id, "new-hash")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.password_hash, "new-hash");

        let missing = store
            .update_password_hash(Uuid::new_v4(), "x")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.create_account(create("a@example.com")).await.unwrap();

        assert!(store.delete_account_by_email("a@example.com").await.unwrap());
        assert!(!store.delete_account_by_email("a@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_ticket_lookup_is_exact() {
        let store = MemoryStore::new();
        store
            .create_ticket(CreateResetTicket {
                email: "a@example.com".to_string(),
                code: "123456".to_string(),
            })
            .await
            .unwrap();

        assert!(store
            .find_ticket("a@example.com", "123456")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_ticket("a@example.com", "654321")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_ticket("b@example.com", "123456")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_tickets_accumulate() {
        let store = MemoryStore::new();
        for code in ["111111", "222222"] {
            store
                .create_ticket(CreateResetTicket {
                    email: "a@example.com".to_string(),
                    code: code.to_string(),
                })
                .await
                .unwrap();
        }

        assert_eq!(store.ticket_count().await, 2);
        let last = store.last_ticket_for("a@example.com").await.unwrap();
        assert_eq!(last.code, "222222");
    }
}
