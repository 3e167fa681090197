/// Postgres-backed store
///
/// Production implementation of [`AccountStore`] and
/// [`ResetTicketStore`] over a sqlx connection pool. Schema lives in
/// `migrations/` and is embedded at compile time.
///
/// # Example
///
/// ```no_run
/// use gatehouse::store::postgres::PgStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let store = PgStore::connect("postgresql://localhost/gatehouse", 10).await?;
/// store.run_migrations().await?;
/// # Ok(())
/// # }
/// ```

use crate::{
    models::{Account, CreateAccount, CreateResetTicket, ResetTicket},
    store::{AccountStore, ResetTicketStore, StoreError},
};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

/// Store over a Postgres connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects to Postgres with the given pool size
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| StoreError::Backend(format!("connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Applies the embedded migrations
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("migration failed: {}", e)))?;

        Ok(())
    }
}

/// Maps a sqlx error onto the store contract
///
/// Unique-constraint violations on the email column become
/// `DuplicateEmail`; everything else is an opaque backend failure.
fn map_sqlx_error(err: sqlx::Error, email: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err
            .constraint()
            .map_or(false, |c| c.contains("email"))
        {
            return StoreError::DuplicateEmail(email.to_string());
        }
    }
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl AccountStore for PgStore {
    async fn create_account(&self, data: CreateAccount) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, &data.email))
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<Option<Account>, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn delete_account_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ResetTicketStore for PgStore {
    async fn create_ticket(&self, data: CreateResetTicket) -> Result<ResetTicket, StoreError> {
        sqlx::query_as::<_, ResetTicket>(
            r#"
            INSERT INTO password_resets (email, code)
            VALUES ($1, $2)
            RETURNING id, email, code, created_at
            "#,
        )
        .bind(&data.email)
        .bind(&data.code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn find_ticket(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<ResetTicket>, StoreError> {
        sqlx::query_as::<_, ResetTicket>(
            r#"
            SELECT id, email, code, created_at
            FROM password_resets
            WHERE email = $1 AND code = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
