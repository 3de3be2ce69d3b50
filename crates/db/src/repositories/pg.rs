//! PostgreSQL-backed contact repository.

use async_trait::async_trait;
use rolodex_core::types::DbId;

use crate::models::contact::{Contact, NewContact};
use crate::DbPool;

use super::{ContactRepository, RepositoryError};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email_address, notes, created_at, updated_at";

/// Contact storage in the `contacts` PostgreSQL table.
pub struct PgContactRepo {
    pool: DbPool,
}

impl PgContactRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepo {
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY id");
        let contacts = sqlx::query_as::<_, Contact>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(contacts)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn create(&self, input: &NewContact) -> Result<Contact, RepositoryError> {
        let query = format!(
            "INSERT INTO contacts (first_name, last_name, email_address, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email_address)
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn update(&self, id: DbId, input: &NewContact) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE contacts SET \
                first_name = $2, \
                last_name = $3, \
                email_address = $4, \
                notes = $5, \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email_address)
        .bind(&input.notes)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::WriteRejected);
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::WriteRejected);
        }
        Ok(())
    }
}
