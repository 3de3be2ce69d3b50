//! Repository layer.
//!
//! The route layer talks to storage through the [`ContactRepository`] trait,
//! so any backend (PostgreSQL in production, an in-memory map in development
//! and tests) can sit behind it without touching handler code.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use rolodex_core::types::DbId;

use crate::models::contact::{Contact, NewContact};

pub use memory::MemoryContactRepo;
pub use pg::PgContactRepo;

/// Failure modes a storage backend can report.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backend processed the call but performed no write, for example
    /// an update or delete that matched no row.
    #[error("storage backend rejected the write")]
    WriteRejected,

    /// The backend itself failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// CRUD operations over contact records.
///
/// Identifier generation and any concurrency control belong to
/// implementations; callers construct a fresh transient record per request
/// and hold no state between calls.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts, ordered by id.
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError>;

    /// Look up one contact. `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, RepositoryError>;

    /// Insert a new contact, returning the stored row with its assigned id.
    async fn create(&self, input: &NewContact) -> Result<Contact, RepositoryError>;

    /// Replace the record with the given id wholesale.
    ///
    /// Fails with [`RepositoryError::WriteRejected`] when no row was
    /// written, unknown ids included.
    async fn update(&self, id: DbId, input: &NewContact) -> Result<(), RepositoryError>;

    /// Remove the record with the given id.
    ///
    /// Fails with [`RepositoryError::WriteRejected`] when no row was
    /// removed.
    async fn delete(&self, id: DbId) -> Result<(), RepositoryError>;
}
