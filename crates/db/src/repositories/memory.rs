//! In-memory contact repository.
//!
//! Backs local development when no `DATABASE_URL` is configured, and the
//! HTTP integration tests, which run without a live database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rolodex_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::contact::{Contact, NewContact};

use super::{ContactRepository, RepositoryError};

/// Contact storage in a process-local map. Ids are assigned sequentially
/// starting at 1.
#[derive(Default)]
pub struct MemoryContactRepo {
    next_id: AtomicI64,
    contacts: RwLock<BTreeMap<DbId, Contact>>,
}

impl MemoryContactRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepo {
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        Ok(self.contacts.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Contact>, RepositoryError> {
        Ok(self.contacts.read().await.get(&id).cloned())
    }

    async fn create(&self, input: &NewContact) -> Result<Contact, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let contact = Contact {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email_address: input.email_address.clone(),
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.contacts.write().await.insert(id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: DbId, input: &NewContact) -> Result<(), RepositoryError> {
        let mut contacts = self.contacts.write().await;
        let existing = contacts.get_mut(&id).ok_or(RepositoryError::WriteRejected)?;
        existing.first_name = input.first_name.clone();
        existing.last_name = input.last_name.clone();
        existing.email_address = input.email_address.clone();
        existing.notes = input.notes.clone();
        existing.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), RepositoryError> {
        match self.contacts.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::WriteRejected),
        }
    }
}
