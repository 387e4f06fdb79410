//! In-memory personality store.
//!
//! Holds behavior aggregates and stored classifications side by side, so a
//! single instance can back both `BehaviorAggregateReader` and
//! `PersonalityRepository`. Useful for:
//! - Unit and integration tests
//! - Embedding the engine in a process that owns its data
//!
//! Nothing is persisted across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::personality::{BehaviorAggregate, PersonalityClassification};
use crate::ports::{BehaviorAggregateReader, PersonalityRepository};

/// In-memory implementation of the personality ports.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryPersonalityStore::new());
/// store.put_aggregate(user_id.clone(), aggregate).await;
///
/// let handler = ClassifyUserHandler::new(store.clone(), store.clone(), bus, &config);
/// ```
#[derive(Default)]
pub struct InMemoryPersonalityStore {
    aggregates: RwLock<HashMap<UserId, BehaviorAggregate>>,
    classifications: RwLock<HashMap<UserId, PersonalityClassification>>,
}

impl InMemoryPersonalityStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user's behavior aggregate.
    pub async fn put_aggregate(&self, user_id: UserId, aggregate: BehaviorAggregate) {
        self.aggregates.write().await.insert(user_id, aggregate);
    }

    /// Number of stored classifications.
    pub async fn classification_count(&self) -> usize {
        self.classifications.read().await.len()
    }

    /// Removes everything.
    pub async fn clear(&self) {
        self.aggregates.write().await.clear();
        self.classifications.write().await.clear();
    }
}

#[async_trait]
impl BehaviorAggregateReader for InMemoryPersonalityStore {
    async fn get_aggregate(
        &self,
        user_id: &UserId,
    ) -> Result<Option<BehaviorAggregate>, DomainError> {
        Ok(self.aggregates.read().await.get(user_id).cloned())
    }
}

#[async_trait]
impl PersonalityRepository for InMemoryPersonalityStore {
    async fn save(&self, classification: &PersonalityClassification) -> Result<(), DomainError> {
        self.classifications
            .write()
            .await
            .insert(classification.user_id.clone(), classification.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PersonalityClassification>, DomainError> {
        Ok(self.classifications.read().await.get(user_id).cloned())
    }
}
