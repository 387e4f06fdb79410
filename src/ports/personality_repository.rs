//! PersonalityRepository port for classification persistence

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::personality::PersonalityClassification;

/// Repository for stored personality classifications (one per user)
#[async_trait]
pub trait PersonalityRepository: Send + Sync {
    /// Insert or replace the classification for its user
    async fn save(&self, classification: &PersonalityClassification) -> Result<(), DomainError>;

    /// Find the classification stored for a user
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PersonalityClassification>, DomainError>;
}
