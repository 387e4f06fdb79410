//! CompareUsersHandler - Query handler for pairwise compatibility.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::personality::{
    ArchetypeId, CompatibilityEngine, CompatibilityResult, PersonalityClassification,
};
use crate::ports::PersonalityRepository;

/// Query comparing two users' stored profiles.
#[derive(Debug, Clone)]
pub struct CompareUsersQuery {
    pub user_id: UserId,
    pub other_user_id: UserId,
}

/// Compatibility plus both users' archetypes.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareUsersResult {
    pub user_archetype: ArchetypeId,
    pub other_archetype: ArchetypeId,
    pub compatibility: CompatibilityResult,
}

/// Handler for comparing users.
pub struct CompareUsersHandler {
    repository: Arc<dyn PersonalityRepository>,
}

impl CompareUsersHandler {
    pub fn new(repository: Arc<dyn PersonalityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: CompareUsersQuery) -> Result<CompareUsersResult, DomainError> {
        if query.user_id == query.other_user_id {
            return Err(DomainError::validation(
                "other_user_id",
                "Cannot compare a user with themself",
            ));
        }

        let mine = self.load(&query.user_id).await?;
        let theirs = self.load(&query.other_user_id).await?;

        let compatibility = CompatibilityEngine::compute(&mine.profile, &theirs.profile);

        debug!(
            user_id = %query.user_id,
            other_user_id = %query.other_user_id,
            score = compatibility.overall_score.value(),
            label = %compatibility.label,
            "Computed compatibility"
        );

        Ok(CompareUsersResult {
            user_archetype: mine.archetype_id,
            other_archetype: theirs.archetype_id,
            compatibility,
        })
    }

    async fn load(&self, user_id: &UserId) -> Result<PersonalityClassification, DomainError> {
        self.repository
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("User {} has not been classified", user_id),
                )
                .with_detail("user_id", user_id.to_string())
            })
    }
}
