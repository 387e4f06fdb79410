//! BehaviorAggregateReader port - read access to per-user vote statistics.
//!
//! The aggregate is maintained by the voting side of the system; this
//! crate only ever reads it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::personality::BehaviorAggregate;

/// Source of behavior aggregates.
#[async_trait]
pub trait BehaviorAggregateReader: Send + Sync {
    /// Fetch the aggregate for a user, `None` if the user has no record.
    async fn get_aggregate(&self, user_id: &UserId)
        -> Result<Option<BehaviorAggregate>, DomainError>;
}
