//! Personality command and query handlers.

mod classify_user;
mod compare_users;
mod recompute_policy;

pub use classify_user::{
    ClassifyUserCommand, ClassifyUserHandler, ClassifyUserOutcome, ClassifyUserResult,
};
pub use compare_users::{CompareUsersHandler, CompareUsersQuery, CompareUsersResult};
pub use recompute_policy::{RecomputeDecision, RecomputePolicy};
