//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod personality;

pub use personality::{
    ClassifyUserCommand, ClassifyUserHandler, ClassifyUserOutcome, ClassifyUserResult,
    CompareUsersHandler, CompareUsersQuery, CompareUsersResult, RecomputeDecision,
    RecomputePolicy,
};
