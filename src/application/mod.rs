//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (classify) write through the repository and publish events;
//! queries (compare) only read.

pub mod handlers;

pub use handlers::{
    ClassifyUserCommand, ClassifyUserHandler, ClassifyUserOutcome, ClassifyUserResult,
    CompareUsersHandler, CompareUsersQuery, CompareUsersResult, RecomputeDecision,
    RecomputePolicy,
};
