//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `personality` - Trait axes, archetype classification and compatibility

pub mod foundation;
pub mod personality;
