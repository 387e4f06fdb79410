//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations
//! - `personality` - Aggregate and classification storage

pub mod events;
pub mod personality;

pub use events::InMemoryEventBus;
pub use personality::InMemoryPersonalityStore;
