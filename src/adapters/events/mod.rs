//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus that captures events

mod in_memory;

pub use in_memory::InMemoryEventBus;
