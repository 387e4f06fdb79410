//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BehaviorAggregateReader` - per-user vote statistics (read only)
//! - `PersonalityRepository` - stored classifications
//! - `EventPublisher` - outbound domain events

mod behavior_aggregate_reader;
mod event_publisher;
mod personality_repository;

pub use behavior_aggregate_reader::BehaviorAggregateReader;
pub use event_publisher::EventPublisher;
pub use personality_repository::PersonalityRepository;
