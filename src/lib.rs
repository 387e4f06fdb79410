//! Choice Persona - Personality classification and compatibility
//!
//! This crate turns a user's aggregated voting behavior into a four-axis
//! trait profile, classifies that profile into one of eight archetypes, and
//! scores how compatible two profiles are.
//!
//! The pure computations live in [`domain::personality`]; the
//! [`application`] handlers wire them to storage and event publishing
//! through the [`ports`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
