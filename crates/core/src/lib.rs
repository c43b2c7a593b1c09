//! Hencoop Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Hencoop.
//! It is transport-agnostic and defines traits that are implemented
//! by the `hencoop-remote` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod investments;
pub mod market;
pub mod purchases;
pub mod rewards;
pub mod sells;
pub mod settings;
pub mod team;
pub mod utils;
pub mod wallet;

// Re-export common types from the rewards and investments modules
pub use investments::*;
pub use rewards::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
