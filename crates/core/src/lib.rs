//! Core types for the transaction-inspection agent
//!
//! This crate provides the shared types used across all components:
//! - Decoded transaction events and their logs
//! - Finding records and their classification enums
//! - Agent configuration and boundary errors

pub mod config;
pub mod errors;
pub mod events;
pub mod findings;
pub mod types;

pub use config::*;
pub use errors::*;
pub use events::*;
pub use findings::*;
pub use types::*;
