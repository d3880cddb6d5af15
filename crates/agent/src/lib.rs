//! Agent process wiring
//!
//! Feeds decoded transaction events to the enabled detectors and hands the
//! resulting findings to the caller. All input validation happens here; the
//! detectors assume well-formed events.

pub mod runner;

pub use runner::{Agent, AgentStats};
