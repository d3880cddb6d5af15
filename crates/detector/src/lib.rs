//! Transaction detectors
//!
//! Each detector is a pure predicate over one decoded transaction event:
//! same input, same findings, no shared state between invocations.

pub mod detectors;
pub mod flash_loan;

pub use detectors::{default_detectors, Detector};
pub use flash_loan::FlashLoanArbitrage;
