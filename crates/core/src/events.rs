//! Decoded transaction events handed to detectors
//!
//! The upstream event source delivers transactions already decoded to the
//! receipt level: gas consumed, touched addresses, and raw logs. Detectors
//! only ever query this type; they never reach for a node themselves.

use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single receipt log, kept opaque beyond its topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// One decoded transaction as seen by detectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Gas consumed, as the decimal string from the receipt
    pub gas_used: String,
    /// Every account address the transaction touched
    pub addresses: HashSet<Address>,
    pub block_number: u64,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl TransactionEvent {
    /// Gas consumed as a 256-bit integer.
    ///
    /// Receipt gas is a decimal string that can exceed what fits in a native
    /// integer, so the comparison type is `U256`. A string wider than 256
    /// bits saturates to `U256::MAX`, which still compares above any
    /// threshold; a non-numeric string maps to zero and simply fails the
    /// gas gate.
    pub fn gas_used_value(&self) -> U256 {
        let raw = self.gas_used.trim();
        match U256::from_str_radix(raw, 10) {
            Ok(value) => value,
            Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => U256::MAX,
            Err(_) => U256::ZERO,
        }
    }

    pub fn has_address(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    /// Logs whose first topic matches the given Solidity event declaration.
    ///
    /// The declaration may carry the `event` keyword, parameter names, and
    /// `indexed` markers; matching is on the keccak-256 hash of the
    /// canonical signature. Returns an empty list when nothing matches.
    pub fn filter_log(&self, signature: &str) -> Vec<LogEntry> {
        let topic = event_topic(signature).to_string();
        self.logs
            .iter()
            .filter(|log| {
                log.topics
                    .first()
                    .is_some_and(|t| t.eq_ignore_ascii_case(&topic))
            })
            .cloned()
            .collect()
    }
}

/// Topic-0 hash of a Solidity event declaration
pub fn event_topic(signature: &str) -> B256 {
    keccak256(canonical_signature(signature).as_bytes())
}

/// Reduce `event Name(type indexed name, ...)` to `Name(type,...)`
fn canonical_signature(declaration: &str) -> String {
    let declaration = declaration.trim();
    let declaration = declaration.strip_prefix("event ").unwrap_or(declaration);
    let (name, params) = declaration.split_once('(').unwrap_or((declaration, ""));
    let types: Vec<&str> = params
        .trim_end_matches(')')
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.split_whitespace().next().unwrap_or(p))
        .collect();
    format!("{}({})", name.trim(), types.join(","))
}
