//! Flash-loan arbitrage detection
//!
//! Flags transactions that take an Aave V2 flash loan and touch a Uniswap
//! router while burning an unusually large amount of gas. The checks run
//! cheapest first so the common case bails out on the gas gate alone.

use alloy_primitives::{address, Address, U256};
use tracing::debug;

use sentinel_core::{Finding, FindingType, LogEntry, Severity, TransactionEvent};

use crate::detectors::Detector;

/// Minimum gas consumed for a transaction to be a candidate
const HIGH_GAS_THRESHOLD: U256 = U256::from_limbs([7_000_000, 0, 0, 0]);

/// Aave V2 lending pool
const LENDING_PROTOCOL_ADDRESS: Address = address!("7d2768de32b0b80b7a3454c06bdac94a69ddc7a9");

const FLASH_LOAN_EVENT: &str = "event FlashLoan(address indexed target, address indexed initiator, \
     address indexed asset, uint256 amount, uint256 premium, uint16 referralCode)";

/// Uniswap V2 and V3 routers; on a tie the first declared wins
const INTERESTING_PROTOCOLS: [Address; 2] = [
    address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D"),
    address!("E592427A0AEce92De3Edee1F18E0157C05861564"),
];

/// Detects flash loans used to arbitrage a Uniswap router
pub struct FlashLoanArbitrage;

impl FlashLoanArbitrage {
    fn build_finding(&self, protocol_address: Address, loans: &[LogEntry]) -> Finding {
        Finding::builder()
            .name("Flash Loan to arbitrage UniSwap")
            .description(format!("Flash Loan detected to arbitrage {protocol_address}"))
            .alert_id("FORTA-5")
            .protocol("aave")
            .finding_type(FindingType::Suspicious)
            .severity(Severity::High)
            .metadata("protocolAddress", protocol_address.to_string())
            .metadata("loans", serde_json::to_string(loans).unwrap_or_default())
            .build()
    }
}

impl Detector for FlashLoanArbitrage {
    fn name(&self) -> &'static str {
        "flash-loan-arbitrage"
    }

    fn handle_transaction(&self, tx: &TransactionEvent) -> Vec<Finding> {
        // Gas too low to be a flash-loan attack
        if tx.gas_used_value() < HIGH_GAS_THRESHOLD {
            return Vec::new();
        }

        // Lending protocol not involved
        if !tx.has_address(&LENDING_PROTOCOL_ADDRESS) {
            return Vec::new();
        }

        // No flash loan events in the receipt
        let flash_loans = tx.filter_log(FLASH_LOAN_EVENT);
        if flash_loans.is_empty() {
            return Vec::new();
        }

        // None of the routers we watch were touched
        let Some(protocol_address) = INTERESTING_PROTOCOLS
            .iter()
            .find(|address| tx.has_address(address))
        else {
            return Vec::new();
        };

        debug!(
            block = tx.block_number,
            %protocol_address,
            loans = flash_loans.len(),
            "flash loan arbitrage detected"
        );

        vec![self.build_finding(*protocol_address, &flash_loans)]
    }
}
