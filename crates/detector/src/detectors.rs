//! Detector trait and registry

use sentinel_core::{Finding, TransactionEvent};

use crate::flash_loan::FlashLoanArbitrage;

/// A pure predicate over one decoded transaction
///
/// Implementations are stateless and safe to invoke concurrently; the
/// caller controls scheduling. Returning an empty list is the normal
/// negative outcome.
pub trait Detector: Send + Sync {
    fn name(&self) -> &'static str;
    fn handle_transaction(&self, tx: &TransactionEvent) -> Vec<Finding>;
}

/// Every detector this crate ships
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![Box::new(FlashLoanArbitrage)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_flash_loan_detector() {
        let detectors = default_detectors();
        assert_eq!(detectors.len(), 1);
        assert_eq!(detectors[0].name(), "flash-loan-arbitrage");
    }
}
