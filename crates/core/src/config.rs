//! Configuration types

use serde::{Deserialize, Serialize};

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Detector names to run; transactions pass through each in turn
    pub enabled_detectors: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            enabled_detectors: vec!["flash-loan-arbitrage".to_string()],
        }
    }
}

impl AgentConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled_detectors.iter().any(|n| n == name)
    }
}
