//! Detector dispatch

use tracing::{debug, info};

use sentinel_core::{AgentConfig, AgentError, AgentResult, Finding, TransactionEvent};
use sentinel_detector::{default_detectors, Detector};

/// Runs every enabled detector over incoming transaction events
pub struct Agent {
    detectors: Vec<Box<dyn Detector>>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field(
                "detectors",
                &self.detectors.iter().map(|d| d.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Agent {
    /// Build an agent from the configured detector names.
    ///
    /// A name that matches no shipped detector is a configuration mistake,
    /// not something to skip silently.
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let available = default_detectors();

        for name in &config.enabled_detectors {
            if !available.iter().any(|d| d.name() == name) {
                return Err(AgentError::UnknownDetector(name.clone()));
            }
        }

        let detectors: Vec<Box<dyn Detector>> = available
            .into_iter()
            .filter(|d| config.is_enabled(d.name()))
            .collect();

        Ok(Self { detectors })
    }

    /// Dispatch one decoded transaction to every enabled detector
    pub fn handle_transaction(&self, tx: &TransactionEvent) -> Vec<Finding> {
        let findings: Vec<Finding> = self
            .detectors
            .iter()
            .flat_map(|detector| detector.handle_transaction(tx))
            .collect();

        if findings.is_empty() {
            debug!(block = tx.block_number, "no findings");
        } else {
            for finding in &findings {
                info!(
                    block = tx.block_number,
                    alert_id = %finding.alert_id,
                    severity = %finding.severity,
                    "{}",
                    finding.name
                );
            }
        }

        findings
    }

    /// Parse one JSON-encoded transaction event and dispatch it
    pub fn handle_json(&self, line: &str) -> AgentResult<Vec<Finding>> {
        let tx: TransactionEvent = serde_json::from_str(line)
            .map_err(|e| AgentError::InvalidEvent(e.to_string()))?;
        Ok(self.handle_transaction(&tx))
    }

    pub fn stats(&self) -> AgentStats {
        AgentStats {
            detector_count: self.detectors.len(),
        }
    }
}

/// Agent statistics
#[derive(Debug, Clone)]
pub struct AgentStats {
    pub detector_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_enables_default_detectors() {
        let agent = Agent::new(&AgentConfig::default()).unwrap();
        assert_eq!(agent.stats().detector_count, 1);
    }

    #[test]
    fn test_agent_with_nothing_enabled() {
        let config = AgentConfig {
            enabled_detectors: vec![],
        };
        let agent = Agent::new(&config).unwrap();
        assert_eq!(agent.stats().detector_count, 0);
    }

    #[test]
    fn test_agent_rejects_unknown_detector_name() {
        let config = AgentConfig {
            enabled_detectors: vec!["does-not-exist".to_string()],
        };
        let err = Agent::new(&config).unwrap_err();
        assert!(matches!(err, AgentError::UnknownDetector(name) if name == "does-not-exist"));
    }

    #[test]
    fn test_handle_json_round_trip() {
        let agent = Agent::new(&AgentConfig::default()).unwrap();
        let line = r#"{
            "gas_used": "7000001",
            "addresses": [
                "0x7d2768de32b0b80b7a3454c06bdac94a69ddc7a9",
                "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"
            ],
            "block_number": 100,
            "logs": [
                {"topics": ["0x631042c832b07452973831137f2d73e395028b44b250dedc5abb0ee766e168ac"]}
            ]
        }"#;

        let findings = agent.handle_json(line).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].alert_id, "FORTA-5");
    }

    #[test]
    fn test_handle_json_rejects_malformed_input() {
        let agent = Agent::new(&AgentConfig::default()).unwrap();
        let err = agent.handle_json("not json").unwrap_err();
        assert!(matches!(err, AgentError::InvalidEvent(_)));
    }
}
