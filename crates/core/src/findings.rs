//! Finding types emitted by detectors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{FindingType, Severity};

/// One structured alert produced for a transaction
///
/// Immutable once built; downstream consumers (publishing, deduplication,
/// storage) treat it as an opaque value with structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub name: String,
    pub description: String,
    pub alert_id: String,
    pub protocol: String,
    pub severity: Severity,
    pub finding_type: FindingType,
    /// Free-form detail; BTreeMap keeps serialization deterministic
    pub metadata: BTreeMap<String, String>,
}

impl Finding {
    pub fn builder() -> FindingBuilder {
        FindingBuilder::default()
    }
}

/// Builder for [`Finding`]
#[derive(Debug, Default)]
pub struct FindingBuilder {
    name: Option<String>,
    description: Option<String>,
    alert_id: Option<String>,
    protocol: Option<String>,
    severity: Option<Severity>,
    finding_type: Option<FindingType>,
    metadata: BTreeMap<String, String>,
}

impl FindingBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn alert_id(mut self, alert_id: impl Into<String>) -> Self {
        self.alert_id = Some(alert_id.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn finding_type(mut self, finding_type: FindingType) -> Self {
        self.finding_type = Some(finding_type);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Finding {
        Finding {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            alert_id: self.alert_id.unwrap_or_default(),
            protocol: self.protocol.unwrap_or_default(),
            severity: self.severity.unwrap_or(Severity::Unknown),
            finding_type: self.finding_type.unwrap_or(FindingType::Unknown),
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let finding = Finding::builder()
            .name("Example")
            .description("Example description")
            .alert_id("EXAMPLE-1")
            .protocol("aave")
            .severity(Severity::High)
            .finding_type(FindingType::Suspicious)
            .metadata("key", "value")
            .build();

        assert_eq!(finding.name, "Example");
        assert_eq!(finding.alert_id, "EXAMPLE-1");
        assert_eq!(finding.protocol, "aave");
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.finding_type, FindingType::Suspicious);
        assert_eq!(finding.metadata.get("key").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_builder_defaults() {
        let finding = Finding::builder().build();
        assert_eq!(finding.severity, Severity::Unknown);
        assert_eq!(finding.finding_type, FindingType::Unknown);
        assert!(finding.metadata.is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let build = || {
            Finding::builder()
                .name("Example")
                .severity(Severity::Low)
                .metadata("a", "1")
                .build()
        };
        assert_eq!(build(), build());
    }
}
