//! Conversion statistics and aggregated warnings.

use serde::{Deserialize, Serialize};

/// Stable warning codes.
pub mod codes {
    pub const SMARTART_SKIPPED: &str = "WARN_SMARTART_SKIPPED";
    pub const MACRO_SKIPPED: &str = "WARN_MACRO_SKIPPED";
    pub const ACTIVEX_SKIPPED: &str = "WARN_ACTIVEX_SKIPPED";
    pub const OLE_SKIPPED: &str = "WARN_OLE_SKIPPED";
    pub const MISSING_RESOURCE: &str = "WARN_MISSING_RESOURCE";
    pub const ELEMENT_UNHANDLED: &str = "WARN_ELEMENT_UNHANDLED";
    pub const GEOMETRY_UNRESOLVED: &str = "WARN_GEOMETRY_UNRESOLVED";
}

/// One warning category with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
    pub count: usize,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (x{})", self.code, self.message, self.count)
    }
}

/// Warnings aggregated by code, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarningCollector {
    warnings: Vec<Warning>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` occurrences. The first message of a code is kept.
    pub fn add(&mut self, code: &str, message: impl Into<String>, count: usize) {
        if count == 0 {
            return;
        }
        match self.warnings.iter_mut().find(|w| w.code == code) {
            Some(existing) => existing.count += count,
            None => self.warnings.push(Warning {
                code: code.to_string(),
                message: message.into(),
                count,
            }),
        }
    }

    pub fn record(&mut self, code: &str, message: impl Into<String>) {
        self.add(code, message, 1);
    }

    pub fn merge(&mut self, other: &WarningCollector) {
        for w in &other.warnings {
            self.add(&w.code, w.message.clone(), w.count);
        }
    }

    pub fn get(&self, code: &str) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.code == code)
    }

    pub fn as_slice(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.warnings
    }
}

/// Overall result of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    /// Everything converted
    #[default]
    Success,
    /// Converted with dropped or failed elements
    Partial,
    /// Nothing usable was produced
    Failure,
}

/// Stage of a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStage {
    #[default]
    Pending,
    Loaded,
    Parsed,
    Converted,
    Serialized,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    pub total_elements: usize,
    pub converted_elements: usize,
    pub skipped_elements: usize,
    pub failed_elements: usize,
    pub warnings: Vec<Warning>,
    pub errors: Vec<String>,
    pub duration_ms: u64,
    pub status: ConversionStatus,
}

impl ConversionStats {
    /// Derive the status from the counters. Any warning marks the run lossy.
    pub fn finish(&mut self) {
        let lossless = self.failed_elements == 0
            && self.skipped_elements == 0
            && self.errors.is_empty()
            && self.warnings.is_empty();
        self.status = if lossless {
            ConversionStatus::Success
        } else {
            ConversionStatus::Partial
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_aggregate_by_code() {
        let mut warnings = WarningCollector::new();
        warnings.record(codes::SMARTART_SKIPPED, "SmartArt diagram skipped");
        warnings.record(codes::SMARTART_SKIPPED, "another message");
        warnings.add(codes::SMARTART_SKIPPED, "ignored", 1);
        warnings.record(codes::MISSING_RESOURCE, "missing media");

        assert_eq!(warnings.as_slice().len(), 2);
        let smartart = warnings.get(codes::SMARTART_SKIPPED).unwrap();
        assert_eq!(smartart.count, 3);
        assert_eq!(smartart.message, "SmartArt diagram skipped");
        assert_eq!(
            smartart.to_string(),
            "WARN_SMARTART_SKIPPED: SmartArt diagram skipped (x3)"
        );
    }

    #[test]
    fn test_zero_count_ignored() {
        let mut warnings = WarningCollector::new();
        warnings.add(codes::OLE_SKIPPED, "x", 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_status() {
        let mut stats = ConversionStats {
            total_elements: 3,
            converted_elements: 3,
            ..Default::default()
        };
        stats.finish();
        assert_eq!(stats.status, ConversionStatus::Success);

        stats.failed_elements = 1;
        stats.finish();
        assert_eq!(stats.status, ConversionStatus::Partial);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["status"], "partial");
        assert_eq!(json["failedElements"], 1);
    }

    #[test]
    fn test_warning_makes_run_partial() {
        let mut stats = ConversionStats {
            total_elements: 1,
            converted_elements: 1,
            warnings: vec![Warning {
                code: codes::MISSING_RESOURCE.to_string(),
                message: "media part not found".to_string(),
                count: 1,
            }],
            ..Default::default()
        };
        stats.finish();
        assert_eq!(stats.status, ConversionStatus::Partial);
    }
}
