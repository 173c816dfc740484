//! Conversion options.

use crate::units::CoordinateMode;
use serde::{Deserialize, Serialize};

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// How EMU coordinates map to output pixels
    pub coordinate_mode: CoordinateMode,

    /// Copy speaker notes into each slide's `remark`
    pub include_notes: bool,

    /// Sequential element ids instead of random ones
    pub deterministic_ids: bool,

    /// Caller-supplied request id; a UUID v4 is generated when absent
    pub request_id: Option<String>,

    /// Media parts larger than this are treated as missing
    pub max_media_bytes: Option<u64>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            coordinate_mode: CoordinateMode::Canvas,
            include_notes: true,
            deterministic_ids: false,
            request_id: None,
            max_media_bytes: None,
        }
    }
}

impl ConvertOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinate mode.
    pub fn with_coordinate_mode(mut self, mode: CoordinateMode) -> Self {
        self.coordinate_mode = mode;
        self
    }

    /// Include or drop speaker notes.
    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    /// Use sequential ids so repeated runs produce identical output.
    pub fn with_deterministic_ids(mut self, deterministic: bool) -> Self {
        self.deterministic_ids = deterministic;
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Cap the size of embedded media parts.
    pub fn with_max_media_bytes(mut self, max: u64) -> Self {
        self.max_media_bytes = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.coordinate_mode, CoordinateMode::Canvas);
        assert!(opts.include_notes);
        assert!(!opts.deterministic_ids);
        assert!(opts.request_id.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let opts = ConvertOptions::new()
            .with_coordinate_mode(CoordinateMode::Fixed)
            .with_notes(false)
            .with_request_id("req-1")
            .with_max_media_bytes(1024);

        assert_eq!(opts.coordinate_mode, CoordinateMode::Fixed);
        assert!(!opts.include_notes);
        assert_eq!(opts.request_id.as_deref(), Some("req-1"));
        assert_eq!(opts.max_media_bytes, Some(1024));
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: ConvertOptions =
            serde_json::from_str(r#"{"coordinateMode":"fixed","deterministicIds":true}"#).unwrap();
        assert_eq!(opts.coordinate_mode, CoordinateMode::Fixed);
        assert!(opts.deterministic_ids);
        assert!(opts.include_notes);
    }
}
