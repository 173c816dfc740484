//! Presentation serializer.

use crate::error::Result;
use crate::model::Presentation;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    #[default]
    Compact,
    /// Pretty-printed with 2-space indentation
    Pretty,
}

/// Serialize a presentation.
pub fn to_json(presentation: &Presentation, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(presentation)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(presentation)?,
    };
    Ok(json)
}

/// Serialize into a JSON value, for hosts that embed the document.
pub fn to_value(presentation: &Presentation) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(presentation)?)
}

/// Parse a previously serialized presentation.
pub fn from_json(json: &str) -> Result<Presentation> {
    Ok(serde_json::from_str(json)?)
}
