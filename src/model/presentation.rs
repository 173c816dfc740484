//! The output document.

use super::element::{Gradient, PptElement};
use serde::{Deserialize, Serialize};

/// Slide background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SlideBackground {
    Solid {
        color: String,
    },
    Gradient {
        gradient: Gradient,
    },
    Image {
        /// Data URI
        src: String,
        /// CSS background size (`cover`)
        size: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub elements: Vec<PptElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<SlideBackground>,
    /// Speaker notes as plain text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remark: String,
}

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationMetadata {
    /// Always `pptx`
    pub source_format: String,
    /// RFC 3339 UTC timestamp
    pub converted_at: String,
    /// Converter version
    pub version: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub slides: Vec<Slide>,
    pub size: CanvasSize,
    pub metadata: PresentationMetadata,
    /// One line per warning category
    pub warnings: Vec<String>,
}

impl Presentation {
    /// Total number of converted elements.
    pub fn element_count(&self) -> usize {
        self.slides.iter().map(|s| s.elements.len()).sum()
    }
}
