//! Output element model consumed by the slide editor.
//!
//! Coordinates are pixels, colors are CSS strings, and media is inlined as
//! data URIs. Nothing here refers back to the package.

use serde::{Deserialize, Serialize};

/// Box shared by every element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementFrame {
    pub id: String,
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
    pub rotate: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub width: f64,
    pub color: String,
    /// `solid`, `dashed` or `dotted`
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStopOut {
    /// Percent
    pub pos: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    /// `linear` or `radial`
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: Vec<GradientStopOut>,
    pub rotate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    /// HTML fragment
    pub content: String,
    pub default_font_name: String,
    pub default_color: String,
    pub vertical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    /// `top`, `middle` or `bottom`
    pub valign: String,
}

/// Text placed inside a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeText {
    pub content: String,
    pub default_font_name: String,
    pub default_color: String,
    pub align: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    pub view_box: [f64; 2],
    pub path: String,
    pub fixed_ratio: bool,
    /// CSS color; empty for no fill
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Image fill as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    pub flip_h: bool,
    pub flip_v: bool,
    /// Preset name, or `custom`
    pub shape_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ShapeText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageClip {
    /// Clip shape preset (`rect`, `ellipse`, ...)
    pub shape: String,
    /// `[[left, top], [right, bottom]]` in percent of the source image
    pub range: [[f64; 2]; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    /// Data URI, or empty when the resource is missing
    pub src: String,
    pub fixed_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ImageClip>,
    pub flip_h: bool,
    pub flip_v: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    pub src: String,
    pub fixed_ratio: bool,
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Icon color
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub legends: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    pub chart_type: String,
    pub data: ChartPayload,
    pub theme_colors: Vec<String>,
    pub stack: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    pub bold: bool,
    pub em: bool,
    pub underline: bool,
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub id: String,
    pub colspan: u32,
    pub rowspan: u32,
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    /// Column widths as fractions of the table width
    pub col_widths: Vec<f64>,
    /// Row heights in pixels
    pub row_heights: Vec<i64>,
    pub data: Vec<Vec<TableCell>>,
    pub outline: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatexElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    pub latex: String,
    /// Rendered outline path; filled in by the editor
    pub path: String,
    pub color: String,
    pub stroke_width: f64,
    pub view_box: [f64; 2],
    pub fixed_ratio: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineElement {
    #[serde(flatten)]
    pub frame: ElementFrame,
    /// Endpoints relative to `left`/`top`
    pub start: [i64; 2],
    pub end: [i64; 2],
    pub style: String,
    pub color: String,
    /// Markers at start and end (`""`, `arrow`, `dot`)
    pub points: [String; 2],
    pub width: f64,
}

/// A converted element, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PptElement {
    Text(TextElement),
    Shape(ShapeElement),
    Image(ImageElement),
    Video(VideoElement),
    Audio(AudioElement),
    Chart(ChartElement),
    Table(TableElement),
    Latex(LatexElement),
    Line(LineElement),
}

impl PptElement {
    pub fn frame(&self) -> &ElementFrame {
        match self {
            PptElement::Text(e) => &e.frame,
            PptElement::Shape(e) => &e.frame,
            PptElement::Image(e) => &e.frame,
            PptElement::Video(e) => &e.frame,
            PptElement::Audio(e) => &e.frame,
            PptElement::Chart(e) => &e.frame,
            PptElement::Table(e) => &e.frame,
            PptElement::Latex(e) => &e.frame,
            PptElement::Line(e) => &e.frame,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PptElement::Text(_) => "text",
            PptElement::Shape(_) => "shape",
            PptElement::Image(_) => "image",
            PptElement::Video(_) => "video",
            PptElement::Audio(_) => "audio",
            PptElement::Chart(_) => "chart",
            PptElement::Table(_) => "table",
            PptElement::Latex(_) => "latex",
            PptElement::Line(_) => "line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serializes_with_type_tag() {
        let element = PptElement::Image(ImageElement {
            frame: ElementFrame {
                id: "img1".to_string(),
                left: 10,
                top: 20,
                width: 100,
                height: 50,
                rotate: 0.0,
                name: String::new(),
            },
            src: String::new(),
            fixed_ratio: true,
            clip: None,
            flip_h: false,
            flip_v: false,
            outline: None,
        });

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["left"], 10);
        assert_eq!(json["src"], "");
        assert_eq!(json["fixedRatio"], true);
        assert!(json.get("clip").is_none());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_audio_loop_field_name() {
        let element = PptElement::Audio(AudioElement {
            frame: ElementFrame::default(),
            src: "data:audio/mpeg;base64,AA==".to_string(),
            fixed_ratio: true,
            autoplay: false,
            looped: true,
            color: "#000000".to_string(),
        });
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "audio");
        assert_eq!(json["loop"], true);
    }
}
