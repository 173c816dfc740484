//! Source element model: what the slide parser extracts from `p:spTree`.
//!
//! Geometry is still in EMU and colors are still [`ColorSpec`] references;
//! converters resolve both against the conversion context.

use super::text::TextBody;
use crate::charts::ChartData;
use crate::color::ColorSpec;
use crate::shapes::CustomGeometry;

/// Position, size and orientation of an element, in EMU and degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryTransform {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub rotation: f64,
    pub flip_h: bool,
    pub flip_v: bool,
}

/// Which relationships part a relationship id belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RelScope {
    #[default]
    Slide,
    Layout,
    Master,
    /// Theme part (images inside theme fill styles)
    Theme,
}

/// A reference to a related part, qualified by the scope that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef {
    pub scope: RelScope,
    pub rel_id: String,
}

impl MediaRef {
    pub fn new(scope: RelScope, rel_id: impl Into<String>) -> Self {
        Self {
            scope,
            rel_id: rel_id.into(),
        }
    }

    /// Media map key. Slide-scope ids use `slideIndex_rId`; other scopes
    /// carry their name so they cannot collide with slide ids.
    pub fn key(&self, slide_index: usize) -> String {
        match self.scope {
            RelScope::Slide => format!("{}_{}", slide_index, self.rel_id),
            RelScope::Layout => format!("{}_layout_{}", slide_index, self.rel_id),
            RelScope::Master => format!("{}_master_{}", slide_index, self.rel_id),
            RelScope::Theme => format!("{}_theme_{}", slide_index, self.rel_id),
        }
    }
}

/// Placeholder reference from `p:nvPr/p:ph`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderRef {
    /// `type`; absent means `body`
    pub kind: Option<String>,
    pub idx: Option<u32>,
}

impl PlaceholderRef {
    pub fn kind_or_body(&self) -> &str {
        self.kind.as_deref().unwrap_or("body")
    }

    pub fn is_title(&self) -> bool {
        matches!(self.kind.as_deref(), Some("title") | Some("ctrTitle"))
    }
}

/// Fields shared by every source element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementBase {
    /// `cNvPr@id`
    pub id: String,
    /// `cNvPr@name`
    pub name: String,
    pub transform: GeometryTransform,
    /// Construct the element was built from when it is not a plain drawing
    /// (`smartart`, `activex`, `ole`, ...)
    pub subtype: Option<String>,
    pub placeholder: Option<PlaceholderRef>,
    pub scope: RelScope,
}

/// Gradient direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Angle in degrees
    Linear(f64),
    Radial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position in percent
    pub position: f64,
    pub color: ColorSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

/// Fill of a shape, line or background.
#[derive(Debug, Clone, PartialEq)]
pub enum FillSpec {
    /// `a:noFill`
    None,
    Solid(ColorSpec),
    Gradient(GradientSpec),
    /// `a:blipFill`
    Image(MediaRef),
    /// Theme style reference (`p:style/a:fillRef`, `p:bg/p:bgRef`)
    StyleRef {
        idx: u32,
        color: Option<ColorSpec>,
    },
}

/// Dash style of an outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl DashStyle {
    pub fn from_ooxml(value: &str) -> Self {
        match value {
            "solid" => DashStyle::Solid,
            "dot" | "sysDot" => DashStyle::Dotted,
            _ => DashStyle::Dashed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DashStyle::Solid => "solid",
            DashStyle::Dashed => "dashed",
            DashStyle::Dotted => "dotted",
        }
    }
}

/// `a:ln`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineSpec {
    /// Width in EMU
    pub width: Option<i64>,
    pub fill: Option<FillSpec>,
    pub dash: DashStyle,
    /// Arrow head types (`headEnd`/`tailEnd`)
    pub head: Option<String>,
    pub tail: Option<String>,
}

impl OutlineSpec {
    /// Whether the outline is explicitly hidden.
    pub fn is_hidden(&self) -> bool {
        matches!(self.fill, Some(FillSpec::None))
    }
}

/// Geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Preset {
        name: String,
        /// First adjustment value (`adj` / `adj1`), 0..100000
        adjustment: Option<f64>,
    },
    Custom(CustomGeometry),
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::Preset {
            name: "rect".to_string(),
            adjustment: None,
        }
    }
}

impl Geometry {
    pub fn preset_name(&self) -> Option<&str> {
        match self {
            Geometry::Preset { name, .. } => Some(name),
            Geometry::Custom(_) => None,
        }
    }
}

/// A text box or text-only placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSource {
    pub base: ElementBase,
    pub body: TextBody,
    pub fill: Option<FillSpec>,
    pub outline: Option<OutlineSpec>,
}

/// A drawn shape, optionally carrying text.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSource {
    pub base: ElementBase,
    pub geometry: Geometry,
    pub fill: Option<FillSpec>,
    pub outline: Option<OutlineSpec>,
    pub text: Option<TextBody>,
}

/// Crop percentages from `a:srcRect` (left, top, right, bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropRect {
    pub fn is_empty(&self) -> bool {
        *self == CropRect::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    pub base: ElementBase,
    pub media: MediaRef,
    pub crop: Option<CropRect>,
    /// Clip geometry when not a plain rectangle
    pub geometry: Option<Geometry>,
    pub outline: Option<OutlineSpec>,
}

/// Video or audio payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub base: ElementBase,
    /// Embedded media part; `None` when only linked
    pub media: Option<MediaRef>,
    /// External URL of linked media
    pub link: Option<String>,
    /// Poster frame picture
    pub poster: Option<MediaRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSource {
    pub base: ElementBase,
    /// Structured data from the chart part; `None` if it could not be read
    pub data: Option<ChartData>,
}

/// One `a:tc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCellSource {
    pub body: TextBody,
    pub grid_span: u32,
    pub row_span: u32,
    /// Continuation of a horizontal or vertical merge
    pub merged: bool,
    pub fill: Option<FillSpec>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRowSource {
    /// Height in EMU
    pub height: i64,
    pub cells: Vec<TableCellSource>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    pub base: ElementBase,
    /// Grid column widths in EMU
    pub columns: Vec<i64>,
    pub rows: Vec<TableRowSource>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatexSource {
    pub base: ElementBase,
    pub latex: String,
    pub color: Option<ColorSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSource {
    pub base: ElementBase,
    pub outline: OutlineSpec,
    /// Connector or line preset name
    pub preset: String,
}

/// An element extracted from a slide, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PptxElement {
    Text(TextSource),
    Shape(ShapeSource),
    Image(ImageSource),
    Video(MediaSource),
    Audio(MediaSource),
    Chart(ChartSource),
    Table(TableSource),
    Latex(LatexSource),
    Line(LineSource),
}

impl PptxElement {
    pub fn base(&self) -> &ElementBase {
        match self {
            PptxElement::Text(e) => &e.base,
            PptxElement::Shape(e) => &e.base,
            PptxElement::Image(e) => &e.base,
            PptxElement::Video(e) | PptxElement::Audio(e) => &e.base,
            PptxElement::Chart(e) => &e.base,
            PptxElement::Table(e) => &e.base,
            PptxElement::Latex(e) => &e.base,
            PptxElement::Line(e) => &e.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ElementBase {
        match self {
            PptxElement::Text(e) => &mut e.base,
            PptxElement::Shape(e) => &mut e.base,
            PptxElement::Image(e) => &mut e.base,
            PptxElement::Video(e) | PptxElement::Audio(e) => &mut e.base,
            PptxElement::Chart(e) => &mut e.base,
            PptxElement::Table(e) => &mut e.base,
            PptxElement::Latex(e) => &mut e.base,
            PptxElement::Line(e) => &mut e.base,
        }
    }

    /// Discriminant name, matching the output `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            PptxElement::Text(_) => "text",
            PptxElement::Shape(_) => "shape",
            PptxElement::Image(_) => "image",
            PptxElement::Video(_) => "video",
            PptxElement::Audio(_) => "audio",
            PptxElement::Chart(_) => "chart",
            PptxElement::Table(_) => "table",
            PptxElement::Latex(_) => "latex",
            PptxElement::Line(_) => "line",
        }
    }

    /// Every media reference the element needs resolved.
    pub fn media_refs(&self) -> Vec<&MediaRef> {
        fn fill_ref(fill: &Option<FillSpec>) -> Option<&MediaRef> {
            match fill {
                Some(FillSpec::Image(media)) => Some(media),
                _ => None,
            }
        }

        match self {
            PptxElement::Image(e) => vec![&e.media],
            PptxElement::Video(e) | PptxElement::Audio(e) => {
                e.media.iter().chain(e.poster.iter()).collect()
            }
            PptxElement::Shape(e) => fill_ref(&e.fill).into_iter().collect(),
            PptxElement::Text(e) => fill_ref(&e.fill).into_iter().collect(),
            _ => Vec::new(),
        }
    }
}
