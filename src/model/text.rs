//! Source text model: paragraphs and runs as read from `a:txBody`, with
//! inherited properties already merged in.

use crate::color::ColorSpec;

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
    Distributed,
}

impl TextAlign {
    /// Parse an `algn` attribute value.
    pub fn from_ooxml(value: &str) -> Option<Self> {
        match value {
            "l" => Some(TextAlign::Left),
            "ctr" => Some(TextAlign::Center),
            "r" => Some(TextAlign::Right),
            "just" | "justLow" => Some(TextAlign::Justify),
            "dist" | "thaiDist" => Some(TextAlign::Distributed),
            _ => None,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify | TextAlign::Distributed => "justify",
        }
    }
}

/// Vertical anchoring of the text inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl TextAnchor {
    pub fn from_ooxml(value: &str) -> Option<Self> {
        match value {
            "t" => Some(TextAnchor::Top),
            "ctr" => Some(TextAnchor::Middle),
            "b" => Some(TextAnchor::Bottom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Top => "top",
            TextAnchor::Middle => "middle",
            TextAnchor::Bottom => "bottom",
        }
    }
}

/// Line or paragraph spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// Multiple of the single line height (`1.0` = 100%)
    Percent(f64),
    /// Absolute points
    Points(f64),
}

/// Capitalization applied by `cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caps {
    All,
    Small,
}

/// List marker of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Bullet {
    /// `a:buChar`
    Char {
        char: String,
        color: Option<ColorSpec>,
        font: Option<String>,
    },
    /// `a:buAutoNum`
    AutoNumber { scheme: String, start_at: u32 },
}

impl Bullet {
    pub fn is_ordered(&self) -> bool {
        matches!(self, Bullet::AutoNumber { .. })
    }
}

/// Character properties. `None` means "not set at this level".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProps {
    /// Resolved typeface (theme font references already substituted)
    pub font_family: Option<String>,
    /// Size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strike: Option<bool>,
    pub color: Option<ColorSpec>,
    pub highlight: Option<ColorSpec>,
    /// Letter spacing in points
    pub spacing: Option<f64>,
    pub caps: Option<Caps>,
    /// Baseline shift in percent (positive = superscript)
    pub baseline: Option<f64>,
    /// Target URL of `a:hlinkClick`
    pub hyperlink: Option<String>,
}

impl RunProps {
    /// Fill every unset field from `parent`.
    pub fn inherit(&mut self, parent: &RunProps) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if self.$field.is_none() {
                    self.$field = parent.$field.clone();
                })*
            };
        }
        take!(
            font_family,
            size,
            bold,
            italic,
            underline,
            strike,
            color,
            highlight,
            spacing,
            caps,
            baseline,
            hyperlink
        );
    }
}

/// Paragraph properties. `None` means "not set at this level".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphProps {
    pub align: Option<TextAlign>,
    /// Left margin in EMU
    pub margin_left: Option<i64>,
    /// First line indent in EMU
    pub indent: Option<i64>,
    pub line_spacing: Option<Spacing>,
    pub space_before: Option<Spacing>,
    pub space_after: Option<Spacing>,
    /// `Some(None)` is an explicit `a:buNone`
    pub bullet: Option<Option<Bullet>>,
    /// Default run properties (`a:defRPr`)
    pub default_run: RunProps,
}

impl ParagraphProps {
    pub fn inherit(&mut self, parent: &ParagraphProps) {
        if self.align.is_none() {
            self.align = parent.align;
        }
        if self.margin_left.is_none() {
            self.margin_left = parent.margin_left;
        }
        if self.indent.is_none() {
            self.indent = parent.indent;
        }
        if self.line_spacing.is_none() {
            self.line_spacing = parent.line_spacing;
        }
        if self.space_before.is_none() {
            self.space_before = parent.space_before;
        }
        if self.space_after.is_none() {
            self.space_after = parent.space_after;
        }
        if self.bullet.is_none() {
            self.bullet = parent.bullet.clone();
        }
        self.default_run.inherit(&parent.default_run);
    }

    /// Effective bullet after inheritance.
    pub fn bullet(&self) -> Option<&Bullet> {
        self.bullet.as_ref().and_then(Option::as_ref)
    }
}

/// A piece of paragraph content.
#[derive(Debug, Clone, PartialEq)]
pub enum TextRun {
    Text { text: String, props: RunProps },
    /// `a:br`
    LineBreak { props: RunProps },
}

impl TextRun {
    pub fn text(text: impl Into<String>, props: RunProps) -> Self {
        TextRun::Text {
            text: text.into(),
            props,
        }
    }

    pub fn props(&self) -> &RunProps {
        match self {
            TextRun::Text { props, .. } | TextRun::LineBreak { props } => props,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub props: ParagraphProps,
    pub runs: Vec<TextRun>,
    /// Outline level (`lvl`, 0-based)
    pub level: u8,
    /// Properties of the paragraph end mark
    pub end_props: RunProps,
}

impl Paragraph {
    /// A paragraph with no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs
            .iter()
            .all(|r| matches!(r, TextRun::Text { text, .. } if text.is_empty()))
    }

    /// Plain text with line breaks as `\n`.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|r| match r {
                TextRun::Text { text, .. } => text.as_str(),
                TextRun::LineBreak { .. } => "\n",
            })
            .collect()
    }
}

/// Contents of an `a:txBody` / `p:txBody`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
    /// `vert="vert"`, `eaVert` and friends
    pub vertical: bool,
    pub anchor: TextAnchor,
    /// Insets in EMU: left, top, right, bottom
    pub insets: [i64; 4],
    /// `normAutofit@fontScale` as a fraction
    pub font_scale: Option<f64>,
}

/// Default body insets: 0.1in horizontal, 0.05in vertical.
pub const DEFAULT_INSETS: [i64; 4] = [91_440, 45_720, 91_440, 45_720];

impl TextBody {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.plain_text().trim().is_empty())
    }

    /// Plain text, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First run's properties, used for element-level defaults.
    pub fn first_run_props(&self) -> Option<&RunProps> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .map(TextRun::props)
            .next()
    }
}
