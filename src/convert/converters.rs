//! Built-in element converters.
//!
//! Each converter reads a source element and the conversion context and
//! produces output elements. Inputs are never modified; the context only
//! gains ids and warnings.

use super::context::ConversionContext;
use crate::charts::{ChartData, ChartKind, ChartSeries};
use crate::color::{ColorSpec, ResolvedColor};
use crate::error::{Error, Result};
use crate::model::{
    codes, AudioElement, CellStyle, ChartElement, ChartPayload, ElementBase, ElementFrame, FillSpec,
    Geometry, Gradient, GradientKind, GradientSpec, GradientStopOut, ImageClip, ImageElement,
    LatexElement, LineElement, MediaSource, Outline, OutlineSpec, PptElement, PptxElement,
    RelScope, ShapeElement, ShapeText, SlideBackground, TableCell, TableElement, TextBody,
    TextElement, VideoElement,
};
use crate::pptx::fill::parse_fill;
use crate::render::html::{body_to_html, HtmlContext};
use crate::shapes::{generate_shape_path, render_custom_paths};

const DEFAULT_FONT: &str = "Calibri";
const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Outline width used when a line has a color but no width (0.75pt)
const DEFAULT_LINE_EMU: i64 = 9525;

/// A fill with every reference resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedFill {
    None,
    Color(String),
    Gradient(Gradient),
    /// Data URI
    Image(String),
}

impl ResolvedFill {
    /// Flat color; a gradient reports its first stop.
    pub fn color(&self) -> Option<&str> {
        match self {
            ResolvedFill::Color(c) => Some(c),
            ResolvedFill::Gradient(g) => g.colors.first().map(|s| s.color.as_str()),
            _ => None,
        }
    }
}

/// Resolve a fill. `placeholder` substitutes `phClr` inside theme styles.
pub fn resolve_fill(
    fill: &FillSpec,
    ctx: &mut ConversionContext<'_>,
    placeholder: Option<&ResolvedColor>,
) -> ResolvedFill {
    match fill {
        FillSpec::None => ResolvedFill::None,
        FillSpec::Solid(spec) => {
            let color = ctx.colors.resolve(spec, placeholder);
            if color.is_empty() {
                ResolvedFill::None
            } else {
                ResolvedFill::Color(color.to_css())
            }
        }
        FillSpec::Gradient(gradient) => ResolvedFill::Gradient(resolve_gradient(gradient, ctx, placeholder)),
        FillSpec::Image(media) => match ctx.media_uri(media) {
            Some(uri) => ResolvedFill::Image(uri),
            None => ResolvedFill::None,
        },
        FillSpec::StyleRef { idx, color } => {
            let ref_color = color
                .as_ref()
                .map(|c| ctx.colors.resolve(c, placeholder))
                .unwrap_or_default();
            let style = ctx
                .theme
                .and_then(|t| t.fill_for_index(*idx))
                .and_then(|node| parse_fill(node, RelScope::Theme));
            match style {
                Some(spec) if !matches!(spec, FillSpec::StyleRef { .. }) => {
                    resolve_fill(&spec, ctx, Some(&ref_color))
                }
                _ => {
                    let color = ctx.colors.resolve_fill_ref(*idx as usize, color.as_ref());
                    if color.is_empty() {
                        ResolvedFill::None
                    } else {
                        ResolvedFill::Color(color.to_css())
                    }
                }
            }
        }
    }
}

fn resolve_gradient(
    gradient: &GradientSpec,
    ctx: &ConversionContext<'_>,
    placeholder: Option<&ResolvedColor>,
) -> Gradient {
    let (kind, rotate) = match gradient.kind {
        GradientKind::Linear(angle) => ("linear", angle),
        GradientKind::Radial => ("radial", 0.0),
    };
    Gradient {
        kind: kind.to_string(),
        colors: gradient
            .stops
            .iter()
            .map(|stop| GradientStopOut {
                pos: stop.position,
                color: ctx
                    .colors
                    .resolve(&stop.color, placeholder)
                    .css_or(DEFAULT_TEXT_COLOR),
            })
            .collect(),
        rotate,
    }
}

/// Resolve an outline. Hidden or colorless outlines yield `None`.
pub fn resolve_outline(
    outline: Option<&OutlineSpec>,
    ctx: &mut ConversionContext<'_>,
) -> Option<Outline> {
    let outline = outline.filter(|o| !o.is_hidden())?;
    let color = outline
        .fill
        .as_ref()
        .map(|f| resolve_fill(f, ctx, None))
        .and_then(|f| f.color().map(str::to_string))?;
    Some(Outline {
        width: ctx
            .units
            .stroke_px(outline.width.unwrap_or(DEFAULT_LINE_EMU)),
        color,
        style: outline.dash.as_str().to_string(),
    })
}

fn frame(base: &ElementBase, ctx: &mut ConversionContext<'_>) -> ElementFrame {
    let t = &base.transform;
    ElementFrame {
        id: ctx.next_id("el"),
        left: ctx.units.x(t.x),
        top: ctx.units.y(t.y),
        width: ctx.units.x(t.width),
        height: ctx.units.y(t.height),
        rotate: t.rotation,
        name: base.name.clone(),
    }
}

/// HTML content plus the element-level font and color defaults.
fn text_content(body: &TextBody, ctx: &ConversionContext<'_>) -> (String, String, String) {
    let html = body_to_html(
        body,
        &HtmlContext {
            colors: &ctx.colors,
            units: &ctx.units,
        },
    );
    let first = body.first_run_props();
    let font = first
        .and_then(|p| p.font_family.clone())
        .or_else(|| ctx.body_font.clone())
        .unwrap_or_else(|| DEFAULT_FONT.to_string());
    let color = ctx.css_color(first.and_then(|p| p.color.as_ref()), DEFAULT_TEXT_COLOR);
    (html, font, color)
}

fn mismatch(expected: &str, element: &PptxElement) -> Error {
    Error::element(
        element.kind(),
        format!("{} converter received a {} element", expected, element.kind()),
    )
}

pub fn convert_text(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Text(text) = element else {
        return Err(mismatch("text", element));
    };

    let frame = frame(&text.base, ctx);
    let (content, default_font_name, default_color) = text_content(&text.body, ctx);
    let fill = text
        .fill
        .as_ref()
        .map(|f| resolve_fill(f, ctx, None))
        .and_then(|f| f.color().map(str::to_string));
    let outline = resolve_outline(text.outline.as_ref(), ctx);

    Ok(vec![PptElement::Text(TextElement {
        frame,
        content,
        default_font_name,
        default_color,
        vertical: text.body.vertical,
        fill,
        outline,
        valign: text.body.anchor.as_str().to_string(),
    })])
}

pub fn convert_shape(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Shape(shape) = element else {
        return Err(mismatch("shape", element));
    };

    let frame = frame(&shape.base, ctx);
    let (w, h) = (frame.width as f64, frame.height as f64);
    let (path, view_box, shape_name) = match &shape.geometry {
        Geometry::Preset { name, adjustment } => {
            let generated = generate_shape_path(name, w, h, *adjustment);
            (generated.path, generated.view_box, name.clone())
        }
        Geometry::Custom(geometry) => {
            let t = &shape.base.transform;
            let rendered = render_custom_paths(geometry, w, h, (t.width as f64, t.height as f64));
            if rendered.unresolved > 0 {
                ctx.warnings.add(
                    codes::GEOMETRY_UNRESOLVED,
                    "Custom geometry guide could not be resolved",
                    rendered.unresolved,
                );
            }
            (rendered.path, [w, h], "custom".to_string())
        }
    };

    let (mut fill, mut gradient, mut pattern) = (String::new(), None, None);
    match shape.fill.as_ref().map(|f| resolve_fill(f, ctx, None)) {
        Some(ResolvedFill::Color(c)) => fill = c,
        Some(ResolvedFill::Gradient(g)) => {
            fill = g.colors.first().map(|s| s.color.clone()).unwrap_or_default();
            gradient = Some(g);
        }
        Some(ResolvedFill::Image(uri)) => pattern = Some(uri),
        Some(ResolvedFill::None) | None => {}
    }
    let outline = resolve_outline(shape.outline.as_ref(), ctx);

    let text = shape.text.as_ref().filter(|b| !b.is_empty()).map(|body| {
        let (content, default_font_name, default_color) = text_content(body, ctx);
        ShapeText {
            content,
            default_font_name,
            default_color,
            align: body.anchor.as_str().to_string(),
        }
    });

    let t = &shape.base.transform;
    Ok(vec![PptElement::Shape(ShapeElement {
        frame,
        view_box,
        path,
        fixed_ratio: false,
        fill,
        gradient,
        pattern,
        outline,
        flip_h: t.flip_h,
        flip_v: t.flip_v,
        shape_name,
        text,
    })])
}

pub fn convert_image(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Image(image) = element else {
        return Err(mismatch("image", element));
    };

    let frame = frame(&image.base, ctx);
    // a missing part keeps the element with an empty source
    let src = ctx.media_uri(&image.media).unwrap_or_default();

    let shape = image
        .geometry
        .as_ref()
        .and_then(Geometry::preset_name)
        .unwrap_or("rect");
    let crop = image.crop.unwrap_or_default();
    let clip = (!crop.is_empty() || shape != "rect").then(|| ImageClip {
        shape: shape.to_string(),
        range: [
            [crop.left, crop.top],
            [100.0 - crop.right, 100.0 - crop.bottom],
        ],
    });
    let outline = resolve_outline(image.outline.as_ref(), ctx);

    let t = &image.base.transform;
    Ok(vec![PptElement::Image(ImageElement {
        frame,
        src,
        fixed_ratio: true,
        clip,
        flip_h: t.flip_h,
        flip_v: t.flip_v,
        outline,
    })])
}

/// Embedded part as a data URI, else the external link, else empty.
fn media_source(media: &MediaSource, ctx: &mut ConversionContext<'_>) -> String {
    if let Some(embedded) = &media.media {
        if let Some(uri) = ctx.media_uri(embedded) {
            return uri;
        }
    }
    match &media.link {
        Some(link) => link.clone(),
        None => {
            if media.media.is_none() {
                ctx.warnings
                    .record(codes::MISSING_RESOURCE, "Referenced media part not found");
            }
            String::new()
        }
    }
}

pub fn convert_video(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Video(video) = element else {
        return Err(mismatch("video", element));
    };

    let frame = frame(&video.base, ctx);
    let src = media_source(video, ctx);
    let poster = video.poster.as_ref().and_then(|p| ctx.media_uri(p));

    Ok(vec![PptElement::Video(VideoElement {
        frame,
        src,
        poster,
        autoplay: false,
    })])
}

pub fn convert_audio(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Audio(audio) = element else {
        return Err(mismatch("audio", element));
    };

    let frame = frame(&audio.base, ctx);
    let src = media_source(audio, ctx);
    let color = ctx.css_color(Some(&ColorSpec::scheme("accent1")), DEFAULT_TEXT_COLOR);

    Ok(vec![PptElement::Audio(AudioElement {
        frame,
        src,
        fixed_ratio: true,
        autoplay: false,
        looped: false,
        color,
    })])
}

/// Sample data shown when a chart has no readable series.
fn placeholder_chart(kind: ChartKind) -> ChartData {
    let mut data = ChartData::new(kind);
    data.categories = vec![
        "Category 1".to_string(),
        "Category 2".to_string(),
        "Category 3".to_string(),
    ];
    data.series = vec![ChartSeries {
        name: "Series 1".to_string(),
        values: vec![4.3, 2.5, 3.5],
        color: None,
    }];
    data
}

pub fn convert_chart(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Chart(chart) = element else {
        return Err(mismatch("chart", element));
    };

    let frame = frame(&chart.base, ctx);
    let data = match &chart.data {
        Some(data) if !data.is_empty() => data.clone(),
        other => {
            let kind = other.as_ref().map_or(ChartKind::Column, |d| d.kind);
            let mut placeholder = placeholder_chart(kind);
            placeholder.title = other.as_ref().and_then(|d| d.title.clone());
            placeholder
        }
    };

    let longest = data.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let labels = if data.categories.is_empty() {
        (1..=longest).map(|i| i.to_string()).collect()
    } else {
        data.categories.clone()
    };

    let accents = ctx.colors.scheme.accents();
    let theme_colors = data
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let accent = accents[i % accents.len()].as_str();
            let fallback = if accent.is_empty() { DEFAULT_TEXT_COLOR } else { accent };
            ctx.css_color(s.color.as_ref(), fallback)
        })
        .collect();

    Ok(vec![PptElement::Chart(ChartElement {
        frame,
        chart_type: data.kind.as_str().to_string(),
        data: ChartPayload {
            labels,
            legends: data.series.iter().map(|s| s.name.clone()).collect(),
            series: data.series.iter().map(|s| s.values.clone()).collect(),
        },
        theme_colors,
        stack: data.stacked,
        title: data.title.clone(),
    })])
}

pub fn convert_table(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Table(table) = element else {
        return Err(mismatch("table", element));
    };
    if table.columns.is_empty() {
        return Err(Error::element("table", "table has no grid columns"));
    }

    let frame = frame(&table.base, ctx);
    let total: i64 = table.columns.iter().sum();
    let col_widths = table
        .columns
        .iter()
        .map(|w| {
            if total > 0 {
                (*w as f64 / total as f64 * 10_000.0).round() / 10_000.0
            } else {
                1.0 / table.columns.len() as f64
            }
        })
        .collect();
    let row_heights = table.rows.iter().map(|r| ctx.units.y(r.height)).collect();

    let mut data = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut cells = Vec::with_capacity(row.cells.len());
        for cell in row.cells.iter().filter(|c| !c.merged) {
            let backcolor = cell
                .fill
                .as_ref()
                .map(|f| resolve_fill(f, ctx, None))
                .and_then(|f| f.color().map(str::to_string));
            let style = cell_style(&cell.body, backcolor, ctx);
            cells.push(TableCell {
                id: ctx.next_id("cell"),
                colspan: cell.grid_span.max(1),
                rowspan: cell.row_span.max(1),
                text: cell.body.plain_text(),
                style,
            });
        }
        data.push(cells);
    }

    Ok(vec![PptElement::Table(TableElement {
        frame,
        col_widths,
        row_heights,
        data,
        outline: Outline {
            width: 1.0,
            color: DEFAULT_TEXT_COLOR.to_string(),
            style: "solid".to_string(),
        },
    })])
}

fn cell_style(body: &TextBody, backcolor: Option<String>, ctx: &ConversionContext<'_>) -> CellStyle {
    let props = body.first_run_props().cloned().unwrap_or_default();
    let color = props
        .color
        .as_ref()
        .map(|c| ctx.resolve(c))
        .filter(|c| !c.is_empty())
        .map(|c| c.to_css());
    CellStyle {
        bold: props.bold.unwrap_or(false),
        em: props.italic.unwrap_or(false),
        underline: props.underline.unwrap_or(false),
        strikethrough: props.strike.unwrap_or(false),
        color,
        backcolor,
        fontsize: props
            .size
            .map(|pt| format!("{}px", ctx.units.points_to_px(pt))),
        fontname: props.font_family,
        align: body
            .paragraphs
            .first()
            .and_then(|p| p.props.align)
            .map(|a| a.as_css().to_string()),
    }
}

pub fn convert_latex(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Latex(latex) = element else {
        return Err(mismatch("latex", element));
    };

    let frame = frame(&latex.base, ctx);
    let color = ctx.css_color(latex.color.as_ref(), DEFAULT_TEXT_COLOR);
    let view_box = [frame.width as f64, frame.height as f64];

    Ok(vec![PptElement::Latex(LatexElement {
        frame,
        latex: latex.latex.clone(),
        path: String::new(),
        color,
        stroke_width: 2.0,
        view_box,
        fixed_ratio: true,
    })])
}

/// Marker for an arrowhead type.
fn line_marker(end: Option<&str>) -> String {
    match end {
        Some("triangle" | "arrow" | "stealth") => "arrow",
        Some("oval" | "diamond") => "dot",
        _ => "",
    }
    .to_string()
}

pub fn convert_line(element: &PptxElement, ctx: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
    let PptxElement::Line(line) = element else {
        return Err(mismatch("line", element));
    };

    let frame = frame(&line.base, ctx);
    let (w, h) = (frame.width, frame.height);
    let t = &line.base.transform;
    let (start, end) = match (t.flip_h, t.flip_v) {
        (false, false) => ([0, 0], [w, h]),
        (true, false) => ([w, 0], [0, h]),
        (false, true) => ([0, h], [w, 0]),
        (true, true) => ([w, h], [0, 0]),
    };

    let outline = &line.outline;
    let color = outline
        .fill
        .as_ref()
        .map(|f| resolve_fill(f, ctx, None))
        .and_then(|f| f.color().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string());

    Ok(vec![PptElement::Line(LineElement {
        frame,
        start,
        end,
        style: outline.dash.as_str().to_string(),
        color,
        points: [
            line_marker(outline.head.as_deref()),
            line_marker(outline.tail.as_deref()),
        ],
        width: ctx
            .units
            .stroke_px(outline.width.unwrap_or(DEFAULT_LINE_EMU)),
    })])
}

/// Slide background from a resolved fill.
pub fn convert_background(fill: &FillSpec, ctx: &mut ConversionContext<'_>) -> Option<SlideBackground> {
    match resolve_fill(fill, ctx, None) {
        ResolvedFill::None => None,
        ResolvedFill::Color(color) => Some(SlideBackground::Solid { color }),
        ResolvedFill::Gradient(gradient) => Some(SlideBackground::Gradient { gradient }),
        ResolvedFill::Image(src) => Some(SlideBackground::Image {
            src,
            size: "cover".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorMapChain, ColorScope, ThemeColorScheme};
    use crate::model::{
        ChartSource, CropRect, DashStyle, GeometryTransform, ImageSource, LineSource,
        MediaEntry, MediaRef, Paragraph, RunProps, ShapeSource, TableCellSource, TableRowSource,
        TableSource, TextRun, TextSource,
    };
    use crate::pptx::Theme;
    use crate::units::UnitConverter;
    use crate::xml::XmlNode;

    fn context() -> ConversionContext<'static> {
        let mut ctx = ConversionContext::new("req", UnitConverter::default(), true);
        let mut scheme = ThemeColorScheme::new();
        for (slot, hex) in [
            ("dk1", "000000"),
            ("lt1", "FFFFFF"),
            ("accent1", "4472C4"),
            ("accent2", "ED7D31"),
        ] {
            scheme.insert(slot, hex);
        }
        ctx.colors = ColorScope::new(scheme, ColorMapChain::default());
        ctx
    }

    fn base(x: i64, y: i64, w: i64, h: i64) -> ElementBase {
        ElementBase {
            transform: GeometryTransform {
                x,
                y,
                width: w,
                height: h,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn body(text: &str) -> TextBody {
        TextBody {
            paragraphs: vec![Paragraph {
                runs: vec![TextRun::text(
                    text,
                    RunProps {
                        bold: Some(true),
                        color: Some(ColorSpec::scheme("accent2")),
                        ..Default::default()
                    },
                )],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_shape_geometry_and_fill() {
        let mut ctx = context();
        let shape = PptxElement::Shape(ShapeSource {
            base: base(0, 0, 952_500, 476_250),
            geometry: Geometry::default(),
            fill: Some(FillSpec::Solid(ColorSpec::scheme("accent1"))),
            outline: Some(OutlineSpec {
                width: Some(12_700),
                fill: Some(FillSpec::Solid(ColorSpec::rgb("FF0000"))),
                ..Default::default()
            }),
            text: Some(body("Hello")),
        });

        let out = convert_shape(&shape, &mut ctx).unwrap();
        let PptElement::Shape(s) = &out[0] else {
            panic!("expected shape");
        };
        assert_eq!((s.frame.width, s.frame.height), (100, 50));
        assert_eq!(s.path, "M0,0 L100,0 L100,50 L0,50 Z");
        assert_eq!(s.fill, "#4472C4");
        assert_eq!(s.outline.as_ref().unwrap().color, "#FF0000");
        let text = s.text.as_ref().unwrap();
        assert!(text.content.contains("Hello"));
        assert_eq!(text.default_color, "#ED7D31");
        assert_eq!(s.frame.id, "el-1");
    }

    #[test]
    fn test_custom_geometry_guides() {
        let mut ctx = context();
        let geom = XmlNode::parse(
            r#"<a:custGeom><a:pathLst><a:path>
                <a:moveTo><a:pt x="l" y="t"/></a:moveTo>
                <a:lnTo><a:pt x="r" y="vc"/></a:lnTo>
                <a:lnTo><a:pt x="wd2" y="b"/></a:lnTo>
                <a:lnTo><a:pt x="adjX" y="b"/></a:lnTo>
                <a:close/>
            </a:path></a:pathLst></a:custGeom>"#,
        )
        .unwrap();
        let shape = PptxElement::Shape(ShapeSource {
            base: base(0, 0, 952_500, 476_250),
            geometry: Geometry::Custom(crate::shapes::parse_custom_geometry(&geom)),
            fill: None,
            outline: None,
            text: None,
        });

        let out = convert_shape(&shape, &mut ctx).unwrap();
        let PptElement::Shape(s) = &out[0] else {
            panic!("expected shape");
        };
        assert_eq!(s.path, "M0,0 L100,25 L50,50 L0,50 Z");
        assert_eq!(s.shape_name, "custom");
        let warning = ctx.warnings.get(codes::GEOMETRY_UNRESOLVED).unwrap();
        assert_eq!(warning.count, 1);
    }

    #[test]
    fn test_style_ref_uses_theme_fill_with_placeholder_color() {
        let theme_xml = r#"<a:theme xmlns:a="a"><a:themeElements><a:fmtScheme>
            <a:fillStyleLst>
              <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
              <a:solidFill><a:schemeClr val="phClr"><a:shade val="50000"/></a:schemeClr></a:solidFill>
            </a:fillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;
        let theme = Theme::from_node(&XmlNode::parse(theme_xml).unwrap());
        let mut ctx = context();
        ctx.theme = Some(Box::leak(Box::new(theme)));

        let fill = FillSpec::StyleRef {
            idx: 1,
            color: Some(ColorSpec::rgb("808080")),
        };
        assert_eq!(
            resolve_fill(&fill, &mut ctx, None),
            ResolvedFill::Color("#808080".to_string())
        );

        let none = FillSpec::StyleRef {
            idx: 0,
            color: Some(ColorSpec::scheme("accent1")),
        };
        assert_eq!(resolve_fill(&none, &mut ctx, None), ResolvedFill::None);
    }

    #[test]
    fn test_missing_image_keeps_element_with_empty_src() {
        let mut ctx = context();
        let image = PptxElement::Image(ImageSource {
            base: base(0, 0, 95_250, 95_250),
            media: MediaRef::new(RelScope::Slide, "rId9"),
            crop: None,
            geometry: None,
            outline: None,
        });

        let out = convert_image(&image, &mut ctx).unwrap();
        let PptElement::Image(img) = &out[0] else {
            panic!("expected image");
        };
        assert_eq!(img.src, "");
        assert!(img.clip.is_none());
        assert_eq!(ctx.warnings.get(codes::MISSING_RESOURCE).unwrap().count, 1);
    }

    #[test]
    fn test_image_data_uri_and_crop() {
        let mut ctx = context();
        let media = MediaRef::new(RelScope::Slide, "rId2");
        ctx.insert_media(&media, MediaEntry::from_bytes("image1.png", b"abc"));
        let image = PptxElement::Image(ImageSource {
            base: base(0, 0, 95_250, 95_250),
            media,
            crop: Some(CropRect {
                left: 10.0,
                top: 0.0,
                right: 20.0,
                bottom: 5.0,
            }),
            geometry: None,
            outline: None,
        });

        let out = convert_image(&image, &mut ctx).unwrap();
        let PptElement::Image(img) = &out[0] else {
            panic!("expected image");
        };
        assert_eq!(img.src, "data:image/png;base64,YWJj");
        let clip = img.clip.as_ref().unwrap();
        assert_eq!(clip.shape, "rect");
        assert_eq!(clip.range, [[10.0, 0.0], [80.0, 95.0]]);
    }

    #[test]
    fn test_chart_placeholder_series() {
        let mut ctx = context();
        let chart = PptxElement::Chart(ChartSource {
            base: base(0, 0, 952_500, 952_500),
            data: Some(ChartData::new(ChartKind::Line)),
        });

        let out = convert_chart(&chart, &mut ctx).unwrap();
        let PptElement::Chart(c) = &out[0] else {
            panic!("expected chart");
        };
        assert_eq!(c.chart_type, "line");
        assert_eq!(c.data.labels.len(), 3);
        assert_eq!(c.data.series, vec![vec![4.3, 2.5, 3.5]]);
        assert_eq!(c.theme_colors, vec!["#4472C4".to_string()]);
    }

    #[test]
    fn test_chart_prefers_extracted_series() {
        let mut ctx = context();
        let mut data = ChartData::new(ChartKind::Bar);
        data.series.push(ChartSeries {
            name: "Sales".to_string(),
            values: vec![1.0, 2.0],
            color: Some(ColorSpec::rgb("00FF00")),
        });
        let chart = PptxElement::Chart(ChartSource {
            base: base(0, 0, 952_500, 952_500),
            data: Some(data),
        });

        let out = convert_chart(&chart, &mut ctx).unwrap();
        let PptElement::Chart(c) = &out[0] else {
            panic!("expected chart");
        };
        assert_eq!(c.data.labels, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(c.data.legends, vec!["Sales".to_string()]);
        assert_eq!(c.theme_colors, vec!["#00FF00".to_string()]);
    }

    #[test]
    fn test_table_merges_and_styles() {
        let mut ctx = context();
        let cell = |text: &str, span: u32, merged: bool| TableCellSource {
            body: body(text),
            grid_span: span,
            row_span: 1,
            merged,
            fill: Some(FillSpec::Solid(ColorSpec::rgb("EEEEEE"))),
        };
        let table = PptxElement::Table(TableSource {
            base: base(0, 0, 1_905_000, 381_000),
            columns: vec![952_500, 952_500],
            rows: vec![TableRowSource {
                height: 381_000,
                cells: vec![cell("A", 2, false), cell("", 1, true)],
            }],
        });

        let out = convert_table(&table, &mut ctx).unwrap();
        let PptElement::Table(t) = &out[0] else {
            panic!("expected table");
        };
        assert_eq!(t.col_widths, vec![0.5, 0.5]);
        assert_eq!(t.row_heights, vec![40]);
        assert_eq!(t.data[0].len(), 1);
        assert_eq!(t.data[0][0].colspan, 2);
        assert_eq!(t.data[0][0].text, "A");
        assert!(t.data[0][0].style.bold);
        assert_eq!(t.data[0][0].style.backcolor.as_deref(), Some("#EEEEEE"));
    }

    #[test]
    fn test_line_endpoints_and_markers() {
        let mut ctx = context();
        let mut line_base = base(0, 0, 952_500, 476_250);
        line_base.transform.flip_v = true;
        let line = PptxElement::Line(LineSource {
            base: line_base,
            outline: OutlineSpec {
                width: Some(25_400),
                fill: Some(FillSpec::Solid(ColorSpec::scheme("accent1"))),
                dash: DashStyle::Dashed,
                head: None,
                tail: Some("triangle".to_string()),
            },
            preset: "line".to_string(),
        });

        let out = convert_line(&line, &mut ctx).unwrap();
        let PptElement::Line(l) = &out[0] else {
            panic!("expected line");
        };
        assert_eq!(l.start, [0, 50]);
        assert_eq!(l.end, [100, 0]);
        assert_eq!(l.points, [String::new(), "arrow".to_string()]);
        assert_eq!(l.style, "dashed");
        assert_eq!(l.color, "#4472C4");
    }

    #[test]
    fn test_text_element() {
        let mut ctx = context();
        let text = PptxElement::Text(TextSource {
            base: base(0, 0, 952_500, 476_250),
            body: body("<b>"),
            fill: None,
            outline: Some(OutlineSpec {
                fill: Some(FillSpec::None),
                ..Default::default()
            }),
        });

        let out = convert_text(&text, &mut ctx).unwrap();
        let PptElement::Text(t) = &out[0] else {
            panic!("expected text");
        };
        assert!(t.content.contains("&lt;b&gt;"));
        assert_eq!(t.default_font_name, "Calibri");
        assert_eq!(t.valign, "top");
        assert!(t.outline.is_none());
    }

    #[test]
    fn test_wrong_kind_is_element_error() {
        let mut ctx = context();
        let line = PptxElement::Line(LineSource {
            base: ElementBase::default(),
            outline: OutlineSpec::default(),
            preset: "line".to_string(),
        });
        let err = convert_text(&line, &mut ctx).unwrap_err();
        assert_eq!(err.code(), "ELEMENT_CONVERSION");
    }
}
