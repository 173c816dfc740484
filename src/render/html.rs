//! Rich text to HTML.
//!
//! Paragraphs become `<p>` blocks (or `<li>` inside a list), runs become
//! styled `<span>`s. Consecutive bulleted paragraphs of the same kind share
//! one `<ul>`/`<ol>`; a kind change or a plain paragraph closes the list.

use crate::color::ColorScope;
use crate::model::{Bullet, Caps, Paragraph, RunProps, Spacing, TextBody, TextRun};
use crate::units::UnitConverter;
use unicode_normalization::UnicodeNormalization;

/// Font size used when no level of the style chain sets one, in points.
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// What the generator needs to turn source properties into CSS.
#[derive(Debug, Clone, Copy)]
pub struct HtmlContext<'a> {
    pub colors: &'a ColorScope,
    pub units: &'a UnitConverter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// Render a whole text body.
pub fn body_to_html(body: &TextBody, ctx: &HtmlContext<'_>) -> String {
    paragraphs_to_html(&body.paragraphs, body.font_scale.unwrap_or(1.0), ctx)
}

/// Render paragraphs, scaling every font size by `font_scale`.
pub fn paragraphs_to_html(paragraphs: &[Paragraph], font_scale: f64, ctx: &HtmlContext<'_>) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for paragraph in paragraphs {
        let bullet = paragraph.props.bullet().filter(|_| !paragraph.is_empty());
        let kind = bullet.map(|b| {
            if b.is_ordered() {
                ListKind::Ordered
            } else {
                ListKind::Unordered
            }
        });

        if open_list.is_some() && open_list != kind {
            if let Some(list) = open_list.take() {
                html.push_str(&format!("</{}>", list.tag()));
            }
        }

        let block_style = paragraph_style(paragraph, ctx);
        let content = if paragraph.is_empty() {
            "&nbsp;".to_string()
        } else {
            paragraph
                .runs
                .iter()
                .map(|run| render_run(run, font_scale, ctx))
                .collect()
        };

        match (bullet, kind) {
            (Some(bullet), Some(kind)) => {
                if open_list.is_none() {
                    html.push_str(&list_open_tag(bullet, kind));
                    open_list = Some(kind);
                }
                let marker_color = match bullet {
                    Bullet::Char {
                        color: Some(color), ..
                    } => ctx.colors.resolve(color, None),
                    _ => Default::default(),
                };
                let mut style = block_style;
                if !marker_color.is_empty() {
                    style.push(format!("color: {}", marker_color.to_css()));
                }
                html.push_str(&format!("<li{}>{}</li>", style_attr(&style), content));
            }
            _ => html.push_str(&format!("<p{}>{}</p>", style_attr(&block_style), content)),
        }
    }

    if let Some(list) = open_list {
        html.push_str(&format!("</{}>", list.tag()));
    }
    html
}

fn list_open_tag(bullet: &Bullet, kind: ListKind) -> String {
    match bullet {
        Bullet::AutoNumber { scheme, start_at } => {
            let start = if *start_at > 1 {
                format!(" start=\"{}\"", start_at)
            } else {
                String::new()
            };
            format!(
                "<{}{} style=\"list-style-type: {};\">",
                kind.tag(),
                start,
                list_style_type(scheme)
            )
        }
        Bullet::Char { char, .. } => format!(
            "<{} style=\"list-style-type: {};\">",
            kind.tag(),
            bullet_style_type(char)
        ),
    }
}

/// CSS `list-style-type` of an auto-number scheme.
pub fn list_style_type(scheme: &str) -> &'static str {
    if scheme.starts_with("romanUc") {
        "upper-roman"
    } else if scheme.starts_with("romanLc") {
        "lower-roman"
    } else if scheme.starts_with("alphaUc") {
        "upper-alpha"
    } else if scheme.starts_with("alphaLc") {
        "lower-alpha"
    } else if scheme.starts_with("ea1") || scheme.starts_with("circleNumDb") {
        "cjk-ideographic"
    } else {
        "decimal"
    }
}

fn bullet_style_type(char: &str) -> String {
    match char {
        "•" | "\u{F0B7}" => "disc".to_string(),
        "o" | "◦" => "circle".to_string(),
        "▪" | "■" | "§" | "\u{F0A7}" => "square".to_string(),
        other => format!("'{} '", escape_html(other).replace('\'', "&#39;")),
    }
}

fn paragraph_style(paragraph: &Paragraph, ctx: &HtmlContext<'_>) -> Vec<String> {
    let props = &paragraph.props;
    let mut style = Vec::new();

    if let Some(align) = props.align {
        style.push(format!("text-align: {}", align.as_css()));
    }
    match props.line_spacing {
        Some(Spacing::Percent(pct)) => style.push(format!("line-height: {}", round2(pct))),
        Some(Spacing::Points(pt)) => {
            style.push(format!("line-height: {}px", ctx.units.points_to_px(pt)))
        }
        None => {}
    }
    if let Some(before) = props.space_before.and_then(|s| spacing_px(s, ctx)) {
        style.push(format!("margin-top: {}px", before));
    }
    if let Some(after) = props.space_after.and_then(|s| spacing_px(s, ctx)) {
        style.push(format!("margin-bottom: {}px", after));
    }
    if let Some(margin) = props.margin_left.filter(|m| *m != 0) {
        style.push(format!("padding-left: {}px", ctx.units.x(margin)));
    }
    if let Some(indent) = props.indent.filter(|i| *i != 0) {
        style.push(format!("text-indent: {}px", ctx.units.x(indent)));
    }
    style
}

/// Paragraph spacing in pixels; percentages are relative to the default size.
fn spacing_px(spacing: Spacing, ctx: &HtmlContext<'_>) -> Option<f64> {
    let px = match spacing {
        Spacing::Points(pt) => ctx.units.points_to_px(pt),
        Spacing::Percent(pct) => ctx.units.points_to_px(pct * DEFAULT_FONT_SIZE),
    };
    (px > 0.0).then_some(px)
}

fn render_run(run: &TextRun, font_scale: f64, ctx: &HtmlContext<'_>) -> String {
    let (text, props) = match run {
        TextRun::LineBreak { .. } => return "<br>".to_string(),
        TextRun::Text { text, props } => (text, props),
    };
    if text.is_empty() {
        return String::new();
    }

    let normalized: String = text.nfc().collect();
    let mut html = format!(
        "<span{}>{}</span>",
        style_attr(&run_style(props, font_scale, ctx)),
        escape_html(&normalized)
    );
    match props.hyperlink.as_deref().and_then(classify_link) {
        Some(Link::External(url)) => format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape_html(&url),
            html
        ),
        Some(Link::Internal(target)) => format!("<a href=\"{}\">{}</a>", escape_html(&target), html),
        None => html,
    }
}

#[derive(Debug, PartialEq)]
enum Link {
    External(String),
    Internal(String),
}

/// Allowed link targets: `http`, `https` and `mailto` URLs, and scheme-less
/// package targets (slide jumps). Anything else renders without an anchor.
fn classify_link(url: &str) -> Option<Link> {
    // browsers drop whitespace and control characters inside a scheme
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.split_once(':') {
        Some((scheme, _)) => {
            let scheme = scheme.to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto").then_some(Link::External(cleaned))
        }
        None => Some(Link::Internal(cleaned)),
    }
}

/// Inline CSS declarations of a run.
pub fn run_style(props: &RunProps, font_scale: f64, ctx: &HtmlContext<'_>) -> Vec<String> {
    let mut style = Vec::new();

    if let Some(family) = &props.font_family {
        let family: String = family.chars().filter(|c| *c != '\'' && !c.is_control()).collect();
        style.push(format!("font-family: '{}'", escape_html(&family)));
    }
    if let Some(size) = props.size {
        style.push(format!(
            "font-size: {}px",
            ctx.units.points_to_px(size * font_scale)
        ));
    }
    if props.bold == Some(true) {
        style.push("font-weight: bold".to_string());
    }
    if props.italic == Some(true) {
        style.push("font-style: italic".to_string());
    }

    let decorations: Vec<&str> = [
        (props.underline == Some(true)).then_some("underline"),
        (props.strike == Some(true)).then_some("line-through"),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !decorations.is_empty() {
        style.push(format!("text-decoration: {}", decorations.join(" ")));
    }

    if let Some(color) = &props.color {
        let resolved = ctx.colors.resolve(color, None);
        if !resolved.is_empty() {
            style.push(format!("color: {}", resolved.to_css()));
        }
    }
    if let Some(highlight) = &props.highlight {
        let resolved = ctx.colors.resolve(highlight, None);
        if !resolved.is_empty() {
            style.push(format!("background-color: {}", resolved.to_css()));
        }
    }
    if let Some(spacing) = props.spacing.filter(|s| *s != 0.0) {
        style.push(format!("letter-spacing: {}px", ctx.units.points_to_px(spacing)));
    }
    match props.caps {
        Some(Caps::All) => style.push("text-transform: uppercase".to_string()),
        Some(Caps::Small) => style.push("font-variant: small-caps".to_string()),
        None => {}
    }
    match props.baseline {
        Some(b) if b > 0.0 => style.push("vertical-align: super".to_string()),
        Some(b) if b < 0.0 => style.push("vertical-align: sub".to_string()),
        _ => {}
    }
    style
}

fn style_attr(declarations: &[String]) -> String {
    if declarations.is_empty() {
        String::new()
    } else {
        format!(" style=\"{};\"", declarations.join("; "))
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // vertical tab is PowerPoint's soft line break inside a run
            '\u{000B}' => out.push_str("<br>"),
            c => out.push(c),
        }
    }
    out
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorMapChain, ColorSpec, ThemeColorScheme};
    use crate::model::{ParagraphProps, TextAlign};

    fn render(paragraphs: &[Paragraph]) -> String {
        let mut scheme = ThemeColorScheme::new();
        scheme.insert("accent1", "4472C4");
        let colors = ColorScope::new(scheme, ColorMapChain::default());
        let units = UnitConverter::default();
        paragraphs_to_html(paragraphs, 1.0, &HtmlContext {
            colors: &colors,
            units: &units,
        })
    }

    fn para(text: &str, bullet: Option<Bullet>) -> Paragraph {
        Paragraph {
            props: ParagraphProps {
                bullet: bullet.map(Some),
                ..Default::default()
            },
            runs: vec![TextRun::text(text, RunProps::default())],
            ..Default::default()
        }
    }

    fn dot() -> Bullet {
        Bullet::Char {
            char: "•".to_string(),
            color: None,
            font: None,
        }
    }

    fn numbered(scheme: &str) -> Bullet {
        Bullet::AutoNumber {
            scheme: scheme.to_string(),
            start_at: 1,
        }
    }

    #[test]
    fn test_plain_paragraph_and_escaping() {
        let html = render(&[para("a < b & \"c\"", None)]);
        assert_eq!(html, "<p><span>a &lt; b &amp; &quot;c&quot;</span></p>");
    }

    #[test]
    fn test_list_grouping() {
        let html = render(&[
            para("one", Some(dot())),
            para("two", Some(dot())),
            para("three", Some(numbered("arabicPeriod"))),
            para("after", None),
        ]);
        assert_eq!(
            html,
            "<ul style=\"list-style-type: disc;\"><li><span>one</span></li><li><span>two</span></li></ul>\
             <ol style=\"list-style-type: decimal;\"><li><span>three</span></li></ol>\
             <p><span>after</span></p>"
        );
    }

    #[test]
    fn test_auto_number_types() {
        assert_eq!(list_style_type("romanUcPeriod"), "upper-roman");
        assert_eq!(list_style_type("romanLcParenR"), "lower-roman");
        assert_eq!(list_style_type("alphaUcPeriod"), "upper-alpha");
        assert_eq!(list_style_type("alphaLcParenBoth"), "lower-alpha");
        assert_eq!(list_style_type("ea1ChsPeriod"), "cjk-ideographic");
        assert_eq!(list_style_type("arabicParenR"), "decimal");

        let html = render(&[para("x", Some(numbered("romanUcPeriod")))]);
        assert!(html.starts_with("<ol style=\"list-style-type: upper-roman;\">"));
    }

    #[test]
    fn test_empty_paragraph_is_nbsp_and_closes_list() {
        let html = render(&[
            para("one", Some(dot())),
            para("", Some(dot())),
            para("two", Some(dot())),
        ]);
        assert_eq!(
            html,
            "<ul style=\"list-style-type: disc;\"><li><span>one</span></li></ul>\
             <p>&nbsp;</p>\
             <ul style=\"list-style-type: disc;\"><li><span>two</span></li></ul>"
        );
    }

    #[test]
    fn test_run_styles() {
        let props = RunProps {
            font_family: Some("Calibri".to_string()),
            size: Some(18.0),
            bold: Some(true),
            underline: Some(true),
            strike: Some(true),
            color: Some(ColorSpec::scheme("accent1")),
            caps: Some(Caps::All),
            hyperlink: Some("https://example.com/?a=1&b=2".to_string()),
            ..Default::default()
        };
        let mut paragraph = para("", None);
        paragraph.runs = vec![TextRun::text("Hi", props)];
        paragraph.props.align = Some(TextAlign::Center);

        let html = render(&[paragraph]);
        assert!(html.starts_with("<p style=\"text-align: center;\">"));
        assert!(html.contains("font-family: 'Calibri'"));
        // 18pt on a 1280px canvas of a 13.333in slide
        assert!(html.contains("font-size: 24px"));
        assert!(html.contains("font-weight: bold"));
        assert!(html.contains("text-decoration: underline line-through"));
        assert!(html.contains("color: #4472C4"));
        assert!(html.contains("text-transform: uppercase"));
        assert!(html.contains("<a href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\">"));
    }

    #[test]
    fn test_link_schemes() {
        let link = |target: &str| {
            let mut paragraph = para("", None);
            paragraph.runs = vec![TextRun::text(
                "click",
                RunProps {
                    hyperlink: Some(target.to_string()),
                    ..Default::default()
                },
            )];
            render(&[paragraph])
        };

        assert_eq!(
            link("javascript:alert(document.cookie)"),
            "<p><span>click</span></p>"
        );
        assert_eq!(link(" JavaScript:alert(1)"), "<p><span>click</span></p>");
        assert_eq!(link("java\tscript:alert('/')"), "<p><span>click</span></p>");
        assert_eq!(link("data:text/html,<b>x</b>"), "<p><span>click</span></p>");
        assert_eq!(link("vbscript:msgbox"), "<p><span>click</span></p>");

        assert!(link("mailto:team@example.com")
            .contains("<a href=\"mailto:team@example.com\" target=\"_blank\">"));
        assert!(link("HTTP://example.com").contains("target=\"_blank\""));
        assert_eq!(
            link("slide3.xml"),
            "<p><a href=\"slide3.xml\"><span>click</span></a></p>"
        );
    }

    #[test]
    fn test_font_family_escaped() {
        let props = RunProps {
            font_family: Some("Evil\"><script>".to_string()),
            ..Default::default()
        };
        let style = run_style(&props, 1.0, &HtmlContext {
            colors: &ColorScope::default(),
            units: &UnitConverter::default(),
        });
        assert_eq!(style[0], "font-family: 'Evil&quot;&gt;&lt;script&gt;'");
    }

    #[test]
    fn test_line_break_and_nfc() {
        let mut paragraph = para("", None);
        paragraph.runs = vec![
            TextRun::text("e\u{0301}", RunProps::default()),
            TextRun::LineBreak {
                props: RunProps::default(),
            },
            TextRun::text("x", RunProps::default()),
        ];
        assert_eq!(
            render(&[paragraph]),
            "<p><span>\u{00E9}</span><br><span>x</span></p>"
        );
    }
}
