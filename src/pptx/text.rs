//! Text body parsing (`p:txBody`, `a:txBody`) with list style inheritance.

use super::theme::Theme;
use crate::color::ColorSpec;
use crate::container::Relationships;
use crate::model::{
    Bullet, Caps, Paragraph, ParagraphProps, RunProps, Spacing, TextAlign, TextAnchor, TextBody,
    TextRun, DEFAULT_INSETS,
};
use crate::xml::XmlNode;

/// Inherited styling for one text body.
///
/// `list_styles` holds `a:lstStyle`-shaped nodes (`p:titleStyle`,
/// `p:defaultTextStyle`, ...) nearest first; the body's own `a:lstStyle`
/// is consulted before all of them. `body_props` holds inherited
/// `a:bodyPr` nodes, nearest first.
#[derive(Debug, Clone, Copy)]
pub struct TextStyles<'a> {
    pub theme: &'a Theme,
    /// Relationships of the part holding the text (hyperlink targets)
    pub rels: &'a Relationships,
    pub list_styles: &'a [&'a XmlNode],
    pub body_props: &'a [&'a XmlNode],
    /// `p:style/a:fontRef` color
    pub font_color: Option<&'a ColorSpec>,
}

/// Parse a text body with every inherited property merged in.
pub fn parse_text_body(tx_body: &XmlNode, styles: &TextStyles<'_>) -> TextBody {
    let mut list_styles: Vec<&XmlNode> = tx_body.child("a:lstStyle").into_iter().collect();
    list_styles.extend(styles.list_styles.iter().copied());

    let mut body_props: Vec<&XmlNode> = tx_body.child("a:bodyPr").into_iter().collect();
    body_props.extend(styles.body_props.iter().copied());

    let mut body = parse_body_props(&body_props);
    body.paragraphs = tx_body
        .children_named("a:p")
        .map(|p| parse_paragraph(p, &list_styles, styles))
        .collect();
    body
}

fn parse_body_props(chain: &[&XmlNode]) -> TextBody {
    let first = |name: &str| chain.iter().find_map(|n| n.attr(name));
    let inset = |name: &str, default: i64| {
        chain
            .iter()
            .find_map(|n| n.attr_i64(name))
            .unwrap_or(default)
    };

    TextBody {
        paragraphs: Vec::new(),
        vertical: first("vert").is_some_and(|v| v != "horz"),
        anchor: first("anchor")
            .and_then(TextAnchor::from_ooxml)
            .unwrap_or_default(),
        insets: [
            inset("lIns", DEFAULT_INSETS[0]),
            inset("tIns", DEFAULT_INSETS[1]),
            inset("rIns", DEFAULT_INSETS[2]),
            inset("bIns", DEFAULT_INSETS[3]),
        ],
        font_scale: chain
            .iter()
            .find_map(|n| n.child("a:normAutofit"))
            .and_then(|fit| fit.attr_f64("fontScale"))
            .map(|v| v / 100_000.0),
    }
}

fn parse_paragraph(p: &XmlNode, list_styles: &[&XmlNode], styles: &TextStyles<'_>) -> Paragraph {
    let p_pr = p.child("a:pPr");
    let level = p_pr
        .and_then(|n| n.attr_i64("lvl"))
        .unwrap_or(0)
        .clamp(0, 8) as u8;

    let mut props = p_pr
        .map(|n| parse_paragraph_props(n, styles))
        .unwrap_or_default();
    let level_tag = format!("a:lvl{}pPr", level + 1);
    for style in list_styles {
        if let Some(inherited) = style.child(&level_tag) {
            props.inherit(&parse_paragraph_props(inherited, styles));
        }
    }
    if props.default_run.color.is_none() {
        props.default_run.color = styles.font_color.cloned();
    }

    let run_props = |node: &XmlNode| {
        let mut rp = node
            .child("a:rPr")
            .map(|r| parse_run_props(r, styles))
            .unwrap_or_default();
        rp.inherit(&props.default_run);
        rp
    };

    let mut runs = Vec::new();
    for child in &p.children {
        match child.tag.as_str() {
            "a:r" | "a:fld" => {
                let text = child.child("a:t").map(|t| t.text.clone()).unwrap_or_default();
                runs.push(TextRun::text(text, run_props(child)));
            }
            "a:br" => runs.push(TextRun::LineBreak {
                props: run_props(child),
            }),
            _ => {}
        }
    }

    let mut end_props = p
        .child("a:endParaRPr")
        .map(|n| parse_run_props(n, styles))
        .unwrap_or_default();
    end_props.inherit(&props.default_run);

    Paragraph {
        props,
        runs,
        level,
        end_props,
    }
}

/// Parse `a:pPr` or an `a:lvlNpPr` style level.
pub fn parse_paragraph_props(p_pr: &XmlNode, styles: &TextStyles<'_>) -> ParagraphProps {
    let bullet = if p_pr.child("a:buNone").is_some() {
        Some(None)
    } else if let Some(bu) = p_pr.child("a:buAutoNum") {
        Some(Some(Bullet::AutoNumber {
            scheme: bu.attr("type").unwrap_or("arabicPeriod").to_string(),
            start_at: bu
                .attr_i64("startAt")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(1),
        }))
    } else {
        p_pr.child("a:buChar").map(|bu| {
            Some(Bullet::Char {
                char: bu.attr("char").unwrap_or("\u{2022}").to_string(),
                color: p_pr.child("a:buClr").and_then(ColorSpec::from_parent),
                font: p_pr
                    .child("a:buFont")
                    .and_then(|f| f.attr("typeface"))
                    .and_then(|t| styles.theme.resolve_font(t)),
            })
        })
    };

    ParagraphProps {
        align: p_pr.attr("algn").and_then(TextAlign::from_ooxml),
        margin_left: p_pr.attr_i64("marL"),
        indent: p_pr.attr_i64("indent"),
        line_spacing: p_pr.child("a:lnSpc").and_then(parse_spacing),
        space_before: p_pr.child("a:spcBef").and_then(parse_spacing),
        space_after: p_pr.child("a:spcAft").and_then(parse_spacing),
        bullet,
        default_run: p_pr
            .child("a:defRPr")
            .map(|n| parse_run_props(n, styles))
            .unwrap_or_default(),
    }
}

fn parse_spacing(node: &XmlNode) -> Option<Spacing> {
    if let Some(pct) = node.path_attr(&["a:spcPct"], "val") {
        return pct.parse::<f64>().ok().map(|v| Spacing::Percent(v / 100_000.0));
    }
    node.path_attr(&["a:spcPts"], "val")
        .and_then(|v| v.parse::<f64>().ok())
        .map(|v| Spacing::Points(v / 100.0))
}

/// Parse `a:rPr`, `a:defRPr` or `a:endParaRPr`.
pub fn parse_run_props(r_pr: &XmlNode, styles: &TextStyles<'_>) -> RunProps {
    let typeface = ["a:latin", "a:ea", "a:cs"]
        .iter()
        .filter_map(|tag| r_pr.child(tag)?.attr("typeface"))
        .find_map(|face| styles.theme.resolve_font(face));

    let hyperlink = r_pr
        .child("a:hlinkClick")
        .and_then(|link| link.attr("r:id"))
        .and_then(|id| styles.rels.get(id))
        .map(|rel| rel.target.clone())
        .filter(|target| !target.is_empty());

    RunProps {
        font_family: typeface,
        size: r_pr.attr_f64("sz").map(|v| v / 100.0),
        bold: r_pr.attr_bool("b"),
        italic: r_pr.attr_bool("i"),
        underline: r_pr.attr("u").map(|u| u != "none"),
        strike: r_pr.attr("strike").map(|s| s != "noStrike"),
        color: r_pr.child("a:solidFill").and_then(ColorSpec::from_parent),
        highlight: r_pr.child("a:highlight").and_then(ColorSpec::from_parent),
        spacing: r_pr.attr_f64("spc").map(|v| v / 100.0),
        caps: match r_pr.attr("cap") {
            Some("all") => Some(Caps::All),
            Some("small") => Some(Caps::Small),
            _ => None,
        },
        baseline: r_pr.attr_f64("baseline").map(|v| v / 1000.0),
        hyperlink,
    }
}
