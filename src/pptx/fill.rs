//! Fill and outline properties (`a:solidFill`, `a:gradFill`, `a:ln`, ...).

use crate::color::ColorSpec;
use crate::model::{
    DashStyle, FillSpec, GradientKind, GradientSpec, GradientStop, MediaRef, OutlineSpec, RelScope,
};
use crate::xml::XmlNode;

const FILL_TAGS: [&str; 6] = [
    "a:noFill",
    "a:solidFill",
    "a:gradFill",
    "a:blipFill",
    "a:pattFill",
    "a:grpFill",
];

/// Whether a tag is a fill choice element.
pub fn is_fill_tag(tag: &str) -> bool {
    FILL_TAGS.contains(&tag)
}

/// Parse the first fill choice among a node's children (`p:spPr`, `p:bgPr`, `a:tcPr`).
pub fn find_fill(parent: &XmlNode, scope: RelScope) -> Option<FillSpec> {
    parent
        .children
        .iter()
        .find(|c| is_fill_tag(&c.tag))
        .and_then(|c| parse_fill(c, scope))
}

/// Parse one fill element. `a:grpFill` yields `None` (inherit).
pub fn parse_fill(fill: &XmlNode, scope: RelScope) -> Option<FillSpec> {
    match fill.tag.as_str() {
        "a:noFill" => Some(FillSpec::None),
        "a:solidFill" => ColorSpec::from_parent(fill).map(FillSpec::Solid),
        "a:gradFill" => parse_gradient(fill).map(FillSpec::Gradient),
        "a:blipFill" | "p:blipFill" => fill
            .child("a:blip")
            .and_then(|b| b.attr("r:embed"))
            .map(|id| FillSpec::Image(MediaRef::new(scope, id))),
        // patterns render as their foreground color
        "a:pattFill" => fill
            .child("a:fgClr")
            .and_then(ColorSpec::from_parent)
            .map(FillSpec::Solid),
        _ => None,
    }
}

fn parse_gradient(grad: &XmlNode) -> Option<GradientSpec> {
    let stops: Vec<GradientStop> = grad
        .path(&["a:gsLst"])?
        .children_named("a:gs")
        .filter_map(|gs| {
            Some(GradientStop {
                position: gs.attr_f64("pos").unwrap_or(0.0) / 1000.0,
                color: ColorSpec::from_parent(gs)?,
            })
        })
        .collect();
    if stops.is_empty() {
        return None;
    }

    let kind = if grad.child("a:path").is_some() {
        GradientKind::Radial
    } else {
        let angle = grad
            .path_attr(&["a:lin"], "ang")
            .and_then(|a| a.parse::<f64>().ok())
            .unwrap_or(0.0)
            / 60000.0;
        GradientKind::Linear(angle)
    };
    Some(GradientSpec { kind, stops })
}

/// Parse `a:ln`.
pub fn parse_outline(ln: &XmlNode, scope: RelScope) -> OutlineSpec {
    let end_type = |tag: &str| {
        ln.path_attr(&[tag], "type")
            .filter(|t| *t != "none")
            .map(str::to_string)
    };
    OutlineSpec {
        width: ln.attr_i64("w"),
        fill: find_fill(ln, scope),
        dash: ln
            .path_attr(&["a:prstDash"], "val")
            .map(DashStyle::from_ooxml)
            .unwrap_or_default(),
        head: end_type("a:headEnd"),
        tail: end_type("a:tailEnd"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(xml: &str) -> XmlNode {
        XmlNode::parse(xml).unwrap()
    }

    #[test]
    fn test_solid_and_no_fill() {
        let sp_pr = node(r#"<p:spPr><a:prstGeom prst="rect"/><a:solidFill><a:srgbClr val="FF0000"/></a:solidFill></p:spPr>"#);
        assert_eq!(
            find_fill(&sp_pr, RelScope::Slide),
            Some(FillSpec::Solid(ColorSpec::rgb("FF0000")))
        );
        let none = node("<p:spPr><a:noFill/></p:spPr>");
        assert_eq!(find_fill(&none, RelScope::Slide), Some(FillSpec::None));
        assert_eq!(find_fill(&node("<p:spPr/>"), RelScope::Slide), None);
    }

    #[test]
    fn test_gradient() {
        let grad = node(
            r#"<a:gradFill><a:gsLst>
                <a:gs pos="0"><a:srgbClr val="000000"/></a:gs>
                <a:gs pos="100000"><a:schemeClr val="accent1"/></a:gs>
            </a:gsLst><a:lin ang="5400000"/></a:gradFill>"#,
        );
        let Some(FillSpec::Gradient(spec)) = parse_fill(&grad, RelScope::Slide) else {
            panic!("expected gradient");
        };
        assert_eq!(spec.kind, GradientKind::Linear(90.0));
        assert_eq!(spec.stops.len(), 2);
        assert_eq!(spec.stops[1].position, 100.0);
    }

    #[test]
    fn test_blip_fill_keeps_scope() {
        let blip = node(r#"<a:blipFill><a:blip r:embed="rId4"/></a:blipFill>"#);
        assert_eq!(
            parse_fill(&blip, RelScope::Layout),
            Some(FillSpec::Image(MediaRef::new(RelScope::Layout, "rId4")))
        );
    }

    #[test]
    fn test_outline() {
        let ln = node(
            r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="00FF00"/></a:solidFill><a:prstDash val="dash"/><a:tailEnd type="triangle"/><a:headEnd type="none"/></a:ln>"#,
        );
        let outline = parse_outline(&ln, RelScope::Slide);
        assert_eq!(outline.width, Some(25400));
        assert_eq!(outline.dash, DashStyle::Dashed);
        assert_eq!(outline.tail.as_deref(), Some("triangle"));
        assert_eq!(outline.head, None);
        assert!(!outline.is_hidden());
    }
}
