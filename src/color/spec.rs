//! Typed form of the DrawingML color choice (`a:srgbClr`, `a:schemeClr`, ...).

use crate::xml::XmlNode;

/// The base color of a color specification.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorBase {
    /// `a:srgbClr`: hex without `#`
    Rgb(String),
    /// `a:schemeClr`: logical slot name (`tx1`, `accent2`, `phClr`, ...)
    Scheme(String),
    /// `a:scrgbClr`: channel percentages in `[0, 1]`
    ScRgb { r: f64, g: f64, b: f64 },
    /// `a:prstClr`: preset name (`red`, `dkBlue`, ...)
    Preset(String),
    /// `a:hslClr`: hue in degrees, saturation and luminance in `[0, 1]`
    Hsl { hue: f64, sat: f64, lum: f64 },
    /// `a:sysClr`: system color with its last rendered value
    System { name: String, last_color: Option<String> },
}

/// Modifier values as fractions (`50000` in markup becomes `0.5`).
///
/// They are always applied in the order alpha, hueMod, lumMod, lumOff,
/// satMod, shade, tint, whatever order they appear in the markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorModifiers {
    pub alpha: Option<f64>,
    pub hue_mod: Option<f64>,
    pub lum_mod: Option<f64>,
    pub lum_off: Option<f64>,
    pub sat_mod: Option<f64>,
    pub shade: Option<f64>,
    pub tint: Option<f64>,
}

impl ColorModifiers {
    pub fn is_empty(&self) -> bool {
        *self == ColorModifiers::default()
    }
}

/// A color reference plus its modifier chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpec {
    pub base: ColorBase,
    pub modifiers: ColorModifiers,
}

/// Tags that carry a color choice.
const COLOR_TAGS: [&str; 6] = [
    "a:srgbClr",
    "a:schemeClr",
    "a:scrgbClr",
    "a:prstClr",
    "a:hslClr",
    "a:sysClr",
];

impl ColorSpec {
    pub fn new(base: ColorBase) -> Self {
        Self {
            base,
            modifiers: ColorModifiers::default(),
        }
    }

    pub fn rgb(hex: impl Into<String>) -> Self {
        Self::new(ColorBase::Rgb(hex.into().trim_start_matches('#').to_string()))
    }

    pub fn scheme(slot: impl Into<String>) -> Self {
        Self::new(ColorBase::Scheme(slot.into()))
    }

    pub fn with_modifiers(mut self, modifiers: ColorModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether a tag is one of the color choice elements.
    pub fn is_color_tag(tag: &str) -> bool {
        COLOR_TAGS.contains(&tag)
    }

    /// Parse a color element such as `<a:schemeClr val="accent1"><a:lumMod .../></a:schemeClr>`.
    pub fn from_node(node: &XmlNode) -> Option<ColorSpec> {
        let base = match node.tag.as_str() {
            "a:srgbClr" => ColorBase::Rgb(node.attr("val")?.to_string()),
            "a:schemeClr" => ColorBase::Scheme(node.attr("val")?.to_string()),
            "a:prstClr" => ColorBase::Preset(node.attr("val")?.to_string()),
            "a:scrgbClr" => ColorBase::ScRgb {
                r: percentage(node, "r"),
                g: percentage(node, "g"),
                b: percentage(node, "b"),
            },
            "a:hslClr" => ColorBase::Hsl {
                hue: node.attr_f64("hue").unwrap_or(0.0) / 60000.0,
                sat: percentage(node, "sat"),
                lum: percentage(node, "lum"),
            },
            "a:sysClr" => ColorBase::System {
                name: node.attr("val").unwrap_or_default().to_string(),
                last_color: node.attr("lastClr").map(str::to_string),
            },
            _ => return None,
        };

        let mut modifiers = ColorModifiers::default();
        for child in &node.children {
            let Some(value) = child.attr_f64("val").map(|v| v / 100_000.0) else {
                continue;
            };
            match child.tag.as_str() {
                "a:alpha" => modifiers.alpha = Some(value),
                "a:hueMod" => modifiers.hue_mod = Some(value),
                "a:lumMod" => modifiers.lum_mod = Some(value),
                "a:lumOff" => modifiers.lum_off = Some(value),
                "a:satMod" => modifiers.sat_mod = Some(value),
                "a:shade" => modifiers.shade = Some(value),
                "a:tint" => modifiers.tint = Some(value),
                _ => {}
            }
        }

        Some(ColorSpec { base, modifiers })
    }

    /// Parse the first color element among a node's children (e.g. inside `a:solidFill`).
    pub fn from_parent(node: &XmlNode) -> Option<ColorSpec> {
        node.children
            .iter()
            .find(|c| Self::is_color_tag(&c.tag))
            .and_then(Self::from_node)
    }
}

fn percentage(node: &XmlNode, attr: &str) -> f64 {
    node.attr_f64(attr).unwrap_or(0.0) / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scheme_color_with_modifiers() {
        let node = XmlNode::parse(
            r#"<a:schemeClr val="accent1"><a:tint val="50000"/><a:lumMod val="75000"/><a:alpha val="40000"/></a:schemeClr>"#,
        )
        .unwrap();
        let spec = ColorSpec::from_node(&node).unwrap();
        assert_eq!(spec.base, ColorBase::Scheme("accent1".to_string()));
        assert_eq!(spec.modifiers.tint, Some(0.5));
        assert_eq!(spec.modifiers.lum_mod, Some(0.75));
        assert_eq!(spec.modifiers.alpha, Some(0.4));
        assert_eq!(spec.modifiers.shade, None);
    }

    #[test]
    fn test_parse_from_fill_parent() {
        let fill =
            XmlNode::parse(r#"<a:solidFill><a:srgbClr val="FF0000"/></a:solidFill>"#).unwrap();
        let spec = ColorSpec::from_parent(&fill).unwrap();
        assert_eq!(spec, ColorSpec::rgb("FF0000"));
    }

    #[test]
    fn test_parse_other_variants() {
        let sys = XmlNode::parse(r#"<a:sysClr val="windowText" lastClr="000000"/>"#).unwrap();
        assert_eq!(
            ColorSpec::from_node(&sys).unwrap().base,
            ColorBase::System {
                name: "windowText".to_string(),
                last_color: Some("000000".to_string())
            }
        );

        let hsl = XmlNode::parse(r#"<a:hslClr hue="7200000" sat="100000" lum="50000"/>"#).unwrap();
        assert_eq!(
            ColorSpec::from_node(&hsl).unwrap().base,
            ColorBase::Hsl {
                hue: 120.0,
                sat: 1.0,
                lum: 0.5
            }
        );

        assert!(ColorSpec::from_node(&XmlNode::new("a:noFill")).is_none());
    }
}
