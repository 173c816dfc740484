//! Theme part (`ppt/theme/themeN.xml`).

use crate::color::{ColorSpec, ThemeColorScheme};
use crate::xml::XmlNode;

/// Typefaces of one theme font collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontCollection {
    pub latin: Option<String>,
    pub east_asian: Option<String>,
}

impl FontCollection {
    fn from_node(node: Option<&XmlNode>) -> Self {
        let typeface = |tag: &str| {
            node.and_then(|n| n.child(tag))
                .and_then(|c| c.attr("typeface"))
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        };
        Self {
            latin: typeface("a:latin"),
            east_asian: typeface("a:ea"),
        }
    }
}

/// A line style from `a:lnStyleLst`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeLineStyle {
    /// Width in EMU
    pub width: Option<i64>,
    pub color: Option<ColorSpec>,
}

/// Parsed theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub colors: ThemeColorScheme,
    /// Raw entries of `a:fillStyleLst`
    pub fill_styles: Vec<XmlNode>,
    /// Raw entries of `a:bgFillStyleLst`
    pub background_styles: Vec<XmlNode>,
    pub line_styles: Vec<ThemeLineStyle>,
    pub major_font: FontCollection,
    pub minor_font: FontCollection,
}

impl Theme {
    pub fn from_node(root: &XmlNode) -> Self {
        let elements = root.child("a:themeElements");
        let section = |path: &[&str]| elements.and_then(|e| e.path(path));

        let colors = section(&["a:clrScheme"])
            .map(ThemeColorScheme::from_node)
            .unwrap_or_default();

        let fill_styles = section(&["a:fmtScheme", "a:fillStyleLst"])
            .map(|n| n.children.clone())
            .unwrap_or_default();
        let background_styles = section(&["a:fmtScheme", "a:bgFillStyleLst"])
            .map(|n| n.children.clone())
            .unwrap_or_default();

        let line_styles = section(&["a:fmtScheme", "a:lnStyleLst"])
            .map(|list| {
                list.children_named("a:ln")
                    .map(|ln| ThemeLineStyle {
                        width: ln.attr_i64("w"),
                        color: ln.child("a:solidFill").and_then(ColorSpec::from_parent),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let fonts = section(&["a:fontScheme"]);
        Self {
            colors,
            fill_styles,
            background_styles,
            line_styles,
            major_font: FontCollection::from_node(fonts.and_then(|f| f.child("a:majorFont"))),
            minor_font: FontCollection::from_node(fonts.and_then(|f| f.child("a:minorFont"))),
        }
    }

    /// Representative color of each fill style, for `a:fillRef` lookups.
    pub fn fill_style_colors(&self) -> Vec<Option<ColorSpec>> {
        self.fill_styles.iter().map(representative_color).collect()
    }

    /// Fill node referenced by a style index: 1..=999 the fill list,
    /// 1001+ the background fill list.
    pub fn fill_for_index(&self, idx: u32) -> Option<&XmlNode> {
        match idx {
            0 => None,
            i if i > 1000 => self.background_styles.get((i - 1001) as usize),
            i => self.fill_styles.get((i - 1) as usize),
        }
    }

    /// Line style referenced by `a:lnRef@idx` (1-based).
    pub fn line_for_index(&self, idx: u32) -> Option<&ThemeLineStyle> {
        idx.checked_sub(1)
            .and_then(|i| self.line_styles.get(i as usize))
    }

    /// Substitute theme font references (`+mj-lt`, `+mn-ea`, ...).
    pub fn resolve_font(&self, typeface: &str) -> Option<String> {
        let (collection, script) = match typeface {
            "+mj-lt" => (&self.major_font, false),
            "+mn-lt" => (&self.minor_font, false),
            "+mj-ea" => (&self.major_font, true),
            "+mn-ea" => (&self.minor_font, true),
            "+mj-cs" => (&self.major_font, false),
            "+mn-cs" => (&self.minor_font, false),
            other if other.is_empty() => return None,
            other => return Some(other.to_string()),
        };
        if script {
            collection.east_asian.clone().or_else(|| collection.latin.clone())
        } else {
            collection.latin.clone()
        }
    }

    /// Minor (body) latin font.
    pub fn body_font(&self) -> Option<&str> {
        self.minor_font.latin.as_deref()
    }
}

/// The color a fill style most visibly paints with.
pub fn representative_color(fill: &XmlNode) -> Option<ColorSpec> {
    match fill.tag.as_str() {
        "a:solidFill" => ColorSpec::from_parent(fill),
        "a:gradFill" => fill
            .path(&["a:gsLst", "a:gs"])
            .and_then(ColorSpec::from_parent),
        "a:pattFill" => fill.child("a:fgClr").and_then(ColorSpec::from_parent),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME_XML: &str = r#"<a:theme name="Office"><a:themeElements>
        <a:clrScheme name="Office">
            <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
            <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
            <a:dk2><a:srgbClr val="44546A"/></a:dk2>
            <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
            <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
            <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
        </a:clrScheme>
        <a:fontScheme name="Office">
            <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/></a:majorFont>
            <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface="Malgun Gothic"/></a:minorFont>
        </a:fontScheme>
        <a:fmtScheme name="Office">
            <a:fillStyleLst>
                <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
                <a:gradFill><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:gs></a:gsLst></a:gradFill>
            </a:fillStyleLst>
            <a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst>
            <a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst>
        </a:fmtScheme>
    </a:themeElements></a:theme>"#;

    #[test]
    fn test_parse_theme() {
        let theme = Theme::from_node(&XmlNode::parse(THEME_XML).unwrap());
        assert_eq!(theme.colors.get("dk1"), Some("000000"));
        assert_eq!(theme.colors.get("accent2"), Some("ED7D31"));
        assert_eq!(theme.fill_styles.len(), 2);
        assert_eq!(theme.line_styles[0].width, Some(6350));
        assert_eq!(theme.major_font.latin.as_deref(), Some("Calibri Light"));
        assert_eq!(theme.major_font.east_asian, None);
        assert!(theme.fill_for_index(1001).is_some());
        assert!(theme.fill_for_index(0).is_none());
    }

    #[test]
    fn test_resolve_theme_fonts() {
        let theme = Theme::from_node(&XmlNode::parse(THEME_XML).unwrap());
        assert_eq!(theme.resolve_font("+mj-lt").as_deref(), Some("Calibri Light"));
        assert_eq!(theme.resolve_font("+mn-ea").as_deref(), Some("Malgun Gothic"));
        // empty east asian face falls back to latin
        assert_eq!(theme.resolve_font("+mj-ea").as_deref(), Some("Calibri Light"));
        assert_eq!(theme.resolve_font("Arial").as_deref(), Some("Arial"));
        assert_eq!(theme.resolve_font(""), None);
    }

    #[test]
    fn test_fill_style_colors() {
        let theme = Theme::from_node(&XmlNode::parse(THEME_XML).unwrap());
        let colors = theme.fill_style_colors();
        assert_eq!(colors[0], Some(ColorSpec::scheme("phClr")));
        assert!(colors[1].as_ref().unwrap().modifiers.tint.is_some());
    }
}
