//! Color resolution against a theme and its color maps.

use super::hsl::{self, Rgb};
use super::preset::preset_color_hex;
use super::spec::{ColorBase, ColorSpec};
use crate::xml::XmlNode;
use std::collections::HashMap;

/// Theme color slots in `a:clrScheme` order.
pub const THEME_SLOTS: [&str; 12] = [
    "dk1", "lt1", "dk2", "lt2", "accent1", "accent2", "accent3", "accent4", "accent5",
    "accent6", "hlink", "folHlink",
];

/// Logical slots remapped by `p:clrMap`.
pub const MAPPED_SLOTS: [&str; 12] = [
    "bg1", "tx1", "bg2", "tx2", "accent1", "accent2", "accent3", "accent4", "accent5",
    "accent6", "hlink", "folHlink",
];

/// Concrete colors of a theme's `a:clrScheme`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeColorScheme {
    colors: HashMap<String, String>,
}

impl ThemeColorScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `a:clrScheme`. Each slot holds an `a:srgbClr` or an `a:sysClr`
    /// whose `lastClr` is the rendered value.
    pub fn from_node(clr_scheme: &XmlNode) -> Self {
        let mut scheme = Self::new();
        for slot in &clr_scheme.children {
            let name = slot.local_name();
            let value = slot.children.iter().find_map(|c| match c.tag.as_str() {
                "a:srgbClr" => c.attr("val"),
                "a:sysClr" => c.attr("lastClr").or_else(|| system_color(c.attr("val")?)),
                _ => None,
            });
            if let Some(hex) = value {
                scheme.insert(name, hex);
            }
        }
        scheme
    }

    pub fn insert(&mut self, slot: impl Into<String>, hex: &str) {
        self.colors
            .insert(slot.into(), hex.trim_start_matches('#').to_ascii_uppercase());
    }

    /// Hex value (`RRGGBB`) of a theme slot.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.colors.get(slot).map(String::as_str)
    }

    /// The six accent colors as `#RRGGBB` (empty when missing).
    pub fn accents(&self) -> [String; 6] {
        std::array::from_fn(|i| {
            self.get(&format!("accent{}", i + 1))
                .map(|hex| format!("#{hex}"))
                .unwrap_or_default()
        })
    }
}

/// A `p:clrMap` or `a:overrideClrMapping`: logical slot to theme slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMapping {
    slots: HashMap<String, String>,
}

impl ColorMapping {
    pub fn from_node(node: &XmlNode) -> Self {
        let slots = MAPPED_SLOTS
            .iter()
            .filter_map(|slot| node.attr(slot).map(|v| (slot.to_string(), v.to_string())))
            .collect();
        Self { slots }
    }

    pub fn with(mut self, logical: &str, theme_slot: &str) -> Self {
        self.slots.insert(logical.to_string(), theme_slot.to_string());
        self
    }

    pub fn get(&self, logical: &str) -> Option<&str> {
        self.slots.get(logical).map(String::as_str)
    }
}

/// Color maps in precedence order: slide override, layout override, master map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMapChain {
    pub slide: Option<ColorMapping>,
    pub layout: Option<ColorMapping>,
    pub master: Option<ColorMapping>,
}

impl ColorMapChain {
    /// Theme slot for a logical slot.
    pub fn resolve_slot(&self, logical: &str) -> String {
        [&self.slide, &self.layout, &self.master]
            .into_iter()
            .flatten()
            .find_map(|map| map.get(logical))
            .unwrap_or_else(|| default_slot(logical))
            .to_string()
    }
}

fn default_slot(logical: &str) -> &str {
    match logical {
        "tx1" => "dk1",
        "tx2" => "dk2",
        "bg1" => "lt1",
        "bg2" => "lt2",
        other => other,
    }
}

fn system_color(name: &str) -> Option<&'static str> {
    match name {
        "window" | "highlightText" | "btnHighlight" | "menu" | "infoBk" => Some("FFFFFF"),
        "windowText" | "menuText" | "btnText" | "captionText" | "infoText" => Some("000000"),
        "btnFace" | "menuBar" | "3dLight" => Some("F0F0F0"),
        "btnShadow" | "grayText" => Some("A0A0A0"),
        "highlight" | "hotLight" => Some("0078D7"),
        _ => None,
    }
}

/// A resolved color. An empty `hex` means the reference could not be resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedColor {
    /// `#RRGGBB`, or empty
    pub hex: String,
    /// Opacity in `[0, 1]` when an alpha modifier was present
    pub alpha: Option<f64>,
}

impl ResolvedColor {
    pub fn from_hex(hex: &str) -> Self {
        let hex = Rgb::from_hex(hex).map(Rgb::to_hex).unwrap_or_default();
        Self { hex, alpha: None }
    }

    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }

    /// CSS form: `#RRGGBB`, or `rgba(...)` when translucent.
    pub fn to_css(&self) -> String {
        match (Rgb::from_hex(&self.hex), self.alpha) {
            (Some(rgb), Some(alpha)) if alpha < 1.0 => format!(
                "rgba({},{},{},{})",
                rgb.r,
                rgb.g,
                rgb.b,
                (alpha.clamp(0.0, 1.0) * 100.0).round() / 100.0
            ),
            _ => self.hex.clone(),
        }
    }

    /// CSS form, or the fallback when unresolved.
    pub fn css_or(&self, fallback: &str) -> String {
        if self.is_empty() {
            fallback.to_string()
        } else {
            self.to_css()
        }
    }
}

/// Everything needed to resolve colors on one slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorScope {
    pub scheme: ThemeColorScheme,
    pub maps: ColorMapChain,
    /// Representative color of each entry in the theme's `a:fillStyleLst`
    pub fill_styles: Vec<Option<ColorSpec>>,
}

impl ColorScope {
    pub fn new(scheme: ThemeColorScheme, maps: ColorMapChain) -> Self {
        Self {
            scheme,
            maps,
            fill_styles: Vec::new(),
        }
    }

    /// Copy of this scope with a different slide-level override.
    pub fn with_override(&self, slide: Option<ColorMapping>) -> Self {
        let mut scope = self.clone();
        scope.maps.slide = slide;
        scope
    }

    /// Resolve a color specification. `placeholder` substitutes `phClr`.
    pub fn resolve(&self, spec: &ColorSpec, placeholder: Option<&ResolvedColor>) -> ResolvedColor {
        let Some(base) = self.base_color(&spec.base, placeholder) else {
            return ResolvedColor::default();
        };

        let m = &spec.modifiers;
        let mut rgb = base;
        if let Some(v) = m.hue_mod {
            rgb = hsl::hue_mod(rgb, v);
        }
        if let Some(v) = m.lum_mod {
            rgb = hsl::lum_mod(rgb, v);
        }
        if let Some(v) = m.lum_off {
            rgb = hsl::lum_off(rgb, v);
        }
        if let Some(v) = m.sat_mod {
            rgb = hsl::sat_mod(rgb, v);
        }
        if let Some(v) = m.shade {
            rgb = hsl::shade(rgb, v);
        }
        if let Some(v) = m.tint {
            rgb = hsl::tint(rgb, v);
        }

        ResolvedColor {
            hex: rgb.to_hex(),
            alpha: m.alpha.or_else(|| placeholder.and_then(|p| p.alpha)),
        }
    }

    /// Resolve a color-bearing node: a color element, a parent of one
    /// (`a:solidFill`), or a style reference (`a:fillRef`).
    pub fn resolve_node(&self, node: &XmlNode, placeholder: Option<&ResolvedColor>) -> ResolvedColor {
        if node.is("a:fillRef") {
            let idx = node.attr_i64("idx").unwrap_or(0).max(0) as usize;
            return self.resolve_fill_ref(idx, ColorSpec::from_parent(node).as_ref());
        }
        if let Some(spec) = ColorSpec::from_node(node).or_else(|| ColorSpec::from_parent(node)) {
            return self.resolve(&spec, placeholder);
        }
        if let Some(fill_ref) = node.child("a:fillRef") {
            return self.resolve_node(fill_ref, placeholder);
        }
        ResolvedColor::default()
    }

    /// Resolve a theme fill style reference. The reference color becomes the
    /// placeholder color of the referenced style.
    pub fn resolve_fill_ref(&self, idx: usize, color: Option<&ColorSpec>) -> ResolvedColor {
        let placeholder = color.map(|c| self.resolve(c, None)).unwrap_or_default();
        // idx 0 is "no fill"; 1001+ index the background fill list, which
        // shares the fill list's representative colors.
        let style_index = match idx {
            0 => return ResolvedColor::default(),
            i if i > 1000 => i - 1001,
            i => i - 1,
        };
        match self.fill_styles.get(style_index) {
            Some(Some(style)) => self.resolve(style, Some(&placeholder)),
            _ => placeholder,
        }
    }

    fn base_color(&self, base: &ColorBase, placeholder: Option<&ResolvedColor>) -> Option<Rgb> {
        match base {
            ColorBase::Rgb(hex) => Rgb::from_hex(hex),
            ColorBase::Scheme(slot) if slot == "phClr" => {
                placeholder.and_then(|p| Rgb::from_hex(&p.hex))
            }
            ColorBase::Scheme(slot) => {
                let theme_slot = self.maps.resolve_slot(slot);
                self.scheme.get(&theme_slot).and_then(Rgb::from_hex)
            }
            ColorBase::ScRgb { r, g, b } => Some(Rgb::new(channel(*r), channel(*g), channel(*b))),
            ColorBase::Preset(name) => {
                Some(preset_color_hex(name).and_then(Rgb::from_hex).unwrap_or(Rgb::BLACK))
            }
            ColorBase::Hsl { hue, sat, lum } => Some(hsl::hsl_to_rgb(hsl::Hsl {
                h: *hue,
                s: *sat,
                l: *lum,
            })),
            ColorBase::System { name, last_color } => last_color
                .as_deref()
                .and_then(Rgb::from_hex)
                .or_else(|| system_color(name).and_then(Rgb::from_hex))
                .or(Some(Rgb::BLACK)),
        }
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::super::spec::ColorModifiers;
    use super::*;

    fn office_scheme() -> ThemeColorScheme {
        let xml = r#"<a:clrScheme name="Office">
            <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
            <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
            <a:dk2><a:srgbClr val="44546A"/></a:dk2>
            <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
            <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
            <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
        </a:clrScheme>"#;
        ThemeColorScheme::from_node(&XmlNode::parse(xml).unwrap())
    }

    fn scope() -> ColorScope {
        ColorScope::new(office_scheme(), ColorMapChain::default())
    }

    #[test]
    fn test_scheme_reads_rgb_and_system_colors() {
        let scheme = office_scheme();
        assert_eq!(scheme.get("dk1"), Some("000000"));
        assert_eq!(scheme.get("accent1"), Some("4472C4"));
        assert_eq!(scheme.accents()[1], "#ED7D31");
        assert_eq!(scheme.accents()[5], "");
    }

    #[test]
    fn test_default_slot_fallback() {
        let scope = scope();
        assert_eq!(scope.resolve(&ColorSpec::scheme("tx1"), None).hex, "#000000");
        assert_eq!(scope.resolve(&ColorSpec::scheme("bg1"), None).hex, "#FFFFFF");
        assert_eq!(scope.resolve(&ColorSpec::scheme("tx2"), None).hex, "#44546A");
    }

    #[test]
    fn test_slide_override_wins() {
        let chain = ColorMapChain {
            slide: Some(ColorMapping::default().with("tx1", "accent2")),
            layout: Some(ColorMapping::default().with("tx1", "lt2")),
            master: Some(ColorMapping::default().with("tx1", "dk2")),
        };
        assert_eq!(chain.resolve_slot("tx1"), "accent2");

        let layout_only = ColorMapChain {
            slide: None,
            ..chain.clone()
        };
        assert_eq!(layout_only.resolve_slot("tx1"), "lt2");

        let master_only = ColorMapChain {
            slide: None,
            layout: None,
            ..chain
        };
        assert_eq!(master_only.resolve_slot("tx1"), "dk2");
        assert_eq!(ColorMapChain::default().resolve_slot("bg2"), "lt2");
    }

    #[test]
    fn test_missing_slot_is_empty() {
        let resolved = scope().resolve(&ColorSpec::scheme("accent6"), None);
        assert!(resolved.is_empty());
        assert_eq!(resolved.css_or("#333333"), "#333333");
    }

    #[test]
    fn test_unknown_preset_is_black() {
        let spec = ColorSpec::new(ColorBase::Preset("mystery".to_string()));
        assert_eq!(scope().resolve(&spec, None).hex, "#000000");
    }

    #[test]
    fn test_modifier_order_is_fixed() {
        // shade is applied before tint regardless of markup order
        let spec = ColorSpec::rgb("FFFFFF").with_modifiers(ColorModifiers {
            shade: Some(0.5),
            tint: Some(0.5),
            ..Default::default()
        });
        assert_eq!(scope().resolve(&spec, None).hex, "#C0C0C0");
    }

    #[test]
    fn test_alpha_and_css() {
        let spec = ColorSpec::rgb("FF0000").with_modifiers(ColorModifiers {
            alpha: Some(0.5),
            ..Default::default()
        });
        let resolved = scope().resolve(&spec, None);
        assert_eq!(resolved.hex, "#FF0000");
        assert_eq!(resolved.to_css(), "rgba(255,0,0,0.5)");
    }

    #[test]
    fn test_placeholder_color_and_fill_ref() {
        let mut scope = scope();
        let shaded_ph = ColorSpec::scheme("phClr").with_modifiers(ColorModifiers {
            shade: Some(0.5),
            ..Default::default()
        });
        scope.fill_styles = vec![Some(ColorSpec::scheme("phClr")), Some(shaded_ph)];

        let accent = ColorSpec::scheme("accent2");
        assert_eq!(scope.resolve_fill_ref(1, Some(&accent)).hex, "#ED7D31");
        assert_ne!(scope.resolve_fill_ref(2, Some(&accent)).hex, "#ED7D31");
        assert!(scope.resolve_fill_ref(0, Some(&accent)).is_empty());

        let node = XmlNode::parse(r#"<p:style><a:fillRef idx="1"><a:schemeClr val="accent1"/></a:fillRef></p:style>"#)
            .unwrap();
        assert_eq!(scope.resolve_node(&node, None).hex, "#4472C4");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let spec = ColorSpec::scheme("accent1").with_modifiers(ColorModifiers {
            lum_mod: Some(0.6),
            lum_off: Some(0.4),
            ..Default::default()
        });
        let scope = scope();
        let first = scope.resolve(&spec, None);
        for _ in 0..10 {
            assert_eq!(scope.resolve(&spec, None), first);
        }
        assert_eq!(first.hex, "#8FABDB");
    }
}
