//! Shape path synthesis.
//!
//! Preset geometries are rendered from a template table: one parameter set is
//! computed from the target box and the optional adjustment, then every
//! placeholder in the preset's template is substituted. Custom geometries
//! (`a:custGeom`) are scaled from their own path space in [`custom`].

pub mod custom;
mod presets;

use presets::PRESET_TEMPLATES;

pub use custom::{
    parse_custom_geometry, render_custom_paths, Coord, CustomGeometry, CustomPath, PathCommand,
    RenderedCustom,
};

/// Path used for unknown presets and square-cornered rectangles.
const RECT_TEMPLATE: &str = "M0,0 L{w},0 L{w},{h} L0,{h} Z";

/// A generated SVG path with its view box.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePath {
    pub path: String,
    /// `[width, height]` of the view box, equal to the target box.
    pub view_box: [f64; 2],
}

/// Values a template can reference.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathParams {
    w: f64,
    h: f64,
    /// Corner radius
    r: f64,
    /// Adjustment as a fraction, 0.25 when absent
    a: f64,
    /// Ring thickness for donut-like shapes
    t: f64,
}

impl PathParams {
    pub(crate) fn new(width: f64, height: f64, adjustment: Option<f64>) -> Self {
        let w = width.max(0.0);
        let h = height.max(0.0);
        let ss = w.min(h);
        let fraction = adjustment.map(|v| (v / 100_000.0).clamp(0.0, 1.0));
        let r = match fraction {
            Some(f) => f * ss / 2.0,
            None => ss * 0.1,
        };
        let a = fraction.unwrap_or(0.25);
        let t = (a * ss).min(ss / 2.0);
        Self { w, h, r, a, t }
    }

    /// Look up a named value.
    pub(crate) fn value(&self, name: &str) -> Option<f64> {
        let Self { w, h, r, a, t } = *self;
        let v = match name {
            "w" => w,
            "h" => h,
            "w2" | "cx" | "rx" => w / 2.0,
            "h2" | "cy" | "ry" => h / 2.0,
            "ss" => w.min(h),
            "r" => r,
            "wr" => w - r,
            "hr" => h - r,
            "hd" => h * 0.1,
            "hs" => h * 0.9,
            "wd" => w * 0.1,
            "ws" => w * 0.9,
            "aw" => a * w,
            "ah" => a * h,
            "waw" => w - a * w,
            "hah" => h - a * h,
            "t" => t,
            "wt" => w - t,
            "irx" => (w / 2.0 - t).max(0.0),
            "iry" => (h / 2.0 - t).max(0.0),
            _ => return None,
        };
        Some(v)
    }
}

/// Generate the SVG path for a preset geometry.
///
/// Names are matched case-insensitively. Unknown presets produce a plain
/// rectangle. A `roundRect` whose adjustment is exactly zero is emitted as a
/// rectangle without curve commands.
pub fn generate_shape_path(
    preset: &str,
    width: f64,
    height: f64,
    adjustment: Option<f64>,
) -> ShapePath {
    let params = PathParams::new(width, height, adjustment);
    let template = if preset.eq_ignore_ascii_case("roundRect") && adjustment == Some(0.0) {
        RECT_TEMPLATE
    } else {
        preset_template(preset).unwrap_or(RECT_TEMPLATE)
    };

    ShapePath {
        path: substitute(template, &params),
        view_box: [round2(params.w), round2(params.h)],
    }
}

/// Whether a preset name has its own template.
pub fn is_known_preset(preset: &str) -> bool {
    preset_template(preset).is_some()
}

/// All preset names with a template, in table order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESET_TEMPLATES.iter().map(|(name, _)| *name)
}

fn preset_template(preset: &str) -> Option<&'static str> {
    PRESET_TEMPLATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(preset))
        .map(|(_, template)| *template)
}

/// Replace every `{name}` / `{name*factor}` token. Tokens naming an unknown
/// value are left in place.
fn substitute(template: &str, params: &PathParams) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let token = &after[..close];
        match resolve_token(token, params) {
            Some(v) => out.push_str(&format_number(v)),
            None => {
                out.push('{');
                out.push_str(token);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

fn resolve_token(token: &str, params: &PathParams) -> Option<f64> {
    match token.split_once('*') {
        Some((name, factor)) => {
            let factor: f64 = factor.trim().parse().ok()?;
            Some(params.value(name.trim())? * factor)
        }
        None => params.value(token.trim()),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Format with at most two decimals and no trailing zeros.
pub(crate) fn format_number(v: f64) -> String {
    let rounded = round2(v);
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
