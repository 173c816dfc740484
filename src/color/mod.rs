//! Color resolution for DrawingML color references.
//!
//! A [`ColorSpec`] is parsed from markup, then resolved by a [`ColorScope`]
//! (theme colors, color map chain, theme fill styles) into a concrete
//! [`ResolvedColor`]. Modifiers are applied through an HSL round-trip in a
//! fixed order: alpha, hueMod, lumMod, lumOff, satMod, shade, tint.

pub mod hsl;
mod preset;
mod resolver;
mod spec;

pub use preset::preset_color_hex;
pub use resolver::{
    ColorMapChain, ColorMapping, ColorScope, ResolvedColor, ThemeColorScheme, MAPPED_SLOTS,
    THEME_SLOTS,
};
pub use spec::{ColorBase, ColorModifiers, ColorSpec};
