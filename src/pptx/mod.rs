//! PPTX (PowerPoint) package reading.
//!
//! [`ParsingContext`] loads the presentation part with its layouts, masters
//! and themes; [`SlideParser`] extracts the source elements of one slide.

mod context;
pub mod fill;
pub mod omml;
mod parser;
pub mod text;
mod theme;

pub use context::{
    non_visual_props, placeholder_node, placeholder_ref, LayoutPart, MasterPart,
    ParsingContext, PlaceholderIndex, SlideScope,
};
pub use parser::{
    parse_xfrm, SlideParser, SUBTYPE_ACTIVEX, SUBTYPE_OLE, SUBTYPE_SMARTART, SUBTYPE_UNHANDLED,
};
pub use theme::{representative_color, FontCollection, Theme, ThemeLineStyle};
