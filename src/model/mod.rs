//! Data model for presentations.
//!
//! Source types describe what the slide parser extracts from the package,
//! output types describe the JSON document handed to the slide editor.
//! Converters turn the former into the latter.

mod element;
mod media;
mod presentation;
mod source;
mod stats;
mod text;

pub use element::*;
pub use media::*;
pub use presentation::*;
pub use source::*;
pub use stats::*;
pub use text::*;
