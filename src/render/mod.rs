//! Output rendering.
//!
//! [`html`] turns rich text into the HTML fragments stored in text and shape
//! elements; [`json`] serializes the finished presentation.
//!
//! # Example
//!
//! ```no_run
//! use pptxconv::{convert_file, render::*, ConvertOptions};
//!
//! let output = convert_file("deck.pptx", &ConvertOptions::default())?;
//! let json = to_json(&output.presentation, JsonFormat::Pretty)?;
//! # Ok::<(), pptxconv::Error>(())
//! ```

pub mod html;
mod json;

pub use html::{body_to_html, escape_html, paragraphs_to_html, HtmlContext};
pub use json::{from_json, to_json, to_value, JsonFormat};
