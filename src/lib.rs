//! # pptxconv
//!
//! PowerPoint (PPTX) to JSON conversion for web slide editors.
//!
//! A package is parsed into source elements (shapes, text, pictures, media,
//! charts, tables, equations, lines), every color, unit and geometry is
//! resolved against the slide's theme, layout and master, and the result is
//! a self-contained JSON document with pixel coordinates, CSS colors, HTML
//! text and inline data-URI media.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pptxconv::{convert_file, render, ConvertOptions};
//!
//! let output = convert_file("deck.pptx", &ConvertOptions::default())?;
//! println!("slides: {}", output.presentation.slides.len());
//! println!("status: {:?}", output.stats.status);
//!
//! let json = render::to_json(&output.presentation, render::JsonFormat::Pretty)?;
//! std::fs::write("deck.json", json)?;
//! # Ok::<(), pptxconv::Error>(())
//! ```
//!
//! ## Progress Reporting
//!
//! ```no_run
//! use pptxconv::{ConvertOptions, PresentationConverter};
//!
//! let mut converter = PresentationConverter::new(ConvertOptions::default());
//! let presentation = converter.run(std::fs::read("deck.pptx")?)?;
//! for warning in converter.warnings() {
//!     println!("{}", warning);
//! }
//! # Ok::<(), pptxconv::Error>(())
//! ```

pub mod charts;
pub mod color;
pub mod container;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod options;
pub mod pptx;
pub mod render;
pub mod shapes;
pub mod units;
pub mod xml;

// Re-exports
pub use color::{ColorScope, ColorSpec, ResolvedColor};
pub use container::{PptxPackage, Relationship, Relationships};
pub use convert::{ConversionContext, ConverterRegistry, PresentationConverter};
pub use error::{Error, Result};
pub use model::{
    ConversionStage, ConversionStats, ConversionStatus, PptElement, PptxElement, Presentation,
    Slide, Warning,
};
pub use options::ConvertOptions;
pub use shapes::generate_shape_path;
pub use units::{emu_to_pixel, emu_to_pixel_x, emu_to_pixel_y, CoordinateMode, UnitConverter};

use serde::Serialize;
use std::path::Path;

/// A converted presentation with the statistics of its run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutput {
    pub presentation: Presentation,
    pub stats: ConversionStats,
}

/// Convert PPTX bytes.
///
/// # Example
///
/// ```no_run
/// use pptxconv::{convert, ConvertOptions};
///
/// let data = std::fs::read("deck.pptx")?;
/// let output = convert(&data, &ConvertOptions::default())?;
/// # Ok::<(), pptxconv::Error>(())
/// ```
pub fn convert(data: &[u8], options: &ConvertOptions) -> Result<ConversionOutput> {
    let (presentation, stats) = convert::convert_bytes(data.to_vec(), options)?;
    Ok(ConversionOutput {
        presentation,
        stats,
    })
}

/// Convert a PPTX file.
pub fn convert_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<ConversionOutput> {
    let data = std::fs::read(path.as_ref())?;
    convert(&data, options)
}

/// Convert a PPTX file straight to JSON.
///
/// # Example
///
/// ```no_run
/// let json = pptxconv::to_json("deck.pptx")?;
/// std::fs::write("deck.json", json)?;
/// # Ok::<(), pptxconv::Error>(())
/// ```
pub fn to_json(path: impl AsRef<Path>) -> Result<String> {
    let output = convert_file(path, &ConvertOptions::default())?;
    render::to_json(&output.presentation, render::JsonFormat::Compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_rejects_unknown_bytes() {
        let err = convert(b"not a presentation", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat));
    }

    #[test]
    fn test_convert_file_missing_path() {
        let err = convert_file("does-not-exist.pptx", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
