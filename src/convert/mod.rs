//! Conversion from source elements to the output document.
//!
//! [`PresentationConverter`] drives a run: it opens the package, builds the
//! parsing context, extracts each slide's elements, drops unsupported ones,
//! and dispatches the rest through the [`ConverterRegistry`].

mod context;
pub mod converters;
mod pipeline;
mod registry;
pub mod unsupported;

pub use context::{ConversionContext, IdGenerator};
pub use pipeline::{convert_bytes, PresentationConverter};
pub use registry::{ConvertFn, ConverterRegistry, DetectFn};
