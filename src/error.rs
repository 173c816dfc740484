//! Error types for the pptxconv library.

use std::io;
use thiserror::Error;

/// Result type alias for pptxconv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a ZIP package nor an OLE compound file.
    #[error("Unknown file format")]
    UnknownFormat,

    /// Error reading the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// The package is password protected (encrypted OOXML).
    #[error("Protected file: {0}")]
    ProtectedFile(String),

    /// The package is not a usable presentation.
    #[error("Malformed package: {0}")]
    MalformedPackage(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// A single element could not be converted.
    #[error("Element conversion failed for {element}: {message}")]
    ElementConversion { element: String, message: String },

    /// Error producing the output document.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build an element conversion error.
    pub fn element(element: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ElementConversion {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Stable code reported to the caller alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "IO_ERROR",
            Error::UnknownFormat => "UNKNOWN_FORMAT",
            Error::ZipArchive(_) => "MALFORMED_PACKAGE",
            Error::XmlParse(_) => "MALFORMED_PACKAGE",
            Error::ProtectedFile(_) => "PROTECTED_FILE",
            Error::MalformedPackage(_) => "MALFORMED_PACKAGE",
            Error::MissingComponent(_) => "MALFORMED_PACKAGE",
            Error::ElementConversion { .. } => "ELEMENT_CONVERSION",
            Error::Serialization(_) => "SERIALIZATION",
        }
    }

    /// Whether the error aborts the whole conversion.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::ElementConversion { .. })
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
