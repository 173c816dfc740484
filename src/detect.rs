//! Package checks that run before any XML is parsed.
//!
//! Encrypted OOXML files are OLE compound files holding `EncryptionInfo` and
//! `EncryptedPackage` streams. They are rejected up front: a readable ZIP by
//! its directory listing, anything else by scanning the head of the file for
//! the stream names.

use crate::container::{decode_xml_bytes, PptxPackage};
use crate::error::{Error, Result};
use memchr::memmem;

/// ZIP local file header: `PK\x03\x04`
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE compound file signature.
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Bytes scanned by the encryption heuristic.
const SCAN_WINDOW: usize = 8 * 1024;

const ENCRYPTION_MARKERS: [&str; 2] = ["EncryptedPackage", "EncryptionInfo"];

/// Content type of the main presentation part.
const PRESENTATION_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Macro-enabled presentation content type.
const MACRO_CONTENT_TYPE: &str =
    "application/vnd.ms-powerpoint.presentation.macroEnabled.main+xml";

pub const PRESENTATION_PART: &str = "ppt/presentation.xml";

pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

pub fn is_ole_compound(data: &[u8]) -> bool {
    data.len() >= 8 && data[..8] == OLE_MAGIC
}

/// Whether an archive entry name is an encryption stream.
pub fn is_encryption_entry(name: &str) -> bool {
    let file = name.rsplit('/').next().unwrap_or(name);
    ENCRYPTION_MARKERS.iter().any(|m| file.eq_ignore_ascii_case(m))
}

/// Search the first 8 KB for an encryption stream name, in ASCII or UTF-16LE.
pub fn has_encryption_marker(data: &[u8]) -> bool {
    let head = &data[..data.len().min(SCAN_WINDOW)];
    ENCRYPTION_MARKERS.iter().any(|marker| {
        let wide: Vec<u8> = marker.bytes().flat_map(|b| [b, 0]).collect();
        memmem::find(head, marker.as_bytes()).is_some() || memmem::find(head, &wide).is_some()
    })
}

/// Reject password-protected input.
///
/// A readable ZIP is judged by its directory listing alone. The byte
/// heuristic only covers input that is not a readable ZIP, such as the OLE
/// container of an encrypted package.
pub fn ensure_not_protected(data: &[u8]) -> Result<()> {
    if is_zip_file(data) {
        if let Ok(archive) = zip::ZipArchive::new(std::io::Cursor::new(data)) {
            return match archive.file_names().find(|n| is_encryption_entry(n)) {
                Some(name) => Err(Error::ProtectedFile(format!(
                    "package contains an '{}' entry",
                    name
                ))),
                None => Ok(()),
            };
        }
    }

    if has_encryption_marker(data) {
        return Err(Error::ProtectedFile(
            "encryption stream signature found in package header".to_string(),
        ));
    }

    Ok(())
}

/// Run the protection check, then open the ZIP package.
pub fn open_package(data: Vec<u8>) -> Result<PptxPackage> {
    ensure_not_protected(&data)?;

    if is_ole_compound(&data) {
        return Err(Error::MalformedPackage(
            "legacy binary presentation (OLE compound file) is not supported".to_string(),
        ));
    }
    if !is_zip_file(&data) {
        return Err(Error::UnknownFormat);
    }

    let package = PptxPackage::from_bytes(data)?;
    ensure_presentation(&package)?;
    Ok(package)
}

/// Check that the package is a presentation.
pub fn ensure_presentation(package: &PptxPackage) -> Result<()> {
    if package.exists(PRESENTATION_PART) {
        return Ok(());
    }

    let declared = package
        .read_binary("[Content_Types].xml")
        .ok()
        .and_then(|bytes| decode_xml_bytes(&bytes).ok())
        .is_some_and(|types| {
            types.contains(PRESENTATION_CONTENT_TYPE) || types.contains(MACRO_CONTENT_TYPE)
        });

    if declared {
        Err(Error::MissingComponent(PRESENTATION_PART.to_string()))
    } else {
        Err(Error::MalformedPackage(
            "not a presentation package".to_string(),
        ))
    }
}

/// Number of VBA projects in the package.
pub fn count_macro_projects(package: &PptxPackage) -> usize {
    package
        .list_files()
        .iter()
        .filter(|n| n.to_ascii_lowercase().ends_with("vbaproject.bin"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn zip_with(entries: &[&str]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for name in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(b"<x/>").unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_magic_checks() {
        assert!(is_zip_file(&[0x50, 0x4B, 0x03, 0x04, 0x00]));
        assert!(!is_zip_file(&[0x50, 0x4B]));
        assert!(is_ole_compound(&OLE_MAGIC));
        assert!(!is_ole_compound(&[0xD0, 0xCF]));
    }

    #[test]
    fn test_encrypted_entry_rejected() {
        let data = zip_with(&["EncryptionInfo", "EncryptedPackage"]);
        assert!(matches!(
            ensure_not_protected(&data),
            Err(Error::ProtectedFile(_))
        ));
    }

    #[test]
    fn test_marker_heuristic() {
        let mut ole = OLE_MAGIC.to_vec();
        ole.extend_from_slice(&[0u8; 64]);
        for unit in "EncryptedPackage".encode_utf16() {
            ole.extend_from_slice(&unit.to_le_bytes());
        }
        assert!(has_encryption_marker(&ole));
        assert!(matches!(
            ensure_not_protected(&ole),
            Err(Error::ProtectedFile(_))
        ));

        // markers past the scan window are ignored
        let mut late = vec![0u8; SCAN_WINDOW];
        late.extend_from_slice(b"EncryptionInfo");
        assert!(!has_encryption_marker(&late));
    }

    #[test]
    fn test_open_package_checks() {
        assert!(matches!(
            open_package(vec![0, 1, 2, 3]),
            Err(Error::UnknownFormat)
        ));

        let mut ole = OLE_MAGIC.to_vec();
        ole.extend_from_slice(&[0u8; 32]);
        assert!(matches!(
            open_package(ole),
            Err(Error::MalformedPackage(_))
        ));

        let not_pptx = zip_with(&["word/document.xml"]);
        assert!(matches!(
            open_package(not_pptx),
            Err(Error::MalformedPackage(_))
        ));

        let pptx = zip_with(&[PRESENTATION_PART, "ppt/vbaProject.bin"]);
        let package = open_package(pptx).unwrap();
        assert_eq!(count_macro_projects(&package), 1);
    }

    #[test]
    fn test_marker_in_readable_zip_ignored() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("ppt/media/EncryptionInfo-diagram.png", stored).unwrap();
        writer.write_all(b"EncryptedPackage").unwrap();
        let data = writer.finish().unwrap().into_inner();

        assert!(has_encryption_marker(&data));
        assert!(ensure_not_protected(&data).is_ok());
    }

    #[test]
    fn test_encryption_entry_names() {
        assert!(is_encryption_entry("EncryptedPackage"));
        assert!(is_encryption_entry("sub/encryptioninfo"));
        assert!(!is_encryption_entry("ppt/slides/slide1.xml"));
    }
}
