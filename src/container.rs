//! ZIP package access for presentation parts.

use crate::error::{Error, Result};
use crate::xml::XmlNode;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read};

/// Relationship type suffixes used while walking a presentation.
pub mod rel_types {
    pub const SLIDE: &str = "/slide";
    pub const SLIDE_LAYOUT: &str = "/slideLayout";
    pub const SLIDE_MASTER: &str = "/slideMaster";
    pub const THEME: &str = "/theme";
    pub const NOTES_SLIDE: &str = "/notesSlide";
    pub const IMAGE: &str = "/image";
    pub const VIDEO: &str = "/video";
    pub const AUDIO: &str = "/audio";
    pub const MEDIA: &str = "/media";
    pub const CHART: &str = "/chart";
    pub const HYPERLINK: &str = "/hyperlink";
}

/// One `Relationship` entry of a `.rels` part.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    /// Target as written, relative to the source part's folder
    pub target: String,
    pub external: bool,
}

impl Relationship {
    /// Whether the type URI ends with the given suffix (e.g. `/image`).
    pub fn is_type(&self, suffix: &str) -> bool {
        self.rel_type.ends_with(suffix)
    }
}

/// The relationships of a single part. Ids are only unique within one part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Source part the targets are relative to
    pub source: String,
    pub by_id: HashMap<String, Relationship>,
    /// Ids in document order
    order: Vec<String>,
}

impl Relationships {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    pub fn insert(&mut self, rel: Relationship) {
        if !self.by_id.contains_key(&rel.id) {
            self.order.push(rel.id.clone());
        }
        self.by_id.insert(rel.id.clone(), rel);
    }

    /// Relationships in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// First relationship whose type ends with `suffix`.
    pub fn first_of_type(&self, suffix: &str) -> Option<&Relationship> {
        self.iter().find(|r| r.is_type(suffix))
    }

    /// Package path of an internal target.
    pub fn target_path(&self, id: &str) -> Option<String> {
        let rel = self.get(id)?;
        if rel.external {
            return None;
        }
        Some(resolve_path(&self.source, &rel.target))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Document properties from `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

/// Read-only view of a `.pptx` ZIP package.
pub struct PptxPackage {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
    names: Vec<String>,
}

impl PptxPackage {
    /// Open a package held in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        let names = archive.file_names().map(String::from).collect();
        Ok(Self {
            archive: RefCell::new(archive),
            names,
        })
    }

    /// Entry names in archive order.
    pub fn list_files(&self) -> &[String] {
        &self.names
    }

    pub fn exists(&self, path: &str) -> bool {
        self.names.iter().any(|n| n == path)
    }

    /// Uncompressed size of an entry.
    pub fn size_of(&self, path: &str) -> Option<u64> {
        let mut archive = self.archive.borrow_mut();
        let file = archive.by_name(path).ok()?;
        Some(file.size())
    }

    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read a part as text, honoring UTF-8/UTF-16 byte order marks.
    pub fn read_text(&self, path: &str) -> Result<String> {
        decode_xml_bytes(&self.read_binary(path)?)
    }

    /// Read and parse an XML part.
    pub fn read_xml(&self, path: &str) -> Result<XmlNode> {
        let text = self.read_text(path)?;
        XmlNode::parse(&text).map_err(|e| match e {
            Error::XmlParse(msg) => Error::XmlParse(format!("{}: {}", path, msg)),
            other => other,
        })
    }

    /// Relationships of a part; a part without a `.rels` file has none.
    pub fn read_relationships(&self, part: &str) -> Result<Relationships> {
        let rels_path = rels_path_for(part);
        let mut rels = Relationships::new(part);
        if !self.exists(&rels_path) {
            return Ok(rels);
        }

        let root = self.read_xml(&rels_path)?;
        for node in root.children.iter().filter(|n| n.local_name() == "Relationship") {
            let Some(id) = node.attr("Id") else {
                continue;
            };
            rels.insert(Relationship {
                id: id.to_string(),
                rel_type: node.attr("Type").unwrap_or_default().to_string(),
                target: node.attr("Target").unwrap_or_default().to_string(),
                external: node
                    .attr("TargetMode")
                    .is_some_and(|m| m.eq_ignore_ascii_case("external")),
            });
        }
        Ok(rels)
    }

    /// Core properties; missing or unreadable parts yield empty values.
    pub fn core_properties(&self) -> CoreProperties {
        let Ok(root) = self.read_xml("docProps/core.xml") else {
            return CoreProperties::default();
        };

        let mut props = CoreProperties::default();
        for child in &root.children {
            let text = child.text.trim();
            if text.is_empty() {
                continue;
            }
            let value = Some(text.to_string());
            match child.local_name() {
                "title" => props.title = value,
                "creator" => props.author = value,
                "subject" => props.subject = value,
                "created" => props.created = value,
                "modified" => props.modified = value,
                _ => {}
            }
        }
        props
    }
}

impl std::fmt::Debug for PptxPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PptxPackage")
            .field("entries", &self.names.len())
            .finish()
    }
}

/// `ppt/slides/slide1.xml` -> `ppt/slides/_rels/slide1.xml.rels`
pub fn rels_path_for(part: &str) -> String {
    let part = part.trim_start_matches('/');
    if part.is_empty() {
        return "_rels/.rels".to_string();
    }
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against the part that declares it.
pub fn resolve_path(source: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = match source.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Decode XML bytes: UTF-8 (with or without BOM) and UTF-16 LE/BE with BOM.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    let invalid = |e: &dyn std::fmt::Display| Error::XmlParse(format!("invalid encoding: {}", e));

    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(rest.to_vec()).map_err(|e| invalid(&e));
    }

    let utf16 = match bytes {
        [0xFF, 0xFE, rest @ ..] => Some((rest, true)),
        [0xFE, 0xFF, rest @ ..] => Some((rest, false)),
        _ => None,
    };
    if let Some((rest, little_endian)) = utf16 {
        let units = rest.chunks_exact(2).map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        });
        let text = char::decode_utf16(units)
            .collect::<std::result::Result<String, _>>()
            .map_err(|e| invalid(&e))?;
        // the declaration still names UTF-16, which quick-xml would honor
        return Ok(text
            .replacen("encoding=\"UTF-16\"", "encoding=\"UTF-8\"", 1)
            .replacen("encoding=\"utf-16\"", "encoding=\"UTF-8\"", 1));
    }

    Ok(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn package(entries: &[(&str, &str)]) -> PptxPackage {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        let data = writer.finish().unwrap().into_inner();
        PptxPackage::from_bytes(data).unwrap()
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_path("ppt/slides/slide1.xml", "../media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            resolve_path("ppt/presentation.xml", "slides/slide2.xml"),
            "ppt/slides/slide2.xml"
        );
        assert_eq!(
            resolve_path("ppt/slides/slide1.xml", "/ppt/media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(resolve_path("", "ppt/presentation.xml"), "ppt/presentation.xml");
    }

    #[test]
    fn test_rels_path_for() {
        assert_eq!(
            rels_path_for("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(rels_path_for(""), "_rels/.rels");
    }

    #[test]
    fn test_read_relationships_scoped_to_part() {
        let pkg = package(&[
            ("ppt/slides/slide1.xml", "<p:sld/>"),
            (
                "ppt/slides/_rels/slide1.xml.rels",
                r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
                    <Relationship Id="rId1" Type="http://x/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
                    <Relationship Id="rId2" Type="http://x/relationships/image" Target="../media/image1.png"/>
                    <Relationship Id="rId3" Type="http://x/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>
                </Relationships>"#,
            ),
        ]);

        let rels = pkg.read_relationships("ppt/slides/slide1.xml").unwrap();
        assert_eq!(rels.len(), 3);
        assert_eq!(
            rels.target_path("rId2").as_deref(),
            Some("ppt/media/image1.png")
        );
        assert!(rels.get("rId3").unwrap().external);
        assert_eq!(rels.target_path("rId3"), None);
        assert_eq!(
            rels.first_of_type(rel_types::SLIDE_LAYOUT).map(|r| r.id.as_str()),
            Some("rId1")
        );

        let none = pkg.read_relationships("ppt/slides/slide9.xml").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_core_properties() {
        let pkg = package(&[(
            "docProps/core.xml",
            r#"<cp:coreProperties xmlns:cp="c" xmlns:dc="d"><dc:title>Quarterly</dc:title><dc:creator>Kim</dc:creator></cp:coreProperties>"#,
        )]);
        let props = pkg.core_properties();
        assert_eq!(props.title.as_deref(), Some("Quarterly"));
        assert_eq!(props.author.as_deref(), Some("Kim"));
        assert_eq!(props.subject, None);
    }

    #[test]
    fn test_decode_utf16_le() {
        let text = "<?xml version=\"1.0\" encoding=\"UTF-16\"?><a/>";
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let decoded = decode_xml_bytes(&bytes).unwrap();
        assert!(decoded.contains("encoding=\"UTF-8\""));
        assert!(decoded.ends_with("<a/>"));
    }

    #[test]
    fn test_missing_part() {
        let pkg = package(&[("a.xml", "<a/>")]);
        assert!(matches!(
            pkg.read_binary("b.xml"),
            Err(Error::MissingComponent(_))
        ));
    }
}
