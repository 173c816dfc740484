//! Generic XML node tree with path accessors.
//!
//! Package parts are parsed once into [`XmlNode`] trees. Tags keep their
//! namespace prefix verbatim (`a:srgbClr`, `p:spTree`) and attributes live in
//! the `attrs` map, so lookups read like the markup they come from:
//!
//! ```
//! use pptxconv::xml::XmlNode;
//!
//! let root = XmlNode::parse(r#"<p:sp><p:spPr><a:xfrm rot="60000"/></p:spPr></p:sp>"#)?;
//! let xfrm = root.path(&["p:spPr", "a:xfrm"]).unwrap();
//! assert_eq!(xfrm.attr_i64("rot"), Some(60000));
//! # Ok::<(), pptxconv::Error>(())
//! ```

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// An element of a parsed XML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Qualified tag name, prefix included.
    pub tag: String,
    /// Attributes keyed by their qualified name.
    pub attrs: HashMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Concatenated character data directly inside this element.
    pub text: String,
}

impl XmlNode {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder helper: add an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Builder helper: add a child element.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => stack.push(node_from_start(&e)),
                Ok(Event::Empty(e)) => {
                    let node = node_from_start(&e);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => {
                            root.get_or_insert(node);
                        }
                    }
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| Error::XmlParse("unbalanced end tag".to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => {
                            root.get_or_insert(node);
                        }
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(Error::XmlParse(format!(
                "unexpected end of document inside <{}>",
                stack.last().map(|n| n.tag.as_str()).unwrap_or_default()
            )));
        }

        root.ok_or_else(|| Error::XmlParse("document has no root element".to_string()))
    }

    /// Tag name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.tag.rsplit(':').next().unwrap_or(&self.tag)
    }

    /// Check the qualified tag name.
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Attribute value by qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Attribute parsed as an integer.
    pub fn attr_i64(&self, name: &str) -> Option<i64> {
        self.attr(name).and_then(|v| v.trim().parse().ok())
    }

    /// Attribute parsed as a float.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(|v| v.trim().parse().ok())
    }

    /// Attribute parsed as an OOXML boolean (`1`, `true`, `on`).
    pub fn attr_bool(&self, name: &str) -> Option<bool> {
        self.attr(name)
            .map(|v| matches!(v.trim(), "1" | "true" | "on"))
    }

    /// First child with the given qualified tag.
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All children with the given qualified tag.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Follow a chain of child tags.
    pub fn path(&self, path: &[&str]) -> Option<&XmlNode> {
        let mut node = self;
        for tag in path {
            node = node.child(tag)?;
        }
        Some(node)
    }

    /// Attribute of the element at the end of a child path.
    pub fn path_attr(&self, path: &[&str], name: &str) -> Option<&str> {
        self.path(path).and_then(|n| n.attr(name))
    }

    /// First descendant (depth-first, self excluded) with the given tag.
    pub fn find(&self, tag: &str) -> Option<&XmlNode> {
        for child in &self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a XmlNode> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: &str, out: &mut Vec<&'a XmlNode>) {
        for child in &self.children {
            if child.tag == tag {
                out.push(child);
            }
            child.collect(tag, out);
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

fn node_from_start(e: &BytesStart<'_>) -> XmlNode {
    let mut node = XmlNode::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        node.attrs.insert(key, value);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_prefixes_and_attrs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<p:sld xmlns:p="urn:p" xmlns:a="urn:a">
  <p:cSld><p:spTree><a:srgbClr val="FF0000"><a:alpha val="50000"/></a:srgbClr></p:spTree></p:cSld>
</p:sld>"#;
        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.tag, "p:sld");
        assert_eq!(root.local_name(), "sld");

        let clr = root.path(&["p:cSld", "p:spTree", "a:srgbClr"]).unwrap();
        assert_eq!(clr.attr("val"), Some("FF0000"));
        assert_eq!(clr.path_attr(&["a:alpha"], "val"), Some("50000"));
    }

    #[test]
    fn test_text_is_unescaped() {
        let root = XmlNode::parse("<a:p><a:r><a:t>A &amp; B &lt;C&gt;</a:t></a:r></a:p>").unwrap();
        assert_eq!(root.find("a:t").unwrap().text, "A & B <C>");
        assert_eq!(root.text_content(), "A & B <C>");
    }

    #[test]
    fn test_find_all_in_document_order() {
        let root = XmlNode::parse("<r><a:t>1</a:t><x><a:t>2</a:t></x><a:t>3</a:t></r>").unwrap();
        let texts: Vec<_> = root.find_all("a:t").iter().map(|n| n.text.clone()).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_attr_helpers() {
        let node = XmlNode::new("a:off")
            .with_attr("x", "914400")
            .with_attr("flipH", "1")
            .with_attr("pct", "12.5");
        assert_eq!(node.attr_i64("x"), Some(914400));
        assert_eq!(node.attr_bool("flipH"), Some(true));
        assert_eq!(node.attr_bool("flipV"), None);
        assert_eq!(node.attr_f64("pct"), Some(12.5));
    }

    #[test]
    fn test_unbalanced_document_fails() {
        assert!(XmlNode::parse("<a><b></a>").is_err());
        assert!(XmlNode::parse("").is_err());
    }
}
