//! Priority-ordered converter dispatch.

use super::context::ConversionContext;
use super::converters;
use crate::error::Result;
use crate::model::{PptElement, PptxElement};

/// Turns one source element into zero or more output elements.
pub type ConvertFn = fn(&PptxElement, &mut ConversionContext<'_>) -> Result<Vec<PptElement>>;

/// Decides whether a converter handles an element.
pub type DetectFn = fn(&PptxElement) -> bool;

struct Entry {
    name: &'static str,
    priority: i32,
    detect: DetectFn,
    convert: ConvertFn,
}

/// Converter registry. Entries are tried in descending priority; ties keep
/// registration order.
#[derive(Default)]
pub struct ConverterRegistry {
    entries: Vec<Entry>,
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl ConverterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a converter for every element kind.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("text", converters::convert_text, |e| matches!(e, PptxElement::Text(_)), 0);
        registry.register("shape", converters::convert_shape, |e| matches!(e, PptxElement::Shape(_)), 0);
        registry.register("image", converters::convert_image, |e| matches!(e, PptxElement::Image(_)), 0);
        registry.register("video", converters::convert_video, |e| matches!(e, PptxElement::Video(_)), 0);
        registry.register("audio", converters::convert_audio, |e| matches!(e, PptxElement::Audio(_)), 0);
        registry.register("chart", converters::convert_chart, |e| matches!(e, PptxElement::Chart(_)), 0);
        registry.register("table", converters::convert_table, |e| matches!(e, PptxElement::Table(_)), 0);
        registry.register("latex", converters::convert_latex, |e| matches!(e, PptxElement::Latex(_)), 0);
        registry.register("line", converters::convert_line, |e| matches!(e, PptxElement::Line(_)), 0);
        registry
    }

    /// Add a converter.
    pub fn register(&mut self, name: &'static str, convert: ConvertFn, detect: DetectFn, priority: i32) {
        self.entries.push(Entry {
            name,
            priority,
            detect,
            convert,
        });
        // stable: equal priorities stay in registration order
        self.entries.sort_by_key(|e| std::cmp::Reverse(e.priority));
    }

    /// Converter names in dispatch order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Name of the converter that would handle an element.
    pub fn find(&self, element: &PptxElement) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| (e.detect)(element))
            .map(|e| e.name)
    }

    /// Run the first converter whose detector accepts the element.
    /// `Ok(None)` means no converter matched.
    pub fn convert_element(
        &self,
        element: &PptxElement,
        ctx: &mut ConversionContext<'_>,
    ) -> Result<Option<Vec<PptElement>>> {
        match self.entries.iter().find(|e| (e.detect)(element)) {
            Some(entry) => (entry.convert)(element, ctx).map(Some),
            None => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ElementBase, LatexSource};
    use crate::units::UnitConverter;

    fn latex() -> PptxElement {
        PptxElement::Latex(LatexSource {
            base: ElementBase::default(),
            latex: "x".to_string(),
            color: None,
        })
    }

    fn nothing(_: &PptxElement, _: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
        Ok(Vec::new())
    }

    fn failing(_: &PptxElement, _: &mut ConversionContext<'_>) -> Result<Vec<PptElement>> {
        Err(Error::element("latex", "boom"))
    }

    #[test]
    fn test_builtin_covers_every_kind() {
        let registry = ConverterRegistry::with_builtin();
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.find(&latex()), Some("latex"));
    }

    #[test]
    fn test_priority_then_registration_order() {
        let mut registry = ConverterRegistry::new();
        registry.register("low", nothing, |_| true, 0);
        registry.register("first", nothing, |_| true, 5);
        registry.register("second", nothing, |_| true, 5);
        assert_eq!(registry.names(), vec!["first", "second", "low"]);
        assert_eq!(registry.find(&latex()), Some("first"));
    }

    #[test]
    fn test_convert_element_dispatch() {
        let mut ctx = ConversionContext::new("req", UnitConverter::default(), true);

        let empty = ConverterRegistry::new();
        assert!(empty.convert_element(&latex(), &mut ctx).unwrap().is_none());

        let mut registry = ConverterRegistry::with_builtin();
        let converted = registry.convert_element(&latex(), &mut ctx).unwrap().unwrap();
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].kind(), "latex");

        registry.register("override", failing, |e| matches!(e, PptxElement::Latex(_)), 10);
        assert!(registry.convert_element(&latex(), &mut ctx).is_err());
    }
}
