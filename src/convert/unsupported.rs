//! Detection of constructs the output model cannot represent.
//!
//! The slide parser tags such elements with a subtype; they are removed here
//! and counted, one aggregated warning per category.

use crate::model::{codes, PptxElement, WarningCollector};
use crate::pptx::{SUBTYPE_ACTIVEX, SUBTYPE_OLE, SUBTYPE_SMARTART, SUBTYPE_UNHANDLED};

/// One kind of unsupported construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedCategory {
    /// Substring matched against the element subtype
    pub subtype: &'static str,
    pub code: &'static str,
    pub message: &'static str,
}

pub const CATEGORIES: [UnsupportedCategory; 4] = [
    UnsupportedCategory {
        subtype: SUBTYPE_SMARTART,
        code: codes::SMARTART_SKIPPED,
        message: "SmartArt diagram skipped",
    },
    UnsupportedCategory {
        subtype: SUBTYPE_ACTIVEX,
        code: codes::ACTIVEX_SKIPPED,
        message: "ActiveX control skipped",
    },
    UnsupportedCategory {
        subtype: SUBTYPE_OLE,
        code: codes::OLE_SKIPPED,
        message: "Embedded OLE object skipped",
    },
    UnsupportedCategory {
        subtype: SUBTYPE_UNHANDLED,
        code: codes::ELEMENT_UNHANDLED,
        message: "Unrecognized element skipped",
    },
];

/// Category of an unsupported element, matched case-insensitively on its subtype.
pub fn classify(element: &PptxElement) -> Option<&'static UnsupportedCategory> {
    let subtype = element.base().subtype.as_deref()?.to_ascii_lowercase();
    CATEGORIES.iter().find(|c| subtype.contains(c.subtype))
}

/// Remove unsupported elements, adding one warning per category with its
/// count. Returns the kept elements and the number removed.
pub fn filter_unsupported(
    elements: Vec<PptxElement>,
    warnings: &mut WarningCollector,
) -> (Vec<PptxElement>, usize) {
    let mut counts = [0usize; CATEGORIES.len()];
    let mut kept = Vec::with_capacity(elements.len());

    for element in elements {
        match classify(&element) {
            Some(category) => {
                if let Some(i) = CATEGORIES.iter().position(|c| c == category) {
                    counts[i] += 1;
                }
                tracing::debug!(code = category.code, name = %element.base().name, "dropping unsupported element");
            }
            None => kept.push(element),
        }
    }

    let mut removed = 0;
    for (category, count) in CATEGORIES.iter().zip(counts) {
        warnings.add(category.code, category.message, count);
        removed += count;
    }
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementBase, Geometry, ShapeSource};

    fn shape(subtype: Option<&str>) -> PptxElement {
        PptxElement::Shape(ShapeSource {
            base: ElementBase {
                subtype: subtype.map(str::to_string),
                ..Default::default()
            },
            geometry: Geometry::default(),
            fill: None,
            outline: None,
            text: None,
        })
    }

    #[test]
    fn test_smartart_aggregated_into_one_warning() {
        let elements = vec![
            shape(Some("smartart")),
            shape(None),
            shape(Some("SmartArt")),
            shape(Some("smartart")),
            shape(None),
        ];
        let mut warnings = WarningCollector::new();
        let (kept, removed) = filter_unsupported(elements, &mut warnings);

        assert_eq!(kept.len(), 2);
        assert_eq!(removed, 3);
        assert_eq!(warnings.as_slice().len(), 1);
        assert_eq!(warnings.get(codes::SMARTART_SKIPPED).unwrap().count, 3);
    }

    #[test]
    fn test_categories() {
        assert_eq!(classify(&shape(Some("activex"))).unwrap().code, codes::ACTIVEX_SKIPPED);
        assert_eq!(classify(&shape(Some("ole"))).unwrap().code, codes::OLE_SKIPPED);
        assert!(classify(&shape(None)).is_none());
        assert!(classify(&shape(Some("custom"))).is_none());
    }
}
