//! Per-request conversion state.

use std::collections::HashMap;

use crate::color::{ColorScope, ColorSpec, ResolvedColor};
use crate::model::{codes, MediaEntry, MediaRef, WarningCollector};
use crate::pptx::{SlideScope, Theme};
use crate::units::UnitConverter;
use uuid::Uuid;

/// Element and slide id source.
#[derive(Debug, Clone)]
pub enum IdGenerator {
    /// Random ids derived from UUID v4
    Random,
    /// `{prefix}-{n}` with one counter per prefix, for reproducible output
    Sequential(HashMap<&'static str, u64>),
}

impl IdGenerator {
    pub fn new(deterministic: bool) -> Self {
        if deterministic {
            IdGenerator::Sequential(HashMap::new())
        } else {
            IdGenerator::Random
        }
    }

    pub fn next(&mut self, prefix: &'static str) -> String {
        match self {
            IdGenerator::Random => {
                let uuid = Uuid::new_v4().simple().to_string();
                format!("{}-{}", prefix, &uuid[..12])
            }
            IdGenerator::Sequential(counters) => {
                let n = counters.entry(prefix).or_insert(0);
                *n += 1;
                format!("{}-{}", prefix, n)
            }
        }
    }
}

/// State owned by one conversion request and threaded through every converter.
///
/// The media map holds every part loaded so far, keyed by
/// [`MediaRef::key`], so relationship ids from different slides and scopes
/// never collide.
#[derive(Debug)]
pub struct ConversionContext<'a> {
    pub request_id: String,
    pub units: UnitConverter,
    /// Zero-based index of the slide being converted
    pub slide_index: usize,
    pub media: HashMap<String, MediaEntry>,
    pub colors: ColorScope,
    pub theme: Option<&'a Theme>,
    /// Theme minor font, the default typeface of text without one
    pub body_font: Option<String>,
    pub warnings: WarningCollector,
    ids: IdGenerator,
}

impl<'a> ConversionContext<'a> {
    pub fn new(request_id: impl Into<String>, units: UnitConverter, deterministic_ids: bool) -> Self {
        Self {
            request_id: request_id.into(),
            units,
            slide_index: 0,
            media: HashMap::new(),
            colors: ColorScope::default(),
            theme: None,
            body_font: None,
            warnings: WarningCollector::new(),
            ids: IdGenerator::new(deterministic_ids),
        }
    }

    /// Switch to another slide's colors and theme.
    pub fn begin_slide(&mut self, slide: &SlideScope<'a>) {
        self.slide_index = slide.index;
        self.colors = slide.colors.clone();
        self.theme = Some(slide.theme);
        self.body_font = slide.theme.body_font().map(str::to_string);
    }

    pub fn next_id(&mut self, prefix: &'static str) -> String {
        self.ids.next(prefix)
    }

    /// Register a loaded media part for the current slide.
    pub fn insert_media(&mut self, media: &MediaRef, entry: MediaEntry) {
        self.media.insert(media.key(self.slide_index), entry);
    }

    pub fn has_media(&self, media: &MediaRef) -> bool {
        self.media.contains_key(&media.key(self.slide_index))
    }

    /// Data URI of a media part, recording a missing-resource warning when absent.
    pub fn media_uri(&mut self, media: &MediaRef) -> Option<String> {
        let key = media.key(self.slide_index);
        match self.media.get(&key) {
            Some(entry) => Some(entry.data_uri()),
            None => {
                tracing::warn!(key = %key, "media resource not found");
                self.warnings
                    .record(codes::MISSING_RESOURCE, "Referenced media part not found");
                None
            }
        }
    }

    /// Resolve a color to CSS, or `fallback` when it cannot be resolved.
    pub fn css_color(&self, spec: Option<&ColorSpec>, fallback: &str) -> String {
        spec.map(|s| self.colors.resolve(s, None))
            .unwrap_or_default()
            .css_or(fallback)
    }

    /// Resolve a color, keeping the result for `phClr` substitution.
    pub fn resolve(&self, spec: &ColorSpec) -> ResolvedColor {
        self.colors.resolve(spec, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorMapChain, ThemeColorScheme};
    use crate::model::RelScope;

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new(true);
        assert_eq!(ids.next("el"), "el-1");
        assert_eq!(ids.next("el"), "el-2");
        assert_eq!(ids.next("slide"), "slide-1");
    }

    #[test]
    fn test_random_ids_are_unique() {
        let mut ids = IdGenerator::new(false);
        let a = ids.next("el");
        let b = ids.next("el");
        assert_ne!(a, b);
        assert!(a.starts_with("el-"));
        assert_eq!(a.len(), "el-".len() + 12);
    }

    #[test]
    fn test_media_lookup_is_slide_scoped() {
        let mut ctx = ConversionContext::new("req", UnitConverter::default(), true);
        let image = MediaRef::new(RelScope::Slide, "rId2");
        ctx.slide_index = 0;
        ctx.insert_media(&image, MediaEntry::from_bytes("image1.png", b"png"));

        assert!(ctx.media_uri(&image).is_some());
        assert!(ctx.warnings.is_empty());

        ctx.slide_index = 1;
        assert!(ctx.media_uri(&image).is_none());
        assert_eq!(ctx.warnings.get(codes::MISSING_RESOURCE).unwrap().count, 1);
    }

    #[test]
    fn test_css_color_fallback() {
        let mut ctx = ConversionContext::new("req", UnitConverter::default(), true);
        let mut scheme = ThemeColorScheme::new();
        scheme.insert("accent2", "ED7D31");
        ctx.colors = ColorScope::new(scheme, ColorMapChain::default());

        assert_eq!(ctx.css_color(Some(&ColorSpec::scheme("accent2")), "#000000"), "#ED7D31");
        assert_eq!(ctx.css_color(Some(&ColorSpec::scheme("accent6")), "#000000"), "#000000");
        assert_eq!(ctx.css_color(None, "#111111"), "#111111");
    }
}
