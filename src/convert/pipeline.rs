//! End-to-end conversion of one package.

use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::context::ConversionContext;
use super::converters::convert_background;
use super::registry::ConverterRegistry;
use super::unsupported::filter_unsupported;
use crate::detect;
use crate::error::{Error, Result};
use crate::model::{
    codes, CanvasSize, ConversionStage, ConversionStats, ConversionStatus, FillSpec, MediaRef,
    Presentation, PresentationMetadata, PptxElement, RelScope, Slide, Warning, WarningCollector,
};
use crate::options::ConvertOptions;
use crate::pptx::fill::parse_fill;
use crate::pptx::{ParsingContext, SlideParser, SlideScope};
use crate::units::UnitConverter;

/// Converts packages into presentations.
///
/// Holds the stage, statistics and warnings of the latest run so a host can
/// report progress. One converter runs one conversion at a time; concurrent
/// conversions each use their own instance.
#[derive(Debug)]
pub struct PresentationConverter {
    options: ConvertOptions,
    registry: ConverterRegistry,
    stage: ConversionStage,
    stats: ConversionStats,
    warnings: WarningCollector,
}

impl PresentationConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_registry(options, ConverterRegistry::with_builtin())
    }

    /// Use a custom converter registry.
    pub fn with_registry(options: ConvertOptions, registry: ConverterRegistry) -> Self {
        Self {
            options,
            registry,
            stage: ConversionStage::Pending,
            stats: ConversionStats::default(),
            warnings: WarningCollector::new(),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn stage(&self) -> ConversionStage {
        self.stage
    }

    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Warnings recorded so far in the current run.
    pub fn warnings(&self) -> &[Warning] {
        self.warnings.as_slice()
    }

    /// Convert package bytes.
    ///
    /// Package-level problems (protection, broken structure) fail the whole
    /// run. Element-level problems are counted in the stats and the run
    /// continues.
    pub fn run(&mut self, data: Vec<u8>) -> Result<Presentation> {
        self.stage = ConversionStage::Pending;
        self.stats = ConversionStats::default();
        self.warnings = WarningCollector::new();

        let started = Instant::now();
        let result = self.run_stages(data);
        self.stats.duration_ms = started.elapsed().as_millis() as u64;
        self.stats.warnings = self.warnings.as_slice().to_vec();

        match result {
            Ok(presentation) => {
                self.stats.finish();
                info!(
                    request_id = %presentation.metadata.request_id,
                    slides = presentation.slides.len(),
                    duration_ms = self.stats.duration_ms,
                    status = ?self.stats.status,
                    "conversion finished"
                );
                Ok(presentation)
            }
            Err(e) => {
                warn!(error = %e, stage = ?self.stage, "conversion failed");
                self.stage = ConversionStage::Failed;
                self.stats.status = ConversionStatus::Failure;
                self.stats.errors.push(e.to_string());
                Err(e)
            }
        }
    }

    fn run_stages(&mut self, data: Vec<u8>) -> Result<Presentation> {
        let package = detect::open_package(data)?;
        let macros = detect::count_macro_projects(&package);
        self.warnings
            .add(codes::MACRO_SKIPPED, "VBA macros are not converted", macros);
        self.stage = ConversionStage::Loaded;

        let context = ParsingContext::build(package)?;
        self.stage = ConversionStage::Parsed;

        let request_id = self
            .options
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let units = UnitConverter::new(self.options.coordinate_mode, context.slide_size());
        let mut ctx = ConversionContext::new(request_id, units, self.options.deterministic_ids);

        let mut slides = Vec::with_capacity(context.slide_count());
        for index in 0..context.slide_count() {
            let scope = context.slide(index).map_err(|e| match e {
                Error::XmlParse(msg) => Error::MalformedPackage(format!("slide {}: {}", index + 1, msg)),
                other => other,
            })?;
            slides.push(self.convert_slide(&scope, &mut ctx));
        }
        self.stage = ConversionStage::Converted;

        self.warnings.merge(&ctx.warnings);
        let (width, height) = ctx.units.canvas_size();
        let core = context.core();
        let presentation = Presentation {
            slides,
            size: CanvasSize { width, height },
            metadata: PresentationMetadata {
                source_format: "pptx".to_string(),
                converted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                version: env!("CARGO_PKG_VERSION").to_string(),
                request_id: ctx.request_id.clone(),
                title: core.title.clone(),
                author: core.author.clone(),
            },
            warnings: self.warnings.as_slice().iter().map(Warning::to_string).collect(),
        };
        self.stage = ConversionStage::Serialized;
        Ok(presentation)
    }

    fn convert_slide<'a>(&mut self, scope: &SlideScope<'a>, ctx: &mut ConversionContext<'a>) -> Slide {
        let elements = SlideParser::new(scope).parse();
        debug!(slide = scope.index + 1, elements = elements.len(), "parsed slide");
        self.stats.total_elements += elements.len();

        let (elements, skipped) = filter_unsupported(elements, &mut self.warnings);
        self.stats.skipped_elements += skipped;

        ctx.begin_slide(scope);
        let background = scope.background();
        let mut wanted: Vec<MediaRef> = elements.iter().flat_map(|e| media_wanted(e, ctx)).collect();
        if let Some(fill) = &background {
            wanted.extend(fill_media(fill, ctx));
        }
        for media in wanted {
            if ctx.has_media(&media) {
                continue;
            }
            if let Some(entry) = scope.load_media(&media, self.options.max_media_bytes) {
                ctx.insert_media(&media, entry);
            }
        }

        let mut converted = Vec::with_capacity(elements.len());
        for element in &elements {
            match self.registry.convert_element(element, ctx) {
                Ok(Some(out)) => {
                    self.stats.converted_elements += 1;
                    converted.extend(out);
                }
                Ok(None) => {
                    self.stats.skipped_elements += 1;
                    self.warnings.record(
                        codes::ELEMENT_UNHANDLED,
                        "No converter accepted the element",
                    );
                }
                Err(e) => {
                    warn!(slide = scope.index + 1, kind = element.kind(), error = %e, "element conversion failed");
                    self.stats.failed_elements += 1;
                    self.stats.errors.push(e.to_string());
                }
            }
        }

        let background = background.and_then(|fill| convert_background(&fill, ctx));
        let remark = if self.options.include_notes {
            scope.notes_text().unwrap_or_default()
        } else {
            String::new()
        };

        Slide {
            id: ctx.next_id("slide"),
            elements: converted,
            background,
            remark,
        }
    }
}

/// Media an element needs, including an image behind a theme fill style.
fn media_wanted(element: &PptxElement, ctx: &ConversionContext<'_>) -> Vec<MediaRef> {
    let mut wanted: Vec<MediaRef> = element.media_refs().into_iter().cloned().collect();
    let style_fill = match element {
        PptxElement::Shape(e) => e.fill.as_ref(),
        PptxElement::Text(e) => e.fill.as_ref(),
        _ => None,
    };
    if let Some(fill @ FillSpec::StyleRef { .. }) = style_fill {
        wanted.extend(fill_media(fill, ctx));
    }
    wanted
}

/// Media referenced by a fill, following a style reference into the theme.
fn fill_media(fill: &FillSpec, ctx: &ConversionContext<'_>) -> Option<MediaRef> {
    match fill {
        FillSpec::Image(media) => Some(media.clone()),
        FillSpec::StyleRef { idx, .. } => {
            match ctx
                .theme
                .and_then(|t| t.fill_for_index(*idx))
                .and_then(|node| parse_fill(node, RelScope::Theme))
            {
                Some(FillSpec::Image(media)) => Some(media),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Convert a package held in memory.
pub fn convert_bytes(data: Vec<u8>, options: &ConvertOptions) -> Result<(Presentation, ConversionStats)> {
    let mut converter = PresentationConverter::new(options.clone());
    let presentation = converter.run(data)?;
    Ok((presentation, converter.stats().clone()))
}
