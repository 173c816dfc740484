//! Parsing context: the presentation part, its layouts, masters and themes.
//!
//! Each part keeps its own [`Relationships`]; relationship ids are local to
//! the part that declares them, so the maps are never merged. A
//! [`SlideScope`] bundles everything needed to read one slide.

use super::fill::find_fill;
use super::theme::Theme;
use crate::color::{ColorMapChain, ColorMapping, ColorScope, ColorSpec};
use crate::container::{rel_types, CoreProperties, PptxPackage, Relationships};
use crate::detect::PRESENTATION_PART;
use crate::error::{Error, Result};
use crate::model::{FillSpec, MediaEntry, MediaRef, PlaceholderRef, RelScope};
use crate::units::SlideSize;
use crate::xml::XmlNode;
use std::cell::RefCell;
use std::collections::HashMap;

/// Placeholder shapes of a layout or master, indexed three ways.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderIndex {
    nodes: Vec<XmlNode>,
    by_id: HashMap<String, usize>,
    by_idx: HashMap<u32, usize>,
    by_type: HashMap<String, usize>,
}

impl PlaceholderIndex {
    /// Index every placeholder shape in a `p:spTree` (groups included).
    pub fn from_tree(sp_tree: &XmlNode) -> Self {
        let mut index = Self::default();
        index.collect(sp_tree);
        index
    }

    fn collect(&mut self, parent: &XmlNode) {
        for shape in &parent.children {
            if shape.is("p:grpSp") {
                self.collect(shape);
                continue;
            }
            let Some(ph) = placeholder_node(shape) else {
                continue;
            };
            let slot = self.nodes.len();
            if let Some(id) = non_visual_props(shape).and_then(|n| n.path_attr(&["p:cNvPr"], "id")) {
                self.by_id.entry(id.to_string()).or_insert(slot);
            }
            if let Some(idx) = ph.attr_i64("idx").and_then(|i| u32::try_from(i).ok()) {
                self.by_idx.entry(idx).or_insert(slot);
            }
            let kind = normalize_placeholder_type(ph.attr("type").unwrap_or("body"));
            self.by_type.entry(kind.to_string()).or_insert(slot);
            self.nodes.push(shape.clone());
        }
    }

    pub fn by_id(&self, id: &str) -> Option<&XmlNode> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    pub fn by_idx(&self, idx: u32) -> Option<&XmlNode> {
        self.by_idx.get(&idx).map(|&i| &self.nodes[i])
    }

    pub fn by_type(&self, kind: &str) -> Option<&XmlNode> {
        self.by_type
            .get(normalize_placeholder_type(kind))
            .map(|&i| &self.nodes[i])
    }

    /// Match a slide placeholder: by `idx` first, then by type.
    pub fn lookup(&self, ph: &PlaceholderRef) -> Option<&XmlNode> {
        ph.idx
            .and_then(|idx| self.by_idx(idx))
            .or_else(|| self.by_type(ph.kind_or_body()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Placeholder types that inherit from a differently named master type.
fn normalize_placeholder_type(kind: &str) -> &str {
    match kind {
        "ctrTitle" => "title",
        "subTitle" | "obj" => "body",
        other => other,
    }
}

/// `p:nvSpPr`, `p:nvPicPr`, ... of a shape.
pub fn non_visual_props(shape: &XmlNode) -> Option<&XmlNode> {
    shape
        .children
        .iter()
        .find(|c| c.tag.starts_with("p:nv") && c.tag.ends_with("Pr"))
}

/// `p:ph` of a shape, if it is a placeholder.
pub fn placeholder_node(shape: &XmlNode) -> Option<&XmlNode> {
    non_visual_props(shape)?.path(&["p:nvPr", "p:ph"])
}

/// Parse `p:ph` into a placeholder reference.
pub fn placeholder_ref(shape: &XmlNode) -> Option<PlaceholderRef> {
    let ph = placeholder_node(shape)?;
    Some(PlaceholderRef {
        kind: ph.attr("type").map(str::to_string),
        idx: ph.attr_i64("idx").and_then(|i| u32::try_from(i).ok()),
    })
}

fn color_override(root: &XmlNode) -> Option<ColorMapping> {
    root.path(&["p:clrMapOvr", "a:overrideClrMapping"])
        .map(ColorMapping::from_node)
}

/// A slide master.
#[derive(Debug, Clone)]
pub struct MasterPart {
    pub path: String,
    pub tree: XmlNode,
    pub rels: Relationships,
    pub theme_path: Option<String>,
    pub placeholders: PlaceholderIndex,
    pub color_map: ColorMapping,
    /// `p:txStyles/p:titleStyle`
    pub title_style: Option<XmlNode>,
    /// `p:txStyles/p:bodyStyle`
    pub body_style: Option<XmlNode>,
    /// `p:txStyles/p:otherStyle`
    pub other_style: Option<XmlNode>,
}

impl MasterPart {
    fn load(package: &PptxPackage, path: &str) -> Result<Self> {
        let tree = package.read_xml(path)?;
        let rels = package.read_relationships(path)?;
        let theme_path = rels
            .first_of_type(rel_types::THEME)
            .and_then(|r| rels.target_path(&r.id));
        let placeholders = tree
            .path(&["p:cSld", "p:spTree"])
            .map(PlaceholderIndex::from_tree)
            .unwrap_or_default();
        let color_map = tree
            .child("p:clrMap")
            .map(ColorMapping::from_node)
            .unwrap_or_default();
        let style = |tag: &str| tree.path(&["p:txStyles", tag]).cloned();

        Ok(Self {
            path: path.to_string(),
            title_style: style("p:titleStyle"),
            body_style: style("p:bodyStyle"),
            other_style: style("p:otherStyle"),
            tree,
            rels,
            theme_path,
            placeholders,
            color_map,
        })
    }

    /// Master text style for a placeholder (`None` for ordinary shapes).
    pub fn text_style_for(&self, ph: Option<&PlaceholderRef>) -> Option<&XmlNode> {
        match ph {
            Some(ph) if ph.is_title() => self.title_style.as_ref(),
            Some(ph) => match ph.kind_or_body() {
                "body" | "subTitle" | "obj" => self.body_style.as_ref(),
                _ => self.other_style.as_ref(),
            },
            None => self.other_style.as_ref(),
        }
    }
}

/// A slide layout.
#[derive(Debug, Clone)]
pub struct LayoutPart {
    pub path: String,
    pub tree: XmlNode,
    pub rels: Relationships,
    pub master_path: Option<String>,
    pub placeholders: PlaceholderIndex,
    pub color_override: Option<ColorMapping>,
    pub show_master_shapes: bool,
}

impl LayoutPart {
    fn load(package: &PptxPackage, path: &str) -> Result<Self> {
        let tree = package.read_xml(path)?;
        let rels = package.read_relationships(path)?;
        let master_path = rels
            .first_of_type(rel_types::SLIDE_MASTER)
            .and_then(|r| rels.target_path(&r.id));
        let placeholders = tree
            .path(&["p:cSld", "p:spTree"])
            .map(PlaceholderIndex::from_tree)
            .unwrap_or_default();

        Ok(Self {
            path: path.to_string(),
            color_override: color_override(&tree),
            show_master_shapes: tree.attr_bool("showMasterSp").unwrap_or(true),
            tree,
            rels,
            master_path,
            placeholders,
        })
    }
}

/// A slide listed in `p:sldIdLst`.
#[derive(Debug, Clone)]
struct SlideEntry {
    id: String,
    path: String,
    rels: Relationships,
    layout_path: Option<String>,
}

/// Everything loaded from a package before slides are read.
///
/// Built once per source file and read-only afterwards, except for the
/// media cache.
#[derive(Debug)]
pub struct ParsingContext {
    package: PptxPackage,
    slide_size: SlideSize,
    slides: Vec<SlideEntry>,
    default_text_style: Option<XmlNode>,
    layouts: HashMap<String, LayoutPart>,
    masters: HashMap<String, MasterPart>,
    themes: HashMap<String, (Theme, Relationships)>,
    media_cache: RefCell<HashMap<String, Option<MediaEntry>>>,
    core: CoreProperties,
    fallback_theme: Theme,
    empty_rels: Relationships,
}

impl ParsingContext {
    /// Read `presentation.xml` and every layout, master and theme its slides use.
    pub fn build(package: PptxPackage) -> Result<Self> {
        let root = package.read_xml(PRESENTATION_PART).map_err(|e| match e {
            Error::XmlParse(msg) => Error::MalformedPackage(msg),
            other => other,
        })?;
        let presentation_rels = package.read_relationships(PRESENTATION_PART)?;

        let slide_size = root
            .child("p:sldSz")
            .and_then(|sz| {
                Some(SlideSize {
                    width: sz.attr_i64("cx").filter(|v| *v > 0)?,
                    height: sz.attr_i64("cy").filter(|v| *v > 0)?,
                })
            })
            .unwrap_or_default();

        let mut context = Self {
            slide_size,
            slides: Vec::new(),
            default_text_style: root.child("p:defaultTextStyle").cloned(),
            layouts: HashMap::new(),
            masters: HashMap::new(),
            themes: HashMap::new(),
            media_cache: RefCell::new(HashMap::new()),
            core: package.core_properties(),
            fallback_theme: Theme::default(),
            empty_rels: Relationships::default(),
            package,
        };

        let slide_ids = root
            .path(&["p:sldIdLst"])
            .map(|list| list.children_named("p:sldId").collect::<Vec<_>>())
            .unwrap_or_default();
        for sld_id in slide_ids {
            let rel_id = sld_id.attr("r:id").unwrap_or_default();
            let path = presentation_rels
                .target_path(rel_id)
                .filter(|p| context.package.exists(p))
                .ok_or_else(|| {
                    Error::MalformedPackage(format!("slide {} has no slide part", rel_id))
                })?;
            let rels = context.package.read_relationships(&path)?;
            let layout_path = rels
                .first_of_type(rel_types::SLIDE_LAYOUT)
                .and_then(|r| rels.target_path(&r.id));
            if let Some(layout) = &layout_path {
                context.load_layout_chain(layout)?;
            }
            context.slides.push(SlideEntry {
                id: sld_id.attr("id").unwrap_or_default().to_string(),
                path,
                rels,
                layout_path,
            });
        }

        tracing::debug!(
            slides = context.slides.len(),
            layouts = context.layouts.len(),
            masters = context.masters.len(),
            "parsing context built"
        );
        Ok(context)
    }

    fn load_layout_chain(&mut self, layout_path: &str) -> Result<()> {
        if self.layouts.contains_key(layout_path) || !self.package.exists(layout_path) {
            return Ok(());
        }
        let layout = LayoutPart::load(&self.package, layout_path)?;

        if let Some(master_path) = layout.master_path.clone() {
            if !self.masters.contains_key(&master_path) && self.package.exists(&master_path) {
                let master = MasterPart::load(&self.package, &master_path)?;
                if let Some(theme_path) = master.theme_path.clone() {
                    self.load_theme(&theme_path)?;
                }
                self.masters.insert(master_path, master);
            }
        }
        self.layouts.insert(layout_path.to_string(), layout);
        Ok(())
    }

    fn load_theme(&mut self, path: &str) -> Result<()> {
        if self.themes.contains_key(path) || !self.package.exists(path) {
            return Ok(());
        }
        let theme = Theme::from_node(&self.package.read_xml(path)?);
        let rels = self.package.read_relationships(path)?;
        self.themes.insert(path.to_string(), (theme, rels));
        Ok(())
    }

    pub fn package(&self) -> &PptxPackage {
        &self.package
    }

    pub fn slide_size(&self) -> SlideSize {
        self.slide_size
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn core(&self) -> &CoreProperties {
        &self.core
    }

    /// `p:defaultTextStyle` of the presentation.
    pub fn default_text_style(&self) -> Option<&XmlNode> {
        self.default_text_style.as_ref()
    }

    pub fn layout(&self, path: &str) -> Option<&LayoutPart> {
        self.layouts.get(path)
    }

    pub fn master(&self, path: &str) -> Option<&MasterPart> {
        self.masters.get(path)
    }

    /// Load a media part, cached by path. Parts over `max_bytes` count as missing.
    pub fn load_media(&self, path: &str, max_bytes: Option<u64>) -> Option<MediaEntry> {
        if let Some(cached) = self.media_cache.borrow().get(path) {
            return cached.clone();
        }

        let too_large = max_bytes
            .zip(self.package.size_of(path))
            .is_some_and(|(max, size)| size > max);
        let entry = if too_large {
            tracing::debug!(path, "media part exceeds size limit");
            None
        } else {
            self.package
                .read_binary(path)
                .ok()
                .map(|data| MediaEntry::from_bytes(path, &data))
        };
        self.media_cache
            .borrow_mut()
            .insert(path.to_string(), entry.clone());
        entry
    }

    /// Open one slide with its layout, master, theme and color scope.
    pub fn slide(&self, index: usize) -> Result<SlideScope<'_>> {
        let entry = self
            .slides
            .get(index)
            .ok_or_else(|| Error::MissingComponent(format!("slide {}", index + 1)))?;
        let tree = self.package.read_xml(&entry.path)?;

        let layout = entry.layout_path.as_deref().and_then(|p| self.layouts.get(p));
        let master = layout
            .and_then(|l| l.master_path.as_deref())
            .and_then(|p| self.masters.get(p));
        let theme_entry = master
            .and_then(|m| m.theme_path.as_deref())
            .and_then(|p| self.themes.get(p));
        let theme = theme_entry.map(|(t, _)| t).unwrap_or(&self.fallback_theme);

        let maps = ColorMapChain {
            slide: color_override(&tree),
            layout: layout.and_then(|l| l.color_override.clone()),
            master: master.map(|m| m.color_map.clone()),
        };
        let mut colors = ColorScope::new(theme.colors.clone(), maps);
        colors.fill_styles = theme.fill_style_colors();

        Ok(SlideScope {
            index,
            id: entry.id.clone(),
            path: entry.path.clone(),
            tree,
            rels: &entry.rels,
            layout,
            master,
            theme,
            theme_rels: theme_entry.map(|(_, r)| r).unwrap_or(&self.empty_rels),
            colors,
            context: self,
        })
    }
}

/// One slide plus the parts it inherits from.
#[derive(Debug)]
pub struct SlideScope<'a> {
    /// Zero-based position in the presentation
    pub index: usize,
    /// `p:sldId@id`
    pub id: String,
    pub path: String,
    pub tree: XmlNode,
    pub rels: &'a Relationships,
    pub layout: Option<&'a LayoutPart>,
    pub master: Option<&'a MasterPart>,
    pub theme: &'a Theme,
    pub theme_rels: &'a Relationships,
    pub colors: ColorScope,
    pub context: &'a ParsingContext,
}

impl<'a> SlideScope<'a> {
    /// `p:cSld/p:spTree` of the slide.
    pub fn shape_tree(&self) -> Option<&XmlNode> {
        self.tree.path(&["p:cSld", "p:spTree"])
    }

    /// Relationships of one scope.
    pub fn rels(&self, scope: RelScope) -> &'a Relationships {
        match scope {
            RelScope::Slide => self.rels,
            RelScope::Layout => self.layout.map(|l| &l.rels).unwrap_or(&self.context.empty_rels),
            RelScope::Master => self.master.map(|m| &m.rels).unwrap_or(&self.context.empty_rels),
            RelScope::Theme => self.theme_rels,
        }
    }

    /// Package path of a scoped relationship target.
    pub fn resolve_target(&self, media: &MediaRef) -> Option<String> {
        self.rels(media.scope).target_path(&media.rel_id)
    }

    /// URL of an external relationship target (hyperlinks, linked media).
    pub fn external_target(&self, scope: RelScope, rel_id: &str) -> Option<String> {
        self.rels(scope)
            .get(rel_id)
            .filter(|r| r.external)
            .map(|r| r.target.clone())
    }

    /// Load a scoped media part.
    pub fn load_media(&self, media: &MediaRef, max_bytes: Option<u64>) -> Option<MediaEntry> {
        let path = self.resolve_target(media)?;
        self.context.load_media(&path, max_bytes)
    }

    /// Layout placeholder matching a slide placeholder.
    pub fn layout_placeholder(&self, ph: &PlaceholderRef) -> Option<&'a XmlNode> {
        self.layout?.placeholders.lookup(ph)
    }

    /// Master placeholder matching a slide placeholder (by type only).
    pub fn master_placeholder(&self, ph: &PlaceholderRef) -> Option<&'a XmlNode> {
        self.master?.placeholders.by_type(ph.kind_or_body())
    }

    pub fn show_master_shapes(&self) -> bool {
        self.tree.attr_bool("showMasterSp").unwrap_or(true)
            && self.layout.is_none_or(|l| l.show_master_shapes)
    }

    /// Background fill: slide, then layout, then master.
    pub fn background(&self) -> Option<FillSpec> {
        [
            (Some(&self.tree), RelScope::Slide),
            (self.layout.map(|l| &l.tree), RelScope::Layout),
            (self.master.map(|m| &m.tree), RelScope::Master),
        ]
        .into_iter()
        .filter_map(|(tree, scope)| Some((tree?.path(&["p:cSld", "p:bg"])?, scope)))
        .find_map(|(bg, scope)| background_fill(bg, scope))
    }

    /// Plain text of the notes slide's body placeholder.
    pub fn notes_text(&self) -> Option<String> {
        let path = self
            .rels
            .first_of_type(rel_types::NOTES_SLIDE)
            .and_then(|r| self.rels.target_path(&r.id))?;
        let notes = self.context.package.read_xml(&path).ok()?;
        let tree = notes.path(&["p:cSld", "p:spTree"])?;

        let body = tree.children.iter().find(|shape| {
            placeholder_node(shape).is_some_and(|ph| ph.attr("type") == Some("body"))
        })?;
        let text = body
            .child("p:txBody")?
            .children_named("a:p")
            .map(paragraph_text)
            .collect::<Vec<_>>()
            .join("\n");
        let text = text.trim().to_string();
        (!text.is_empty()).then_some(text)
    }
}

fn background_fill(bg: &XmlNode, scope: RelScope) -> Option<FillSpec> {
    if let Some(bg_pr) = bg.child("p:bgPr") {
        return find_fill(bg_pr, scope);
    }
    let bg_ref = bg.child("p:bgRef")?;
    Some(FillSpec::StyleRef {
        idx: bg_ref.attr_i64("idx").and_then(|i| u32::try_from(i).ok())?,
        color: ColorSpec::from_parent(bg_ref),
    })
}

/// Text of one `a:p`, with `a:br` as newlines.
pub(crate) fn paragraph_text(paragraph: &XmlNode) -> String {
    paragraph
        .children
        .iter()
        .map(|c| match c.tag.as_str() {
            "a:r" | "a:fld" => c.child("a:t").map(|t| t.text.clone()).unwrap_or_default(),
            "a:br" => "\n".to_string(),
            _ => String::new(),
        })
        .collect()
}
