//! Slide element extraction.
//!
//! Walks a slide's `p:spTree` and turns every drawing into a [`PptxElement`].
//! Geometry stays in EMU and colors stay unresolved; placeholder geometry,
//! fills and text styles are inherited from the layout and master here.

use super::context::{non_visual_props, placeholder_ref, SlideScope};
use super::fill::{find_fill, parse_outline};
use super::omml::{find_math, omml_to_latex};
use super::text::{parse_text_body, TextStyles};
use crate::charts;
use crate::color::ColorSpec;
use crate::model::{
    ChartSource, CropRect, ElementBase, FillSpec, GeometryTransform, Geometry, ImageSource,
    LatexSource, LineSource, MediaRef, MediaSource, OutlineSpec, PlaceholderRef, PptxElement,
    RelScope, ShapeSource, TableCellSource, TableRowSource, TableSource, TextBody, TextSource,
};
use crate::shapes::parse_custom_geometry;
use crate::xml::XmlNode;

/// Subtype of SmartArt graphic frames.
pub const SUBTYPE_SMARTART: &str = "smartart";
/// Subtype of ActiveX controls.
pub const SUBTYPE_ACTIVEX: &str = "activex";
/// Subtype of embedded OLE objects.
pub const SUBTYPE_OLE: &str = "ole";
/// Subtype of drawings with no element counterpart (ink, unknown frames).
pub const SUBTYPE_UNHANDLED: &str = "unhandled";

const URI_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const URI_TABLE: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";
const URI_DIAGRAM: &str = "http://schemas.openxmlformats.org/drawingml/2006/diagram";
const URI_OLE: &str = "http://schemas.openxmlformats.org/presentationml/2006/ole";

/// Presets drawn as lines rather than closed shapes.
const LINE_PRESETS: &[&str] = &[
    "line",
    "straightConnector1",
    "bentConnector2",
    "bentConnector3",
    "bentConnector4",
    "bentConnector5",
    "curvedConnector2",
    "curvedConnector3",
    "curvedConnector4",
    "curvedConnector5",
];

/// Extracts the elements of one slide.
pub struct SlideParser<'s, 'a> {
    slide: &'s SlideScope<'a>,
}

impl<'s, 'a> SlideParser<'s, 'a> {
    pub fn new(slide: &'s SlideScope<'a>) -> Self {
        Self { slide }
    }

    /// Every element of the slide in z-order, groups flattened.
    pub fn parse(&self) -> Vec<PptxElement> {
        let mut elements = Vec::new();
        if let Some(tree) = self.slide.shape_tree() {
            self.parse_children(tree, &mut elements);
        }
        if let Some(c_sld) = self.slide.tree.child("p:cSld") {
            for control in c_sld.find_all("p:control") {
                elements.push(self.parse_control(control));
            }
        }
        tracing::debug!(
            slide = self.slide.index,
            elements = elements.len(),
            "slide elements extracted"
        );
        elements
    }

    fn parse_children(&self, parent: &XmlNode, out: &mut Vec<PptxElement>) {
        for child in &parent.children {
            match child.tag.as_str() {
                "p:sp" => out.push(self.parse_shape(child)),
                "p:cxnSp" => out.push(self.parse_connector(child)),
                "p:pic" => out.push(self.parse_picture(child)),
                "p:graphicFrame" => out.push(self.parse_graphic_frame(child)),
                "p:grpSp" => self.parse_group(child, out),
                "mc:AlternateContent" => self.parse_alternate_content(child, out),
                "p:contentPart" => {
                    out.push(unsupported(self.base(child, &["p:xfrm"]), SUBTYPE_UNHANDLED))
                }
                _ => {}
            }
        }
    }

    fn parse_group(&self, group: &XmlNode, out: &mut Vec<PptxElement>) {
        let mut children = Vec::new();
        self.parse_children(group, &mut children);

        if let Some(xfrm) = group.path(&["p:grpSpPr", "a:xfrm"]) {
            let mapping = GroupMapping::from_xfrm(xfrm);
            for element in &mut children {
                mapping.apply(&mut element.base_mut().transform);
            }
        }
        out.extend(children);
    }

    fn parse_alternate_content(&self, node: &XmlNode, out: &mut Vec<PptxElement>) {
        if let Some(choice) = node.child("mc:Choice") {
            if let Some(math) = find_math(choice) {
                let shape = choice.find("p:sp").unwrap_or(choice);
                out.push(self.parse_math(shape, math));
                return;
            }
        }
        if let Some(fallback) = node.child("mc:Fallback") {
            self.parse_children(fallback, out);
        }
    }

    fn base(&self, shape: &XmlNode, xfrm_path: &[&str]) -> ElementBase {
        let c_nv_pr = non_visual_props(shape).and_then(|n| n.child("p:cNvPr"));
        let placeholder = placeholder_ref(shape);
        let transform = shape
            .path(xfrm_path)
            .map(parse_xfrm)
            .or_else(|| {
                placeholder
                    .as_ref()
                    .and_then(|ph| self.inherited_xfrm(ph))
            })
            .unwrap_or_default();

        ElementBase {
            id: c_nv_pr.and_then(|n| n.attr("id")).unwrap_or_default().to_string(),
            name: c_nv_pr
                .and_then(|n| n.attr("name"))
                .unwrap_or_default()
                .to_string(),
            transform,
            subtype: None,
            placeholder,
            scope: RelScope::Slide,
        }
    }

    /// Placeholder position from the layout, then the master.
    fn inherited_xfrm(&self, ph: &PlaceholderRef) -> Option<GeometryTransform> {
        [
            self.slide.layout_placeholder(ph),
            self.slide.master_placeholder(ph),
        ]
        .into_iter()
        .flatten()
        .find_map(|node| node.path(&["p:spPr", "a:xfrm"]))
        .map(parse_xfrm)
    }

    /// The shape followed by the placeholders it inherits from.
    fn lineage<'n>(&self, shape: &'n XmlNode, ph: Option<&PlaceholderRef>) -> Vec<(&'n XmlNode, RelScope)>
    where
        'a: 'n,
    {
        let mut chain = vec![(shape, RelScope::Slide)];
        if let Some(ph) = ph {
            if let Some(node) = self.slide.layout_placeholder(ph) {
                chain.push((node, RelScope::Layout));
            }
            if let Some(node) = self.slide.master_placeholder(ph) {
                chain.push((node, RelScope::Master));
            }
        }
        chain
    }

    /// Explicit fill along the lineage, then the first style reference.
    fn shape_fill(&self, lineage: &[(&XmlNode, RelScope)]) -> Option<FillSpec> {
        lineage
            .iter()
            .find_map(|(node, scope)| node.child("p:spPr").and_then(|sp| find_fill(sp, *scope)))
            .or_else(|| {
                lineage.iter().find_map(|(node, _)| {
                    let fill_ref = node.path(&["p:style", "a:fillRef"])?;
                    let idx = fill_ref.attr_i64("idx").and_then(|i| u32::try_from(i).ok())?;
                    (idx > 0).then(|| FillSpec::StyleRef {
                        idx,
                        color: ColorSpec::from_parent(fill_ref),
                    })
                })
            })
    }

    /// `a:ln` along the lineage, completed from the theme line style (`a:lnRef`).
    fn shape_outline(&self, lineage: &[(&XmlNode, RelScope)]) -> Option<OutlineSpec> {
        let explicit = lineage.iter().find_map(|(node, scope)| {
            node.path(&["p:spPr", "a:ln"])
                .map(|ln| parse_outline(ln, *scope))
        });
        let styled = lineage
            .iter()
            .find_map(|(node, _)| node.path(&["p:style", "a:lnRef"]))
            .and_then(|ln_ref| self.style_outline(ln_ref));

        match (explicit, styled) {
            (Some(mut outline), Some(styled)) => {
                if outline.fill.is_none() {
                    outline.fill = styled.fill;
                }
                if outline.width.is_none() {
                    outline.width = styled.width;
                }
                Some(outline)
            }
            (explicit, styled) => explicit.or(styled),
        }
    }

    fn style_outline(&self, ln_ref: &XmlNode) -> Option<OutlineSpec> {
        let idx = ln_ref.attr_i64("idx").and_then(|i| u32::try_from(i).ok())?;
        if idx == 0 {
            return None;
        }
        let style = self.slide.theme.line_for_index(idx);
        let color = ColorSpec::from_parent(ln_ref).or_else(|| style.and_then(|s| s.color.clone()));
        Some(OutlineSpec {
            width: style.and_then(|s| s.width),
            fill: color.map(FillSpec::Solid),
            ..Default::default()
        })
    }

    fn text_body(&self, shape: &XmlNode, ph: Option<&PlaceholderRef>) -> Option<TextBody> {
        let tx_body = shape.child("p:txBody")?;

        let mut list_styles: Vec<&XmlNode> = Vec::new();
        let mut body_props: Vec<&XmlNode> = Vec::new();
        match ph {
            Some(ph) => {
                for node in [
                    self.slide.layout_placeholder(ph),
                    self.slide.master_placeholder(ph),
                ]
                .into_iter()
                .flatten()
                {
                    if let Some(body) = node.child("p:txBody") {
                        list_styles.extend(body.child("a:lstStyle"));
                        body_props.extend(body.child("a:bodyPr"));
                    }
                }
                list_styles.extend(self.slide.master.and_then(|m| m.text_style_for(Some(ph))));
            }
            None => list_styles.extend(self.slide.context.default_text_style()),
        }

        let font_color = shape
            .path(&["p:style", "a:fontRef"])
            .and_then(ColorSpec::from_parent);
        let styles = TextStyles {
            theme: self.slide.theme,
            rels: self.slide.rels,
            list_styles: &list_styles,
            body_props: &body_props,
            font_color: font_color.as_ref(),
        };
        Some(parse_text_body(tx_body, &styles))
    }

    fn parse_shape(&self, shape: &XmlNode) -> PptxElement {
        let base = self.base(shape, &["p:spPr", "a:xfrm"]);
        let ph = base.placeholder.clone();
        let lineage = self.lineage(shape, ph.as_ref());

        let geometry = lineage
            .iter()
            .find_map(|(node, _)| node.child("p:spPr").and_then(parse_geometry))
            .unwrap_or_default();
        let fill = self.shape_fill(&lineage);
        let outline = self.shape_outline(&lineage);

        if geometry
            .preset_name()
            .is_some_and(|name| LINE_PRESETS.contains(&name))
        {
            return PptxElement::Line(LineSource {
                preset: geometry.preset_name().unwrap_or("line").to_string(),
                outline: outline.unwrap_or_default(),
                base,
            });
        }

        let text = self.text_body(shape, ph.as_ref());
        let is_text_box = non_visual_props(shape)
            .and_then(|n| n.child("p:cNvSpPr"))
            .and_then(|n| n.attr_bool("txBox"))
            .unwrap_or(false);
        let invisible_frame = geometry.preset_name() == Some("rect")
            && fill.as_ref().is_none_or(|f| *f == FillSpec::None)
            && outline.as_ref().is_none_or(|o| o.is_hidden() || o.fill.is_none());

        match text {
            Some(body)
                if is_text_box
                    || (invisible_frame && (!body.is_empty() || base.placeholder.is_some())) =>
            {
                PptxElement::Text(TextSource {
                    base,
                    body,
                    fill,
                    outline,
                })
            }
            text => PptxElement::Shape(ShapeSource {
                base,
                geometry,
                fill,
                outline,
                text: text.filter(|body| !body.is_empty()),
            }),
        }
    }

    fn parse_connector(&self, shape: &XmlNode) -> PptxElement {
        let base = self.base(shape, &["p:spPr", "a:xfrm"]);
        let lineage = self.lineage(shape, None);
        let preset = shape
            .path_attr(&["p:spPr", "a:prstGeom"], "prst")
            .unwrap_or("straightConnector1")
            .to_string();
        PptxElement::Line(LineSource {
            base,
            outline: self.shape_outline(&lineage).unwrap_or_default(),
            preset,
        })
    }

    fn parse_picture(&self, pic: &XmlNode) -> PptxElement {
        let base = self.base(pic, &["p:spPr", "a:xfrm"]);
        let nv_pr = non_visual_props(pic).and_then(|n| n.child("p:nvPr"));
        let blip = pic.path(&["p:blipFill", "a:blip"]);
        let blip_ref = blip
            .and_then(|b| b.attr("r:embed").or_else(|| b.attr("r:link")))
            .map(|id| MediaRef::new(RelScope::Slide, id));

        if let Some(nv_pr) = nv_pr {
            let video = nv_pr.child("a:videoFile").or_else(|| nv_pr.child("a:quickTimeFile"));
            let audio = nv_pr.child("a:audioFile").or_else(|| nv_pr.child("a:wavAudioFile"));
            if video.is_some() || audio.is_some() {
                let linked = video.or(audio);
                let embedded = nv_pr
                    .find("p14:media")
                    .and_then(|m| m.attr("r:embed"))
                    .or_else(|| linked.and_then(|l| l.attr("r:embed")));
                let link_id = linked.and_then(|l| l.attr("r:link"));

                let media_ref = embedded
                    .or_else(|| link_id.filter(|id| self.slide.rels.target_path(id).is_some()))
                    .map(|id| MediaRef::new(RelScope::Slide, id));
                let source = MediaSource {
                    base,
                    link: link_id.and_then(|id| self.slide.external_target(RelScope::Slide, id)),
                    media: media_ref,
                    poster: blip_ref,
                };
                return if video.is_some() {
                    PptxElement::Video(source)
                } else {
                    PptxElement::Audio(source)
                };
            }
        }

        let crop = pic
            .path(&["p:blipFill", "a:srcRect"])
            .map(|rect| {
                let pct = |name: &str| rect.attr_f64(name).unwrap_or(0.0) / 1000.0;
                CropRect {
                    left: pct("l"),
                    top: pct("t"),
                    right: pct("r"),
                    bottom: pct("b"),
                }
            })
            .filter(|crop| !crop.is_empty());
        let geometry = pic
            .child("p:spPr")
            .and_then(parse_geometry)
            .filter(|g| g.preset_name() != Some("rect"));
        let outline = pic.path(&["p:spPr", "a:ln"]).map(|ln| parse_outline(ln, RelScope::Slide));

        PptxElement::Image(ImageSource {
            base,
            // a picture without a blip keeps an unresolvable reference
            media: blip_ref.unwrap_or_else(|| MediaRef::new(RelScope::Slide, "")),
            crop,
            geometry,
            outline,
        })
    }

    fn parse_graphic_frame(&self, frame: &XmlNode) -> PptxElement {
        let base = self.base(frame, &["p:xfrm"]);
        let Some(data) = frame.path(&["a:graphic", "a:graphicData"]) else {
            return unsupported(base, SUBTYPE_UNHANDLED);
        };
        let uri = data.attr("uri").unwrap_or_default();

        match uri {
            URI_TABLE => match data.child("a:tbl") {
                Some(tbl) => PptxElement::Table(self.parse_table(tbl, base)),
                None => unsupported(base, SUBTYPE_UNHANDLED),
            },
            URI_CHART => {
                let chart = data
                    .child("c:chart")
                    .and_then(|c| c.attr("r:id"))
                    .and_then(|id| self.read_chart(id));
                PptxElement::Chart(ChartSource { base, data: chart })
            }
            URI_DIAGRAM => unsupported(base, SUBTYPE_SMARTART),
            URI_OLE => unsupported(base, SUBTYPE_OLE),
            uri if uri.contains("chartex") => PptxElement::Chart(ChartSource { base, data: None }),
            _ => unsupported(base, SUBTYPE_UNHANDLED),
        }
    }

    fn read_chart(&self, rel_id: &str) -> Option<charts::ChartData> {
        let path = self.slide.rels.target_path(rel_id)?;
        let parsed = self
            .slide
            .context
            .package()
            .read_xml(&path)
            .and_then(|root| charts::parse_chart(&root));
        match parsed {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "chart part unreadable");
                None
            }
        }
    }

    fn parse_table(&self, tbl: &XmlNode, base: ElementBase) -> TableSource {
        let columns = tbl
            .path(&["a:tblGrid"])
            .map(|grid| {
                grid.children_named("a:gridCol")
                    .map(|c| c.attr_i64("w").unwrap_or(0))
                    .collect()
            })
            .unwrap_or_default();

        let default_style = self.slide.context.default_text_style();
        let list_styles: Vec<&XmlNode> = default_style.into_iter().collect();
        let styles = TextStyles {
            theme: self.slide.theme,
            rels: self.slide.rels,
            list_styles: &list_styles,
            body_props: &[],
            font_color: None,
        };

        let rows = tbl
            .children_named("a:tr")
            .map(|tr| TableRowSource {
                height: tr.attr_i64("h").unwrap_or(0),
                cells: tr
                    .children_named("a:tc")
                    .map(|tc| {
                        let span = |name: &str| {
                            tc.attr_i64(name)
                                .and_then(|v| u32::try_from(v).ok())
                                .filter(|v| *v > 0)
                                .unwrap_or(1)
                        };
                        TableCellSource {
                            body: tc
                                .child("a:txBody")
                                .map(|body| parse_text_body(body, &styles))
                                .unwrap_or_default(),
                            grid_span: span("gridSpan"),
                            row_span: span("rowSpan"),
                            merged: tc.attr_bool("hMerge").unwrap_or(false)
                                || tc.attr_bool("vMerge").unwrap_or(false),
                            fill: tc
                                .child("a:tcPr")
                                .and_then(|pr| find_fill(pr, RelScope::Slide)),
                        }
                    })
                    .collect(),
            })
            .collect();

        TableSource {
            base,
            columns,
            rows,
        }
    }

    fn parse_math(&self, shape: &XmlNode, math: &XmlNode) -> PptxElement {
        let base = self.base(shape, &["p:spPr", "a:xfrm"]);
        PptxElement::Latex(LatexSource {
            base,
            latex: omml_to_latex(math),
            color: math
                .find("a:solidFill")
                .and_then(ColorSpec::from_parent)
                .or_else(|| {
                    shape
                        .path(&["p:style", "a:fontRef"])
                        .and_then(ColorSpec::from_parent)
                }),
        })
    }

    fn parse_control(&self, control: &XmlNode) -> PptxElement {
        let transform = control
            .find("a:xfrm")
            .map(parse_xfrm)
            .unwrap_or_default();
        let base = ElementBase {
            id: control.attr("spid").unwrap_or_default().to_string(),
            name: control.attr("name").unwrap_or_default().to_string(),
            transform,
            ..Default::default()
        };
        unsupported(base, SUBTYPE_ACTIVEX)
    }
}

/// A placeholder element for a construct that is dropped with a warning.
fn unsupported(mut base: ElementBase, subtype: &str) -> PptxElement {
    base.subtype = Some(subtype.to_string());
    PptxElement::Shape(ShapeSource {
        base,
        geometry: Geometry::default(),
        fill: None,
        outline: None,
        text: None,
    })
}

/// Parse `a:xfrm` / `p:xfrm`.
pub fn parse_xfrm(xfrm: &XmlNode) -> GeometryTransform {
    let off = xfrm.child("a:off");
    let ext = xfrm.child("a:ext");
    GeometryTransform {
        x: off.and_then(|o| o.attr_i64("x")).unwrap_or(0),
        y: off.and_then(|o| o.attr_i64("y")).unwrap_or(0),
        width: ext.and_then(|e| e.attr_i64("cx")).unwrap_or(0),
        height: ext.and_then(|e| e.attr_i64("cy")).unwrap_or(0),
        rotation: xfrm.attr_f64("rot").unwrap_or(0.0) / 60_000.0,
        flip_h: xfrm.attr_bool("flipH").unwrap_or(false),
        flip_v: xfrm.attr_bool("flipV").unwrap_or(false),
    }
}

/// Preset or custom geometry of a `p:spPr`.
fn parse_geometry(sp_pr: &XmlNode) -> Option<Geometry> {
    if let Some(prst) = sp_pr.child("a:prstGeom") {
        let adjustment = prst.child("a:avLst").and_then(|av| {
            av.children_named("a:gd")
                .find(|gd| matches!(gd.attr("name"), Some("adj") | Some("adj1")))
                .and_then(|gd| gd.attr("fmla"))
                .and_then(|f| f.strip_prefix("val "))
                .and_then(|v| v.trim().parse::<f64>().ok())
        });
        return Some(Geometry::Preset {
            name: prst.attr("prst").unwrap_or("rect").to_string(),
            adjustment,
        });
    }
    sp_pr
        .child("a:custGeom")
        .map(|geom| Geometry::Custom(parse_custom_geometry(geom)))
}

/// Child-to-parent coordinate mapping of a group (`a:chOff`/`a:chExt`).
#[derive(Debug, Clone, Copy)]
struct GroupMapping {
    off: (f64, f64),
    ch_off: (f64, f64),
    scale: (f64, f64),
}

impl GroupMapping {
    fn from_xfrm(xfrm: &XmlNode) -> Self {
        let pair = |tag: &str, a: &str, b: &str| {
            xfrm.child(tag)
                .map(|n| {
                    (
                        n.attr_f64(a).unwrap_or(0.0),
                        n.attr_f64(b).unwrap_or(0.0),
                    )
                })
                .unwrap_or((0.0, 0.0))
        };
        let off = pair("a:off", "x", "y");
        let ext = pair("a:ext", "cx", "cy");
        let ch_off = pair("a:chOff", "x", "y");
        let ch_ext = pair("a:chExt", "cx", "cy");
        let ratio = |outer: f64, inner: f64| if inner > 0.0 { outer / inner } else { 1.0 };
        Self {
            off,
            ch_off,
            scale: (ratio(ext.0, ch_ext.0), ratio(ext.1, ch_ext.1)),
        }
    }

    fn apply(&self, t: &mut GeometryTransform) {
        t.x = (self.off.0 + (t.x as f64 - self.ch_off.0) * self.scale.0).round() as i64;
        t.y = (self.off.1 + (t.y as f64 - self.ch_off.1) * self.scale.1).round() as i64;
        t.width = (t.width as f64 * self.scale.0).round() as i64;
        t.height = (t.height as f64 * self.scale.1).round() as i64;
    }
}
