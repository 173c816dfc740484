//! In-memory PPTX packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const THEME: &str = r#"<a:theme name="Test"><a:themeElements>
  <a:clrScheme name="Test">
    <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
    <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
    <a:dk2><a:srgbClr val="44546A"/></a:dk2>
    <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
    <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
    <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
    <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
    <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
    <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
    <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
  </a:clrScheme>
  <a:fontScheme name="Test">
    <a:majorFont><a:latin typeface="Calibri Light"/></a:majorFont>
    <a:minorFont><a:latin typeface="Calibri"/></a:minorFont>
  </a:fontScheme>
  <a:fmtScheme name="Test">
    <a:fillStyleLst>
      <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      <a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>
      <a:solidFill><a:schemeClr val="phClr"><a:shade val="50000"/></a:schemeClr></a:solidFill>
    </a:fillStyleLst>
    <a:lnStyleLst>
      <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
    </a:lnStyleLst>
    <a:bgFillStyleLst>
      <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
    </a:bgFillStyleLst>
  </a:fmtScheme>
</a:themeElements></a:theme>"#;

/// One slide of a test package.
#[derive(Debug, Clone, Default)]
pub struct TestSlide {
    /// Children of `p:spTree`
    pub shapes: String,
    /// Markup after `p:cSld` (`p:clrMapOvr`, ...)
    pub trailer: String,
    /// Extra relationships: id, type suffix, target
    pub rels: Vec<(String, String, String)>,
    pub notes: Option<String>,
}

impl TestSlide {
    pub fn new(shapes: impl Into<String>) -> Self {
        Self {
            shapes: shapes.into(),
            ..Default::default()
        }
    }

    pub fn trailer(mut self, xml: impl Into<String>) -> Self {
        self.trailer = xml.into();
        self
    }

    pub fn rel(mut self, id: &str, kind: &str, target: &str) -> Self {
        self.rels
            .push((id.to_string(), kind.to_string(), target.to_string()));
        self
    }

    pub fn notes(mut self, text: &str) -> Self {
        self.notes = Some(text.to_string());
        self
    }
}

/// Builder for a minimal but complete presentation package.
#[derive(Debug, Clone)]
pub struct PptxBuilder {
    slides: Vec<TestSlide>,
    files: Vec<(String, Vec<u8>)>,
    slide_size: (i64, i64),
    layout_trailer: String,
    layout_shapes: String,
    title: Option<String>,
    /// Drop slide parts while keeping their references
    omit_slide_parts: bool,
}

impl Default for PptxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PptxBuilder {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            files: Vec::new(),
            slide_size: (12_192_000, 6_858_000),
            layout_trailer: String::new(),
            layout_shapes: String::new(),
            title: None,
            omit_slide_parts: false,
        }
    }

    pub fn slide(mut self, slide: TestSlide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn slide_size(mut self, cx: i64, cy: i64) -> Self {
        self.slide_size = (cx, cy);
        self
    }

    pub fn layout_trailer(mut self, xml: impl Into<String>) -> Self {
        self.layout_trailer = xml.into();
        self
    }

    pub fn layout_shapes(mut self, xml: impl Into<String>) -> Self {
        self.layout_shapes = xml.into();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn file(mut self, name: &str, data: &[u8]) -> Self {
        self.files.push((name.to_string(), data.to_vec()));
        self
    }

    pub fn omit_slide_parts(mut self) -> Self {
        self.omit_slide_parts = true;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut parts: Vec<(String, Vec<u8>)> = Vec::new();
        let mut add = |name: &str, body: String| parts.push((name.to_string(), body.into_bytes()));

        add("[Content_Types].xml", content_types());

        let mut sld_ids = String::new();
        let mut pres_rels = vec![(
            "rId1".to_string(),
            "slideMaster".to_string(),
            "slideMasters/slideMaster1.xml".to_string(),
        )];
        for (i, _) in self.slides.iter().enumerate() {
            let rid = format!("rId{}", i + 10);
            sld_ids.push_str(&format!(r#"<p:sldId id="{}" r:id="{}"/>"#, 256 + i, rid));
            pres_rels.push((rid, "slide".to_string(), format!("slides/slide{}.xml", i + 1)));
        }
        add(
            "ppt/presentation.xml",
            format!(
                r#"<p:presentation><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>{}</p:sldIdLst><p:sldSz cx="{}" cy="{}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#,
                sld_ids, self.slide_size.0, self.slide_size.1
            ),
        );
        add("ppt/_rels/presentation.xml.rels", rels(&pres_rels));

        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            if !self.omit_slide_parts {
                add(
                    &format!("ppt/slides/slide{}.xml", n),
                    format!(
                        r#"<p:sld><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld>{}</p:sld>"#,
                        slide.shapes, slide.trailer
                    ),
                );
            }
            let mut slide_rels = vec![(
                "rId1".to_string(),
                "slideLayout".to_string(),
                "../slideLayouts/slideLayout1.xml".to_string(),
            )];
            slide_rels.extend(slide.rels.iter().cloned());
            if let Some(notes) = &slide.notes {
                slide_rels.push((
                    "rIdNotes".to_string(),
                    "notesSlide".to_string(),
                    format!("../notesSlides/notesSlide{}.xml", n),
                ));
                add(
                    &format!("ppt/notesSlides/notesSlide{}.xml", n),
                    format!(
                        r#"<p:notes><p:cSld><p:spTree><p:sp><p:nvSpPr><p:cNvPr id="3" name="Notes Placeholder 2"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:notes>"#,
                        notes
                    ),
                );
            }
            add(&format!("ppt/slides/_rels/slide{}.xml.rels", n), rels(&slide_rels));
        }

        add(
            "ppt/slideLayouts/slideLayout1.xml",
            format!(
                r#"<p:sldLayout><p:cSld name="Title and Content"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld>{}</p:sldLayout>"#,
                self.layout_shapes, self.layout_trailer
            ),
        );
        add(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            rels(&[(
                "rId1".to_string(),
                "slideMaster".to_string(),
                "../slideMasters/slideMaster1.xml".to_string(),
            )]),
        );
        add(
            "ppt/slideMasters/slideMaster1.xml",
            r#"<p:sldMaster><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>
                <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="838200" y="365125"/><a:ext cx="10515600" cy="1325563"/></a:xfrm></p:spPr></p:sp>
                </p:spTree></p:cSld>
                <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
                <p:txStyles><p:titleStyle><a:lvl1pPr><a:defRPr sz="4400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>
                <p:bodyStyle><a:lvl1pPr><a:buChar char="•"/><a:defRPr sz="2800"/></a:lvl1pPr></p:bodyStyle><p:otherStyle/></p:txStyles></p:sldMaster>"#
                .to_string(),
        );
        add(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            rels(&[
                (
                    "rId1".to_string(),
                    "slideLayout".to_string(),
                    "../slideLayouts/slideLayout1.xml".to_string(),
                ),
                ("rId2".to_string(), "theme".to_string(), "../theme/theme1.xml".to_string()),
            ]),
        );
        add("ppt/theme/theme1.xml", THEME.to_string());

        let title = self
            .title
            .as_deref()
            .map(|t| format!("<dc:title>{}</dc:title>", t))
            .unwrap_or_default();
        add(
            "docProps/core.xml",
            format!(
                r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">{}<dc:creator>Tester</dc:creator></cp:coreProperties>"#,
                title
            ),
        );

        parts.extend(self.files.iter().cloned());
        zip_parts(&parts)
    }
}

fn content_types() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/></Types>"#
        .to_string()
}

fn rels(entries: &[(String, String, String)]) -> String {
    let mut xml = String::from(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    for (id, kind, target) in entries {
        let external = if target.starts_with("http") {
            r#" TargetMode="External""#
        } else {
            ""
        };
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}/{}" Target="{}"{}/>"#,
            id, REL_NS, kind, target, external
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Write named parts into a ZIP archive.
pub fn zip_parts(parts: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in parts {
        writer
            .start_file(name.as_str(), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A rectangle with a solid fill given as inner color markup.
pub fn rect(id: u32, x: i64, y: i64, cx: i64, cy: i64, color: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Rectangle {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill>{color}</a:solidFill></p:spPr></p:sp>"#
    )
}

/// A text box holding one paragraph.
pub fn text_box(id: u32, text: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="914400" y="914400"/><a:ext cx="3048000" cy="457200"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square"/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US" sz="2000" b="1"/><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#
    )
}

/// A SmartArt graphic frame.
pub fn smartart(id: u32) -> String {
    format!(
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Diagram {id}"/><p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr><p:xfrm><a:off x="0" y="0"/><a:ext cx="914400" cy="914400"/></p:xfrm><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/diagram"><dgm:relIds r:dm="rId90" r:lo="rId91" r:qs="rId92" r:cs="rId93"/></a:graphicData></a:graphic></p:graphicFrame>"#
    )
}

/// A picture referencing `rel_id`.
pub fn picture(id: u32, rel_id: &str) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="952500" cy="952500"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#
    )
}
