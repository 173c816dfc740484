//! Custom geometry (`a:custGeom`) paths.
//!
//! Point coordinates, arc radii and angles are either literals or guide
//! names. Guides are the DrawingML built-ins (`w`, `h`, `wd2`, `ss`, `cd4`,
//! ...) plus the shape's own `a:avLst`/`a:gdLst` formulas, evaluated per path
//! against that path's coordinate space.

use std::collections::HashMap;

use super::format_number;
use crate::xml::XmlNode;

/// A coordinate: a literal or the name of a guide.
#[derive(Debug, Clone, PartialEq)]
pub enum Coord {
    Value(f64),
    Guide(String),
}

impl Coord {
    fn parse(raw: Option<&str>) -> Coord {
        match raw {
            None => Coord::Value(0.0),
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Coord::Value)
                .unwrap_or_else(|_| Coord::Guide(raw.trim().to_string())),
        }
    }
}

pub type Point = (Coord, Coord);

/// One drawing command in path coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo([Point; 3]),
    QuadTo([Point; 2]),
    /// Radii, start angle and sweep angle in 60000ths of a degree
    ArcTo {
        wr: Coord,
        hr: Coord,
        start: Coord,
        sweep: Coord,
    },
    Close,
}

/// An `a:path` with its own coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPath {
    /// Path space extent; `None` means the shape's EMU extent.
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub commands: Vec<PathCommand>,
}

/// A parsed `a:custGeom`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomGeometry {
    /// `(name, formula)` from `a:avLst` then `a:gdLst`, in document order
    pub guides: Vec<(String, String)>,
    pub paths: Vec<CustomPath>,
}

/// A rendered custom geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCustom {
    pub path: String,
    /// Guide references and formulas that could not be evaluated (taken as 0)
    pub unresolved: usize,
}

/// Parse the guide lists and every `a:path` under `a:pathLst`.
pub fn parse_custom_geometry(cust_geom: &XmlNode) -> CustomGeometry {
    let guides = ["a:avLst", "a:gdLst"]
        .iter()
        .filter_map(|list| cust_geom.child(list))
        .flat_map(|list| list.children_named("a:gd"))
        .filter_map(|gd| Some((gd.attr("name")?.to_string(), gd.attr("fmla")?.to_string())))
        .collect();

    let paths = cust_geom
        .child("a:pathLst")
        .map(|list| {
            list.children_named("a:path")
                .map(|path| CustomPath {
                    width: path.attr_f64("w").filter(|w| *w > 0.0),
                    height: path.attr_f64("h").filter(|h| *h > 0.0),
                    commands: path.children.iter().filter_map(parse_command).collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    CustomGeometry { guides, paths }
}

fn parse_command(node: &XmlNode) -> Option<PathCommand> {
    let mut points: Vec<Point> = node.children_named("a:pt").map(point).collect();
    let command = match node.tag.as_str() {
        "a:moveTo" if !points.is_empty() => PathCommand::MoveTo(points.swap_remove(0)),
        "a:lnTo" if !points.is_empty() => PathCommand::LineTo(points.swap_remove(0)),
        "a:cubicBezTo" if points.len() >= 3 => {
            points.truncate(3);
            let end = points.pop()?;
            let c2 = points.pop()?;
            let c1 = points.pop()?;
            PathCommand::CubicTo([c1, c2, end])
        }
        "a:quadBezTo" if points.len() >= 2 => {
            points.truncate(2);
            let end = points.pop()?;
            let c = points.pop()?;
            PathCommand::QuadTo([c, end])
        }
        "a:arcTo" => PathCommand::ArcTo {
            wr: Coord::parse(node.attr("wR")),
            hr: Coord::parse(node.attr("hR")),
            start: Coord::parse(node.attr("stAng")),
            sweep: Coord::parse(node.attr("swAng")),
        },
        "a:close" => PathCommand::Close,
        _ => return None,
    };
    Some(command)
}

fn point(node: &XmlNode) -> Point {
    (Coord::parse(node.attr("x")), Coord::parse(node.attr("y")))
}

/// Guide values of one path space.
struct Guides {
    values: HashMap<String, f64>,
    unresolved: usize,
}

impl Guides {
    fn new(w: f64, h: f64, formulas: &[(String, String)]) -> Self {
        let mut guides = Guides {
            values: HashMap::new(),
            unresolved: 0,
        };
        let (ss, ls) = (w.min(h), w.max(h));
        for (name, v) in [
            ("w", w),
            ("h", h),
            ("l", 0.0),
            ("t", 0.0),
            ("r", w),
            ("b", h),
            ("hc", w / 2.0),
            ("vc", h / 2.0),
            ("ss", ss),
            ("ls", ls),
            ("cd2", 10_800_000.0),
            ("cd4", 5_400_000.0),
            ("cd8", 2_700_000.0),
            ("3cd4", 16_200_000.0),
            ("3cd8", 8_100_000.0),
            ("5cd8", 13_500_000.0),
            ("7cd8", 18_900_000.0),
        ] {
            guides.values.insert(name.to_string(), v);
        }
        for (name, fmla) in formulas {
            let value = guides.formula(fmla);
            guides.values.insert(name.clone(), value);
        }
        guides
    }

    /// Built-in divided extents: `wd2`, `hd10`, `ssd32`, ...
    fn divided(&self, name: &str) -> Option<f64> {
        let (base, divisor) = ["ssd", "wd", "hd"]
            .iter()
            .find_map(|prefix| Some((*prefix, name.strip_prefix(*prefix)?)))?;
        let divisor: f64 = divisor.parse().ok().filter(|d: &f64| *d > 0.0)?;
        let base = match base {
            "ssd" => self.values.get("ss"),
            "wd" => self.values.get("w"),
            _ => self.values.get("h"),
        }?;
        Some(base / divisor)
    }

    fn arg(&mut self, token: &str) -> f64 {
        if let Ok(v) = token.parse::<f64>() {
            return v;
        }
        if let Some(v) = self.values.get(token).copied().or_else(|| self.divided(token)) {
            return v;
        }
        self.unresolved += 1;
        0.0
    }

    fn coord(&mut self, coord: &Coord) -> f64 {
        match coord {
            Coord::Value(v) => *v,
            Coord::Guide(name) => self.arg(name),
        }
    }

    fn formula(&mut self, fmla: &str) -> f64 {
        let mut tokens = fmla.split_whitespace();
        let Some(op) = tokens.next() else {
            self.unresolved += 1;
            return 0.0;
        };
        let args: Vec<f64> = tokens.map(|t| self.arg(t)).collect();
        let a = |i: usize| args.get(i).copied().unwrap_or(0.0);
        let angle = |v: f64| (v / 60_000.0).to_radians();
        let to_angle = |rad: f64| rad.to_degrees() * 60_000.0;

        match op {
            "val" => a(0),
            "*/" if a(2) != 0.0 => a(0) * a(1) / a(2),
            "+-" => a(0) + a(1) - a(2),
            "+/" if a(2) != 0.0 => (a(0) + a(1)) / a(2),
            "?:" => {
                if a(0) > 0.0 {
                    a(1)
                } else {
                    a(2)
                }
            }
            "abs" => a(0).abs(),
            "at2" => to_angle(a(1).atan2(a(0))),
            "cat2" => a(0) * a(2).atan2(a(1)).cos(),
            "sat2" => a(0) * a(2).atan2(a(1)).sin(),
            "cos" => a(0) * angle(a(1)).cos(),
            "sin" => a(0) * angle(a(1)).sin(),
            "tan" => a(0) * angle(a(1)).tan(),
            "max" => a(0).max(a(1)),
            "min" => a(0).min(a(1)),
            "mod" => (a(0) * a(0) + a(1) * a(1) + a(2) * a(2)).sqrt(),
            "pin" => {
                if a(1) < a(0) {
                    a(0)
                } else if a(1) > a(2) {
                    a(2)
                } else {
                    a(1)
                }
            }
            "sqrt" => a(0).max(0.0).sqrt(),
            // division by zero
            "*/" | "+/" => 0.0,
            _ => {
                self.unresolved += 1;
                0.0
            }
        }
    }
}

/// Render custom paths into one SVG path scaled to a `width` x `height` box.
///
/// `extent` is the shape's EMU size, used by paths without their own `w`/`h`.
pub fn render_custom_paths(
    geometry: &CustomGeometry,
    width: f64,
    height: f64,
    extent: (f64, f64),
) -> RenderedCustom {
    let mut parts = Vec::new();
    let mut unresolved = 0;

    for path in &geometry.paths {
        let pw = path.width.unwrap_or(extent.0);
        let ph = path.height.unwrap_or(extent.1);
        let sx = if pw > 0.0 { width / pw } else { 0.0 };
        let sy = if ph > 0.0 { height / ph } else { 0.0 };
        let fmt = |x: f64, y: f64| format!("{},{}", format_number(x * sx), format_number(y * sy));

        let mut guides = Guides::new(pw, ph, &geometry.guides);
        let pt = |guides: &mut Guides, p: &Point| (guides.coord(&p.0), guides.coord(&p.1));

        let mut current = (0.0, 0.0);
        for command in &path.commands {
            match command {
                PathCommand::MoveTo(p) => {
                    let (x, y) = pt(&mut guides, p);
                    parts.push(format!("M{}", fmt(x, y)));
                    current = (x, y);
                }
                PathCommand::LineTo(p) => {
                    let (x, y) = pt(&mut guides, p);
                    parts.push(format!("L{}", fmt(x, y)));
                    current = (x, y);
                }
                PathCommand::CubicTo([c1, c2, end]) => {
                    let (c1, c2, end) = (pt(&mut guides, c1), pt(&mut guides, c2), pt(&mut guides, end));
                    parts.push(format!(
                        "C{} {} {}",
                        fmt(c1.0, c1.1),
                        fmt(c2.0, c2.1),
                        fmt(end.0, end.1)
                    ));
                    current = end;
                }
                PathCommand::QuadTo([c, end]) => {
                    let (c, end) = (pt(&mut guides, c), pt(&mut guides, end));
                    parts.push(format!("Q{} {}", fmt(c.0, c.1), fmt(end.0, end.1)));
                    current = end;
                }
                PathCommand::ArcTo {
                    wr,
                    hr,
                    start,
                    sweep,
                } => {
                    let wr = guides.coord(wr);
                    let hr = guides.coord(hr);
                    let start = guides.coord(start) / 60_000.0;
                    let sweep = guides.coord(sweep) / 60_000.0;
                    let st = start.to_radians();
                    let en = (start + sweep).to_radians();
                    let cx = current.0 - wr * st.cos();
                    let cy = current.1 - hr * st.sin();
                    let end = (cx + wr * en.cos(), cy + hr * en.sin());
                    let large = u8::from(sweep.abs() > 180.0);
                    let dir = u8::from(sweep > 0.0);
                    parts.push(format!(
                        "A{},{} 0 {},{} {}",
                        format_number(wr * sx),
                        format_number(hr * sy),
                        large,
                        dir,
                        fmt(end.0, end.1)
                    ));
                    current = end;
                }
                PathCommand::Close => parts.push("Z".to_string()),
            }
        }
        unresolved += guides.unresolved;
    }

    RenderedCustom {
        path: parts.join(" "),
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(xml: &str) -> CustomGeometry {
        parse_custom_geometry(&XmlNode::parse(xml).unwrap())
    }

    #[test]
    fn test_triangle_scaled_to_box() {
        let geom = geometry(
            r#"<a:custGeom><a:pathLst><a:path w="100" h="100">
                <a:moveTo><a:pt x="50" y="0"/></a:moveTo>
                <a:lnTo><a:pt x="100" y="100"/></a:lnTo>
                <a:lnTo><a:pt x="0" y="100"/></a:lnTo>
                <a:close/>
            </a:path></a:pathLst></a:custGeom>"#,
        );
        assert_eq!(geom.paths.len(), 1);
        assert_eq!(geom.paths[0].commands.len(), 4);
        let out = render_custom_paths(&geom, 200.0, 50.0, (0.0, 0.0));
        assert_eq!(out.path, "M100,0 L200,50 L0,50 Z");
        assert_eq!(out.unresolved, 0);
    }

    #[test]
    fn test_missing_path_size_uses_extent() {
        let geom = geometry(
            r#"<a:custGeom><a:pathLst><a:path>
                <a:moveTo><a:pt x="0" y="0"/></a:moveTo>
                <a:lnTo><a:pt x="9525" y="19050"/></a:lnTo>
            </a:path></a:pathLst></a:custGeom>"#,
        );
        let out = render_custom_paths(&geom, 1.0, 2.0, (9525.0, 19050.0));
        assert_eq!(out.path, "M0,0 L1,2");
    }

    #[test]
    fn test_bezier_and_arc() {
        let geom = geometry(
            r#"<a:custGeom><a:pathLst><a:path w="10" h="10">
                <a:moveTo><a:pt x="10" y="5"/></a:moveTo>
                <a:arcTo wR="5" hR="5" stAng="0" swAng="10800000"/>
                <a:quadBezTo><a:pt x="5" y="0"/><a:pt x="10" y="5"/></a:quadBezTo>
                <a:cubicBezTo><a:pt x="1" y="1"/><a:pt x="2" y="2"/><a:pt x="3" y="3"/></a:cubicBezTo>
            </a:path></a:pathLst></a:custGeom>"#,
        );
        let out = render_custom_paths(&geom, 10.0, 10.0, (0.0, 0.0));
        assert_eq!(out.path, "M10,5 A5,5 0 0,1 0,5 Q5,0 10,5 C1,1 2,2 3,3");
    }

    #[test]
    fn test_builtin_guides() {
        let geom = geometry(
            r#"<a:custGeom><a:pathLst><a:path w="200" h="100">
                <a:moveTo><a:pt x="l" y="t"/></a:moveTo>
                <a:lnTo><a:pt x="r" y="vc"/></a:lnTo>
                <a:lnTo><a:pt x="wd2" y="b"/></a:lnTo>
                <a:arcTo wR="wd4" hR="hd2" stAng="cd2" swAng="cd4"/>
                <a:close/>
            </a:path></a:pathLst></a:custGeom>"#,
        );
        let out = render_custom_paths(&geom, 200.0, 100.0, (0.0, 0.0));
        assert!(out.path.starts_with("M0,0 L200,50 L100,100 A50,50 0 0,1 "));
        assert_eq!(out.unresolved, 0);
    }

    #[test]
    fn test_formula_guides() {
        let geom = geometry(
            r#"<a:custGeom>
                <a:avLst><a:gd name="adj" fmla="val 25000"/></a:avLst>
                <a:gdLst>
                    <a:gd name="x1" fmla="*/ w adj 100000"/>
                    <a:gd name="x2" fmla="+- r 0 x1"/>
                    <a:gd name="y1" fmla="pin 0 150 h"/>
                </a:gdLst>
                <a:pathLst><a:path w="400" h="100">
                    <a:moveTo><a:pt x="x1" y="0"/></a:moveTo>
                    <a:lnTo><a:pt x="x2" y="y1"/></a:lnTo>
                </a:path></a:pathLst></a:custGeom>"#,
        );
        assert_eq!(geom.guides.len(), 4);
        let out = render_custom_paths(&geom, 400.0, 100.0, (0.0, 0.0));
        assert_eq!(out.path, "M100,0 L300,100");
        assert_eq!(out.unresolved, 0);
    }

    #[test]
    fn test_unknown_guide_counted() {
        let geom = geometry(
            r#"<a:custGeom><a:pathLst><a:path w="10" h="10">
                <a:moveTo><a:pt x="mystery" y="5"/></a:moveTo>
                <a:lnTo><a:pt x="10" y="h"/></a:lnTo>
            </a:path></a:pathLst></a:custGeom>"#,
        );
        let out = render_custom_paths(&geom, 10.0, 10.0, (0.0, 0.0));
        assert_eq!(out.path, "M0,5 L10,10");
        assert_eq!(out.unresolved, 1);
    }

    #[test]
    fn test_empty_geometry() {
        let geom = geometry("<a:custGeom/>");
        assert!(geom.paths.is_empty());
        assert!(geom.guides.is_empty());
    }
}
