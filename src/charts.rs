//! Chart part parsing.
//!
//! Extracts the chart type and the cached series data from a DrawingML chart
//! part (`ppt/charts/chartN.xml`).

use crate::color::ColorSpec;
use crate::error::{Error, Result};
use crate::xml::XmlNode;

/// Chart families the editor can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Horizontal bars
    Bar,
    /// Vertical bars
    Column,
    Line,
    Pie,
    /// Doughnut
    Ring,
    Area,
    Radar,
    Scatter,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Column => "column",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Ring => "ring",
            ChartKind::Area => "area",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
        }
    }
}

/// A data series in a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend label
    pub name: String,
    pub values: Vec<f64>,
    /// Series fill from `c:spPr`
    pub color: Option<ColorSpec>,
}

/// Parsed chart data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub kind: ChartKind,
    pub title: Option<String>,
    /// Category labels (X axis)
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// `stacked` or `percentStacked` grouping
    pub stacked: bool,
    pub percent: bool,
}

impl ChartData {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: None,
            categories: Vec::new(),
            series: Vec::new(),
            stacked: false,
            percent: false,
        }
    }

    /// Whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.values.is_empty())
    }
}

/// Plot element tags in detection order, with the kind they map to.
const PLOT_TAGS: [(&str, ChartKind); 12] = [
    ("c:barChart", ChartKind::Column),
    ("c:bar3DChart", ChartKind::Column),
    ("c:lineChart", ChartKind::Line),
    ("c:line3DChart", ChartKind::Line),
    ("c:pieChart", ChartKind::Pie),
    ("c:pie3DChart", ChartKind::Pie),
    ("c:ofPieChart", ChartKind::Pie),
    ("c:doughnutChart", ChartKind::Ring),
    ("c:areaChart", ChartKind::Area),
    ("c:area3DChart", ChartKind::Area),
    ("c:radarChart", ChartKind::Radar),
    ("c:scatterChart", ChartKind::Scatter),
];

/// Parse chart XML text.
pub fn parse_chart_xml(xml: &str) -> Result<ChartData> {
    parse_chart(&XmlNode::parse(xml)?)
}

/// Parse a chart part's root (`c:chartSpace`).
pub fn parse_chart(root: &XmlNode) -> Result<ChartData> {
    let chart = if root.is("c:chart") {
        root
    } else {
        root.child("c:chart")
            .ok_or_else(|| Error::MalformedPackage("chart part has no c:chart".to_string()))?
    };
    let plot_area = chart
        .child("c:plotArea")
        .ok_or_else(|| Error::MalformedPackage("chart has no plot area".to_string()))?;

    let Some((plot, mut kind)) = plot_area.children.iter().find_map(|child| {
        PLOT_TAGS
            .iter()
            .find(|(tag, _)| child.is(tag))
            .map(|(_, kind)| (child, *kind))
    }) else {
        // unknown plot type: keep the frame, let the caller fill in data
        let mut data = ChartData::new(ChartKind::Column);
        data.title = chart.child("c:title").map(title_text);
        return Ok(data);
    };

    if kind == ChartKind::Column && plot.path_attr(&["c:barDir"], "val") == Some("bar") {
        kind = ChartKind::Bar;
    }

    let mut data = ChartData::new(kind);
    data.title = chart
        .child("c:title")
        .map(title_text)
        .filter(|t| !t.is_empty());

    match plot.path_attr(&["c:grouping"], "val") {
        Some("stacked") => data.stacked = true,
        Some("percentStacked") => {
            data.stacked = true;
            data.percent = true;
        }
        _ => {}
    }

    for (i, ser) in plot.children_named("c:ser").enumerate() {
        let name = ser
            .child("c:tx")
            .map(series_name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Series {}", i + 1));

        let value_node = ser.child("c:val").or_else(|| ser.child("c:yVal"));
        let values = value_node.map(numeric_points).unwrap_or_default();

        if data.categories.is_empty() {
            if let Some(cat) = ser.child("c:cat").or_else(|| ser.child("c:xVal")) {
                data.categories = string_points(cat);
            }
        }

        let color = ser
            .path(&["c:spPr", "a:solidFill"])
            .and_then(ColorSpec::from_parent);

        data.series.push(ChartSeries {
            name,
            values,
            color,
        });
    }

    Ok(data)
}

/// Title from rich text runs or a cached string reference.
fn title_text(title: &XmlNode) -> String {
    let Some(tx) = title.child("c:tx") else {
        return String::new();
    };
    if let Some(rich) = tx.child("c:rich") {
        return rich
            .children_named("a:p")
            .map(|p| {
                p.find_all("a:t")
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
    }
    series_name(tx)
}

fn series_name(tx: &XmlNode) -> String {
    if let Some(v) = tx.child("c:v") {
        return v.text.trim().to_string();
    }
    string_points(tx).join(" ")
}

/// Point cache of a data reference, ordered by `idx` and sized by `ptCount`.
fn point_cache(reference: &XmlNode) -> Option<(usize, Vec<(usize, String)>)> {
    let cache = ["c:strRef", "c:numRef", "c:multiLvlStrRef"]
        .iter()
        .filter_map(|r| reference.child(r))
        .find_map(|r| {
            r.child("c:strCache")
                .or_else(|| r.child("c:numCache"))
                .or_else(|| r.child("c:multiLvlStrCache"))
        })
        .or_else(|| reference.child("c:strLit"))
        .or_else(|| reference.child("c:numLit"))?;

    // multi-level caches keep their innermost level first
    let cache = cache.child("c:lvl").unwrap_or(cache);

    let points: Vec<(usize, String)> = cache
        .children_named("c:pt")
        .enumerate()
        .map(|(pos, pt)| {
            let idx = pt.attr_i64("idx").map(|i| i.max(0) as usize).unwrap_or(pos);
            let value = pt.child("c:v").map(|v| v.text.trim().to_string());
            (idx, value.unwrap_or_default())
        })
        .collect();

    let declared = cache.path_attr(&["c:ptCount"], "val").and_then(|v| v.parse().ok());
    let count = declared.unwrap_or_else(|| points.iter().map(|(i, _)| i + 1).max().unwrap_or(0));
    Some((count, points))
}

fn string_points(reference: &XmlNode) -> Vec<String> {
    let Some((count, points)) = point_cache(reference) else {
        return Vec::new();
    };
    let mut out = vec![String::new(); count];
    for (idx, value) in points {
        if let Some(slot) = out.get_mut(idx) {
            *slot = value;
        }
    }
    out
}

fn numeric_points(reference: &XmlNode) -> Vec<f64> {
    let Some((count, points)) = point_cache(reference) else {
        return Vec::new();
    };
    let mut out = vec![0.0; count];
    for (idx, value) in points {
        if let Some(slot) = out.get_mut(idx) {
            *slot = value.parse().unwrap_or(0.0);
        }
    }
    out
}
