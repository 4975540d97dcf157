//! The declarative chart model.
//!
//! A `ChartSpec` records which fields map to which visual channel plus the
//! data already split into colour groups. It carries no rendering logic;
//! see [`crate::plotly`] for the conversion consumed by the browser.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Scatter,
}

/// How bars of different colour groups share a category slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    /// Side by side.
    Group,
}

impl BarMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarMode::Group => "group",
        }
    }
}

/// Values along one axis of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Categories(Vec<String>),
    Numbers(Vec<f64>),
}

/// All points sharing one colour value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: Values,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Vec<String>>,
}

/// Declarative description of a chart: field-to-channel mapping plus data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: String,
    pub y: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    pub log_x: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_max: Option<f64>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Colour group labels in legend order.
    pub fn group_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn group(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Colour value of every point, in series order.
    pub fn color_column(&self) -> Vec<&str> {
        self.series
            .iter()
            .flat_map(|s| std::iter::repeat(s.name.as_str()).take(s.y.len()))
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.y.len()).sum()
    }
}
