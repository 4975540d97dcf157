//! Conversion of [`ChartSpec`] into plotly.js figure JSON.
//!
//! The output is passed unchanged to `Plotly.react(id, data, layout)` in the
//! browser, or printed by the CLI.

use crate::chart::{ChartKind, ChartSpec, Series};
use serde::Serialize;
use serde_json::{json, Value};

/// Plotly's default qualitative colour sequence.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// A plotly figure: one trace per colour group plus a shared layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyFigure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl PlotlyFigure {
    pub fn data_json(&self) -> String {
        serde_json::to_string(&self.data).unwrap_or_default()
    }

    pub fn layout_json(&self) -> String {
        serde_json::to_string(&self.layout).unwrap_or_default()
    }
}

fn palette_color(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

fn bar_trace(spec: &ChartSpec, series: &Series, idx: usize) -> Value {
    json!({
        "type": "bar",
        "name": series.name,
        "legendgroup": series.name,
        "offsetgroup": series.name,
        "alignmentgroup": "True",
        "orientation": "v",
        "showlegend": true,
        "textposition": "auto",
        "x": series.x,
        "y": series.y,
        "marker": { "color": palette_color(idx), "pattern": { "shape": "" } },
        "hovertemplate": format!(
            "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
            spec.color, series.name, spec.x, spec.y
        ),
    })
}

/// `sizeref` so that the largest bubble is `size_max` pixels across
/// with `sizemode = "area"`.
fn size_ref(spec: &ChartSpec) -> f64 {
    let max_size = spec
        .series
        .iter()
        .filter_map(|s| s.size.as_ref())
        .flatten()
        .copied()
        .fold(0.0_f64, f64::max);
    let size_max = spec.size_max.unwrap_or(20.0);
    if max_size <= 0.0 || size_max <= 0.0 {
        return 1.0;
    }
    2.0 * max_size / (size_max * size_max)
}

fn scatter_trace(spec: &ChartSpec, series: &Series, idx: usize, sizeref: f64) -> Value {
    let mut marker = json!({ "color": palette_color(idx), "symbol": "circle" });
    let mut hovertemplate = String::new();
    if series.hover.is_some() {
        hovertemplate.push_str("<b>%{hovertext}</b><br><br>");
    }
    hovertemplate.push_str(&format!(
        "{}={}<br>{}=%{{x}}<br>{}=%{{y}}",
        spec.color, series.name, spec.x, spec.y
    ));
    if let Some(size) = &series.size {
        marker["size"] = json!(size);
        marker["sizemode"] = json!("area");
        marker["sizeref"] = json!(sizeref);
        if let Some(field) = &spec.size {
            hovertemplate.push_str(&format!("<br>{}=%{{marker.size}}", field));
        }
    }
    hovertemplate.push_str("<extra></extra>");

    let mut trace = json!({
        "type": "scatter",
        "mode": "markers",
        "name": series.name,
        "legendgroup": series.name,
        "showlegend": true,
        "x": series.x,
        "y": series.y,
        "marker": marker,
        "hovertemplate": hovertemplate,
    });
    if let Some(hover) = &series.hover {
        trace["hovertext"] = json!(hover);
    }
    trace
}

fn layout(spec: &ChartSpec) -> Value {
    let mut layout = json!({
        "xaxis": { "title": { "text": spec.x } },
        "yaxis": { "title": { "text": spec.y } },
        "legend": { "title": { "text": spec.color }, "tracegroupgap": 0, "itemsizing": "constant" },
        "margin": { "t": 60 },
    });
    if let Some(mode) = spec.bar_mode {
        layout["barmode"] = json!(mode.as_str());
    }
    if spec.log_x {
        layout["xaxis"]["type"] = json!("log");
    }
    layout
}

impl ChartSpec {
    /// Translate into plotly traces and layout.
    pub fn to_plotly(&self) -> PlotlyFigure {
        let data = match self.kind {
            ChartKind::Bar => self
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| bar_trace(self, s, i))
                .collect(),
            ChartKind::Scatter => {
                let sizeref = size_ref(self);
                self.series
                    .iter()
                    .enumerate()
                    .map(|(i, s)| scatter_trace(self, s, i, sizeref))
                    .collect()
            }
        };
        PlotlyFigure {
            data,
            layout: layout(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{display_figure, scatter_figure};
    use gfm_data::{CountryRecord, Location};

    #[test]
    fn test_bar_export_one_trace_per_city() {
        let fig = display_figure(Location::NewYorkCity).to_plotly();
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[0]["type"], "bar");
        assert_eq!(fig.data[0]["name"], "SF");
        assert_eq!(fig.data[1]["name"], "New York City");
        assert_eq!(fig.data[1]["y"], json!([6.0, 2.0, 4.0]));
        assert_eq!(fig.data[1]["x"], json!(["Apples", "Oranges", "Bananas"]));
        assert_eq!(fig.data[0]["marker"]["color"], PALETTE[0]);
        assert_eq!(fig.data[1]["marker"]["color"], PALETTE[1]);
        assert_eq!(
            fig.data[1]["hovertemplate"],
            "City=New York City<br>Fruit=%{x}<br>Amount=%{y}<extra></extra>"
        );
    }

    #[test]
    fn test_bar_layout() {
        let fig = display_figure(Location::Montreal).to_plotly();
        assert_eq!(fig.layout["barmode"], "group");
        assert_eq!(fig.layout["xaxis"]["title"]["text"], "Fruit");
        assert_eq!(fig.layout["yaxis"]["title"]["text"], "Amount");
        assert_eq!(fig.layout["legend"]["title"]["text"], "City");
        assert!(fig.layout["xaxis"].get("type").is_none());
        assert!(fig.layout.get("title").is_none());
    }

    #[test]
    fn test_scatter_export() {
        let records = vec![
            CountryRecord {
                country: "China".to_string(),
                continent: "Asia".to_string(),
                population: 1_318_683_096.0,
                life_expectancy: 72.961,
                gdp_per_capita: 4959.114854,
            },
            CountryRecord {
                country: "Norway".to_string(),
                continent: "Europe".to_string(),
                population: 4_627_926.0,
                life_expectancy: 80.196,
                gdp_per_capita: 49357.19017,
            },
        ];
        let fig = scatter_figure(&records).to_plotly();
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[0]["type"], "scatter");
        assert_eq!(fig.data[0]["mode"], "markers");
        assert_eq!(fig.data[0]["hovertext"], json!(["China"]));
        assert_eq!(fig.data[1]["marker"]["sizemode"], "area");
        assert_eq!(fig.layout["xaxis"]["type"], "log");
        assert!(fig.layout.get("barmode").is_none());

        let expected_ref = 2.0 * 1_318_683_096.0 / (60.0 * 60.0);
        let sizeref = fig.data[1]["marker"]["sizeref"].as_f64().unwrap();
        assert!((sizeref - expected_ref).abs() < 1e-6);

        let hover = fig.data[1]["hovertemplate"].as_str().unwrap();
        assert!(hover.starts_with("<b>%{hovertext}</b>"));
        assert!(hover.contains("continent=Europe"));
        assert!(hover.contains("population=%{marker.size}"));
    }

    #[test]
    fn test_sizeref_falls_back_without_usable_sizes() {
        let records = vec![CountryRecord {
            country: "Atlantis".to_string(),
            continent: "Oceania".to_string(),
            population: 0.0,
            life_expectancy: 70.0,
            gdp_per_capita: 1000.0,
        }];
        let fig = scatter_figure(&records).to_plotly();
        assert_eq!(fig.data[0]["marker"]["sizeref"].as_f64(), Some(1.0));

        let mut spec = scatter_figure(&[CountryRecord {
            population: 5_000_000.0,
            ..records[0].clone()
        }]);
        spec.size_max = Some(0.0);
        let fig = spec.to_plotly();
        assert_eq!(fig.data[0]["marker"]["sizeref"].as_f64(), Some(1.0));
    }

    #[test]
    fn test_json_strings_are_valid() {
        let fig = display_figure(Location::SanFrancisco).to_plotly();
        let data: Value = serde_json::from_str(&fig.data_json()).unwrap();
        let layout: Value = serde_json::from_str(&fig.layout_json()).unwrap();
        assert_eq!(data, json!(fig.data));
        assert_eq!(layout, fig.layout);
    }
}
