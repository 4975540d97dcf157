//! Chart descriptions for the Global Fruits Market dashboard.
//!
//! This crate turns tables from `gfm-data` into declarative [`ChartSpec`]s
//! and converts those into plotly.js `data`/`layout` JSON:
//! - `bar`: the selection handler behind the location radio group
//! - `scatter`: the GDP per capita bubble chart
//! - `plotly`: the boundary with the charting library

pub mod bar;
pub mod chart;
pub mod plotly;
pub mod scatter;

pub use bar::{bar_figure, display_figure, display_figure_for};
pub use chart::{BarMode, ChartKind, ChartSpec, Series, Values};
pub use plotly::PlotlyFigure;
pub use scatter::scatter_figure;
