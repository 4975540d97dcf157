//! `figure`: run the selection handler from the command line.

use gfm_data::Dataset;
use gfm_figure::{bar_figure, display_figure_for};

/// JSON for the bar chart of `location`, or of the initial dataset when
/// no location is given.
pub fn render_figure(location: Option<&str>, plotly: bool) -> anyhow::Result<String> {
    let figure = match location {
        Some(value) => display_figure_for(value)?,
        None => bar_figure(&Dataset::initial()),
    };
    let json = if plotly {
        serde_json::to_string_pretty(&figure.to_plotly())?
    } else {
        serde_json::to_string_pretty(&figure)?
    };
    Ok(json)
}

pub fn run_figure(location: Option<&str>, plotly: bool) -> anyhow::Result<()> {
    println!("{}", render_figure(location, plotly)?);
    Ok(())
}
