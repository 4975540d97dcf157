//! Grouped bar chart for the location selector.

use crate::chart::{BarMode, ChartKind, ChartSpec, Series, Values};
use gfm_data::{Dataset, Location};

/// Build a grouped bar chart of `dataset`: x = Fruit, y = Amount,
/// one colour group per City, groups side by side per fruit.
pub fn bar_figure(dataset: &Dataset) -> ChartSpec {
    let series = dataset
        .groups()
        .into_iter()
        .map(|(city, rows)| Series {
            name: city.to_string(),
            x: Values::Categories(rows.iter().map(|r| r.fruit.name().to_string()).collect()),
            y: rows.iter().map(|r| r.amount).collect(),
            size: None,
            hover: None,
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        x: "Fruit".to_string(),
        y: "Amount".to_string(),
        color: "City".to_string(),
        size: None,
        hover_name: None,
        bar_mode: Some(BarMode::Group),
        log_x: false,
        size_max: None,
        series,
    }
}

/// Selection handler: the bar chart for the currently selected location.
pub fn display_figure(selected: Location) -> ChartSpec {
    log::info!("Building bar chart for {}", selected);
    bar_figure(&Dataset::for_location(selected))
}

/// Like [`display_figure`], starting from the raw radio-input value.
///
/// Unknown values are rejected rather than mapped to a default dataset.
pub fn display_figure_for(value: &str) -> anyhow::Result<ChartSpec> {
    let selected: Location = value.parse().map_err(|e| {
        log::warn!("Ignoring selection: {}", e);
        e
    })?;
    Ok(display_figure(selected))
}
