//! GDP per capita vs. life expectancy bubble chart.

use crate::chart::{ChartKind, ChartSpec, Series, Values};
use gfm_data::CountryRecord;

/// Largest marker diameter in pixels.
pub const SIZE_MAX: f64 = 60.0;

/// Build the bubble chart: x = GDP per capita (log scale), y = life
/// expectancy, size = population, colour = continent, hover = country.
pub fn scatter_figure(records: &[CountryRecord]) -> ChartSpec {
    let mut series: Vec<Series> = Vec::new();
    for record in records {
        let idx = match series.iter().position(|s| s.name == record.continent) {
            Some(idx) => idx,
            None => {
                series.push(Series {
                    name: record.continent.clone(),
                    x: Values::Numbers(Vec::new()),
                    y: Vec::new(),
                    size: Some(Vec::new()),
                    hover: Some(Vec::new()),
                });
                series.len() - 1
            }
        };
        let s = &mut series[idx];
        if let Values::Numbers(x) = &mut s.x {
            x.push(record.gdp_per_capita);
        }
        s.y.push(record.life_expectancy);
        if let Some(size) = s.size.as_mut() {
            size.push(record.population);
        }
        if let Some(hover) = s.hover.as_mut() {
            hover.push(record.country.clone());
        }
    }

    ChartSpec {
        kind: ChartKind::Scatter,
        x: "gdp per capita".to_string(),
        y: "life expectancy".to_string(),
        color: "continent".to_string(),
        size: Some("population".to_string()),
        hover_name: Some("country".to_string()),
        bar_mode: None,
        log_x: true,
        size_max: Some(SIZE_MAX),
        series,
    }
}
