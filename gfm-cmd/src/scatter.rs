//! `scatter`: load the gapminder table and print the bubble chart.

use gfm_data::gapminder::fetch_gapminder;
use gfm_data::{parse_gapminder_csv, CountryRecord};
use gfm_figure::scatter_figure;
use log::info;

pub fn render_scatter(records: &[CountryRecord], plotly: bool) -> anyhow::Result<String> {
    let figure = scatter_figure(records);
    info!(
        "Scatter chart: {} countries across {} continents",
        figure.point_count(),
        figure.series.len()
    );
    let json = if plotly {
        serde_json::to_string_pretty(&figure.to_plotly())?
    } else {
        serde_json::to_string_pretty(&figure)?
    };
    Ok(json)
}

/// Load from `csv_path` if given, otherwise fetch `url`.
pub async fn run_scatter(url: &str, csv_path: Option<&str>, plotly: bool) -> anyhow::Result<()> {
    let records = match csv_path {
        Some(path) => {
            info!("Reading gapminder data from {}", path);
            let body = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
            parse_gapminder_csv(&body)?
        }
        None => {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?;
            fetch_gapminder(&client, url).await?
        }
    };
    println!("{}", render_scatter(&records, plotly)?);
    Ok(())
}
