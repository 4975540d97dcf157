use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Source of the 2007 GDP / life expectancy table used by the scatter chart.
pub const GAPMINDER_CSV_URL: &str = "https://gist.githubusercontent.com/chriddyp/5d1ea79569ed194d432e56108a04d188/raw/a9f9e8076b837d541398e999dcbac2b2826a81f8/gdp-life-exp-2007.csv";

/// One country's 2007 development indicators.
///
/// Columns are matched by header name; any other columns in the file
/// (the gist carries an unnamed index column) are ignored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub continent: String,
    pub population: f64,
    #[serde(rename = "life expectancy")]
    pub life_expectancy: f64,
    #[serde(rename = "gdp per capita")]
    pub gdp_per_capita: f64,
}

/// Parse the gapminder CSV (with headers) into country records.
///
/// Fails on the first malformed row, naming its line.
pub fn parse_gapminder_csv(csv_object: &str) -> anyhow::Result<Vec<CountryRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_object.as_bytes());

    let mut records = Vec::new();
    for result in rdr.deserialize::<CountryRecord>() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            anyhow::anyhow!("malformed gapminder row at line {}: {}", line, e)
        })?;
        records.push(record);
    }
    log::debug!("Parsed {} gapminder records", records.len());
    Ok(records)
}

/// Fetch and parse the gapminder CSV over HTTP.
#[cfg(feature = "api")]
pub async fn fetch_gapminder(
    client: &reqwest::Client,
    url: &str,
) -> anyhow::Result<Vec<CountryRecord>> {
    log::info!("Fetching gapminder data from {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("gapminder fetch failed: HTTP {}", response.status());
    }
    let body = response.text().await?;
    parse_gapminder_csv(&body)
}
