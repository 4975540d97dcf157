//! `datasets`: dump the location -> dataset registry.

use gfm_data::{get_data_sets, Dataset, Location};

/// Render one dataset as aligned `Fruit Amount City` lines.
pub fn format_dataset(location: Location, dataset: &Dataset) -> String {
    let mut out = format!("{} ({} rows)\n", location.label(), dataset.len());
    out.push_str(&format!("  {:<8} {:>6}  {}\n", "Fruit", "Amount", "City"));
    for row in dataset.rows() {
        out.push_str(&format!("  {:<8} {:>6}  {}\n", row.fruit, row.amount, row.city));
    }
    out
}

pub fn render_datasets(json: bool) -> anyhow::Result<String> {
    let sets = get_data_sets();
    if json {
        return Ok(serde_json::to_string_pretty(&sets)?);
    }
    Ok(sets
        .iter()
        .map(|(loc, ds)| format_dataset(*loc, ds))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run_datasets(json: bool) -> anyhow::Result<()> {
    println!("{}", render_datasets(json)?);
    Ok(())
}
