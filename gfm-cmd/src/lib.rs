//! Command implementations for the GFM CLI.
//!
//! Exposes the dataset registry, the selection handler and the scatter
//! pipeline without a browser.

use clap::Subcommand;

pub mod datasets;
pub mod figure;
pub mod scatter;

#[derive(Subcommand)]
pub enum Command {
    /// List every registered location and its dataset
    Datasets {
        /// Print the registry as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the bar chart for a location
    Figure {
        /// Radio value, e.g. "New York City" (omit for the initial chart)
        #[arg(short = 'l', long)]
        location: Option<String>,

        /// Print plotly data/layout JSON instead of the chart description
        #[arg(long)]
        plotly: bool,
    },

    /// Load the gapminder table and print the scatter chart
    Scatter {
        /// URL of the gapminder CSV
        #[arg(short = 'u', long, default_value = gfm_data::GAPMINDER_CSV_URL)]
        url: String,

        /// Read the CSV from a local file instead of the URL
        #[arg(short = 'c', long)]
        csv: Option<String>,

        /// Print plotly data/layout JSON instead of the chart description
        #[arg(long)]
        plotly: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Datasets { json } => datasets::run_datasets(json),
        Command::Figure { location, plotly } => figure::run_figure(location.as_deref(), plotly),
        Command::Scatter { url, csv, plotly } => {
            scatter::run_scatter(&url, csv.as_deref(), plotly).await
        }
    }
}
