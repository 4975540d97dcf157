//! Global Fruits Market
//!
//! Compares fruit production between a reference market and the location
//! picked in a radio group, and shows a GDP per capita vs. life expectancy
//! bubble chart underneath.
//!
//! Data flow:
//! 1. On mount, plotly.js is requested from its CDN and the gapminder CSV
//!    is fetched from its gist.
//! 2. The bar chart effect reads only `selected_location`; every change
//!    re-runs `display_figure()` and redraws the chart with `Plotly.react`.
//! 3. The scatter chart effect renders once the gapminder rows arrive. A
//!    failed fetch replaces it with an error box; the bar chart keeps working.

use dioxus::prelude::*;
use gfm_chart_ui::components::{
    ChartContainer, ErrorDisplay, LoadingSpinner, LocationSelector, PageHeader, SubHeader,
};
use gfm_chart_ui::state::AppState;
use gfm_chart_ui::{fetch, js_bridge, DASHBOARD_CSS};
use gfm_data::GAPMINDER_CSV_URL;
use gfm_figure::{display_figure, scatter_figure};

/// Chart container DOM element IDs used by plotly.js to render into.
const BAR_CHART_ID: &str = "example-graph";
const SCATTER_CHART_ID: &str = "example-scatter";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fruits-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_hook(js_bridge::init_plotly);

    // Fetch the scatter chart data once
    use_future(move || async move {
        match fetch::load_gapminder(GAPMINDER_CSV_URL).await {
            Ok(records) => {
                log::info!("Loaded {} gapminder records", records.len());
                state.countries.set(records);
            }
            Err(e) => {
                log::error!("Failed to load gapminder data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load GDP data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Bar chart: re-rendered on every selection change
    use_effect(move || {
        let selected = (state.selected_location)();
        let figure = display_figure(selected).to_plotly();
        js_bridge::render_figure(BAR_CHART_ID, &figure);
    });

    // Scatter chart: rendered once the gapminder rows are in
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let countries = state.countries.read();
        if countries.is_empty() {
            log::warn!("Gapminder data is empty, nothing to plot");
            js_bridge::destroy_chart(SCATTER_CHART_ID);
            return;
        }
        let figure = scatter_figure(&countries).to_plotly();
        js_bridge::render_figure(SCATTER_CHART_ID, &figure);
    });

    rsx! {
        style { "{DASHBOARD_CSS}" }
        div {
            PageHeader {
                title: "Global Fruits Market".to_string(),
                subtitle: "Comparing fruits production in different markets".to_string(),
            }

            LocationSelector {}

            ChartContainer {
                id: BAR_CHART_ID.to_string(),
            }

            SubHeader {
                title: "GDP per capita".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner { message: "Loading GDP data...".to_string() }
            } else {
                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    min_height: 500,
                }
            }
        }
    }
}
