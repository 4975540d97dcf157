//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id plotly renders into
    pub id: String,
    /// Minimum height in pixels, so the page doesn't jump when plotly draws
    #[props(default = 450)]
    pub min_height: u32,
}

/// A fixed-height container div for plotly charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            class: "chart-container",
            style: "min-height: {props.min_height}px;",
            div {
                id: "{props.id}",
                class: "chart-target",
            }
        }
    }
}
