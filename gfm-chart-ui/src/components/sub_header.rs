//! Section heading between charts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SubHeaderProps {
    pub title: String,
}

#[component]
pub fn SubHeader(props: SubHeaderProps) -> Element {
    rsx! {
        div {
            class: "sub-header",
            h2 { "{props.title}" }
        }
    }
}
