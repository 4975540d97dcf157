//! Dark banner at the top of the page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Main heading
    pub title: String,
    /// One-line description under the heading
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Page title block, styled by the `.header` rules in the stylesheet.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            class: "header",
            h1 { "{props.title}" }
            if !props.subtitle.is_empty() {
                div { "{props.subtitle}" }
            }
        }
    }
}
