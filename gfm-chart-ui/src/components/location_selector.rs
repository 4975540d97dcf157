//! Radio group for choosing the market to compare.

use crate::state::AppState;
use dioxus::prelude::*;
use gfm_data::Location;

/// One radio input per [`Location`]; updates `selected_location` on change.
#[component]
pub fn LocationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_location)();

    rsx! {
        div {
            class: "select-option",
            style: "padding: 10px; flex: 1;",
            p { "Select location" }
            div {
                id: "select_option",
                for location in Location::ALL {
                    label {
                        key: "{location.value()}",
                        input {
                            r#type: "radio",
                            name: "select_option",
                            value: "{location.value()}",
                            checked: location == selected,
                            onchange: move |_| {
                                log::info!("Location selected: {}", location);
                                state.selected_location.set(location);
                            },
                        }
                        "{location.label()}"
                    }
                }
            }
        }
    }
}
