//! Reusable Dioxus RSX components for the fruits dashboard.

mod chart_container;
mod error_display;
mod loading_spinner;
mod location_selector;
mod page_header;
mod sub_header;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use page_header::PageHeader;
pub use sub_header::SubHeader;
