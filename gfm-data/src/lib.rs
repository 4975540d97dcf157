//! Core data for the Global Fruits Market dashboard.
//!
//! - `location`: the closed set of selector values driving the bar chart
//! - `dataset`: fruit rows and the fixed location -> dataset registry
//! - `gapminder`: GDP / life expectancy table behind the scatter chart

pub mod dataset;
pub mod gapminder;
pub mod location;

pub use dataset::{get_data_sets, Dataset, Fruit, Row};
pub use gapminder::{parse_gapminder_csv, CountryRecord, GAPMINDER_CSV_URL};
pub use location::Location;
