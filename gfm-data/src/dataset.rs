//! Fruit production tables and the fixed location -> dataset registry.
//!
//! Each dataset is a "long-form" table of six rows: a reference group of
//! three fruits followed by the selected market's three fruits. The bar
//! chart groups rows by `city` and places the groups side by side.

use crate::location::Location;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Fruit categories on the bar chart x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fruit {
    Apples,
    Oranges,
    Bananas,
}

impl Fruit {
    /// Display order on the x-axis.
    pub const ALL: [Fruit; 3] = [Fruit::Apples, Fruit::Oranges, Fruit::Bananas];

    pub fn name(&self) -> &'static str {
        match self {
            Fruit::Apples => "Apples",
            Fruit::Oranges => "Oranges",
            Fruit::Bananas => "Bananas",
        }
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One (Fruit, Amount, City) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    #[serde(rename = "Fruit")]
    pub fruit: Fruit,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "City")]
    pub city: &'static str,
}

const fn row(fruit: Fruit, amount: f64, city: &'static str) -> Row {
    Row { fruit, amount, city }
}

const NYC: &str = "New York City";
const SF: &str = "San Francisco";

static INITIAL_ROWS: [Row; 6] = [
    row(Fruit::Apples, 4.0, "SF"),
    row(Fruit::Oranges, 1.0, "SF"),
    row(Fruit::Bananas, 2.0, "SF"),
    row(Fruit::Apples, 2.0, "Montreal"),
    row(Fruit::Oranges, 4.0, "Montreal"),
    row(Fruit::Bananas, 5.0, "Montreal"),
];

static NEW_YORK_CITY_ROWS: [Row; 6] = [
    row(Fruit::Apples, 4.0, "SF"),
    row(Fruit::Oranges, 1.0, "SF"),
    row(Fruit::Bananas, 2.0, "SF"),
    row(Fruit::Apples, 6.0, NYC),
    row(Fruit::Oranges, 2.0, NYC),
    row(Fruit::Bananas, 4.0, NYC),
];

static SAN_FRANCISCO_ROWS: [Row; 6] = [
    row(Fruit::Apples, 4.0, "Average"),
    row(Fruit::Oranges, 1.0, "Average"),
    row(Fruit::Bananas, 2.0, "Average"),
    row(Fruit::Apples, 1.0, SF),
    row(Fruit::Oranges, 5.0, SF),
    row(Fruit::Bananas, 3.0, SF),
];

static MONTREAL_ROWS: [Row; 6] = [
    row(Fruit::Apples, 4.0, "Average"),
    row(Fruit::Oranges, 1.0, "Average"),
    row(Fruit::Bananas, 2.0, "Average"),
    row(Fruit::Apples, 1.0, "Montreal"),
    row(Fruit::Oranges, 5.0, "Montreal"),
    row(Fruit::Bananas, 3.0, "Montreal"),
];

/// An immutable, ordered fruit table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: &'static [Row],
}

impl Dataset {
    /// The table shown before the first selection event.
    pub fn initial() -> Self {
        Dataset {
            rows: &INITIAL_ROWS,
        }
    }

    /// The table registered for `location`. Total over `Location`.
    pub fn for_location(location: Location) -> Self {
        let rows: &'static [Row] = match location {
            Location::NewYorkCity => &NEW_YORK_CITY_ROWS,
            Location::SanFrancisco => &SAN_FRANCISCO_ROWS,
            Location::Montreal => &MONTREAL_ROWS,
        };
        Dataset { rows }
    }

    pub fn rows(&self) -> &'static [Row] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn amounts(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.amount).collect()
    }

    /// The City column, row by row.
    pub fn cities(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.city).collect()
    }

    /// Rows grouped by city, groups in order of first appearance.
    pub fn groups(&self) -> Vec<(&'static str, Vec<Row>)> {
        let mut groups: Vec<(&'static str, Vec<Row>)> = Vec::new();
        for row in self.rows {
            match groups.iter_mut().find(|(city, _)| *city == row.city) {
                Some((_, rows)) => rows.push(*row),
                None => groups.push((row.city, vec![*row])),
            }
        }
        groups
    }
}

/// The fixed registry of datasets, one per selectable location.
///
/// Pure: every call returns the same literal data.
pub fn get_data_sets() -> BTreeMap<Location, Dataset> {
    Location::ALL
        .into_iter()
        .map(|loc| (loc, Dataset::for_location(loc)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped_amounts(dataset: &Dataset) -> Vec<(&'static str, Vec<f64>)> {
        dataset
            .groups()
            .into_iter()
            .map(|(city, rows)| (city, rows.iter().map(|r| r.amount).collect()))
            .collect()
    }

    #[test]
    fn test_registry_covers_every_location() {
        let sets = get_data_sets();
        assert_eq!(sets.len(), Location::ALL.len());
        for loc in Location::ALL {
            assert!(sets.contains_key(&loc), "missing dataset for {}", loc);
        }
    }

    #[test]
    fn test_registry_is_idempotent() {
        assert_eq!(get_data_sets(), get_data_sets());
    }

    #[test]
    fn test_every_dataset_is_two_groups_of_three_fruits() {
        let mut all: Vec<Dataset> = get_data_sets().into_values().collect();
        all.push(Dataset::initial());
        for dataset in all {
            assert_eq!(dataset.len(), 6);
            let groups = dataset.groups();
            assert_eq!(groups.len(), 2);
            for (_, rows) in &groups {
                let fruits: Vec<Fruit> = rows.iter().map(|r| r.fruit).collect();
                assert_eq!(fruits, Fruit::ALL.to_vec());
            }
            assert!(dataset.amounts().iter().all(|a| *a >= 0.0));
        }
    }

    #[test]
    fn test_new_york_city_dataset() {
        let dataset = Dataset::for_location(Location::NewYorkCity);
        assert_eq!(dataset.amounts(), vec![4.0, 1.0, 2.0, 6.0, 2.0, 4.0]);
        assert_eq!(
            grouped_amounts(&dataset),
            vec![
                ("SF", vec![4.0, 1.0, 2.0]),
                ("New York City", vec![6.0, 2.0, 4.0]),
            ]
        );
    }

    #[test]
    fn test_san_francisco_dataset() {
        let dataset = Dataset::for_location(Location::SanFrancisco);
        assert_eq!(dataset.amounts(), vec![4.0, 1.0, 2.0, 1.0, 5.0, 3.0]);
        assert_eq!(
            grouped_amounts(&dataset),
            vec![
                ("Average", vec![4.0, 1.0, 2.0]),
                ("San Francisco", vec![1.0, 5.0, 3.0]),
            ]
        );
    }

    #[test]
    fn test_montreal_dataset() {
        let dataset = Dataset::for_location(Location::Montreal);
        assert_eq!(dataset.amounts(), vec![4.0, 1.0, 2.0, 1.0, 5.0, 3.0]);
        assert_eq!(&dataset.cities()[3..], &["Montreal"; 3]);
    }

    #[test]
    fn test_initial_dataset() {
        let dataset = Dataset::initial();
        assert_eq!(dataset.amounts(), vec![4.0, 1.0, 2.0, 2.0, 4.0, 5.0]);
        assert_eq!(
            dataset.cities(),
            vec!["SF", "SF", "SF", "Montreal", "Montreal", "Montreal"]
        );
    }

    #[test]
    fn test_rows_serialize_with_column_names() {
        let json = serde_json::to_value(Dataset::initial()).unwrap();
        assert_eq!(json[0]["Fruit"], "Apples");
        assert_eq!(json[0]["Amount"], 4.0);
        assert_eq!(json[5]["City"], "Montreal");
    }
}
