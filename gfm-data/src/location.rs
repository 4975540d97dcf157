use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A market the user can compare against in the bar chart.
///
/// The set is closed: the radio group exposes exactly these three values
/// and every one of them has a dataset in the registry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Location {
    #[serde(rename = "New York City")]
    NewYorkCity,
    #[default]
    #[serde(rename = "Montreal", alias = "Montréal")]
    Montreal,
    #[serde(rename = "San Francisco")]
    SanFrancisco,
}

impl Location {
    /// All locations in radio-option order.
    pub const ALL: [Location; 3] = [
        Location::NewYorkCity,
        Location::Montreal,
        Location::SanFrancisco,
    ];

    /// The value carried by the radio input.
    pub fn value(&self) -> &'static str {
        match self {
            Location::NewYorkCity => "New York City",
            Location::Montreal => "Montreal",
            Location::SanFrancisco => "San Francisco",
        }
    }

    /// Human-readable label shown next to the radio input.
    pub fn label(&self) -> &'static str {
        match self {
            Location::NewYorkCity => "New York City",
            Location::Montreal => "Montréal",
            Location::SanFrancisco => "San Francisco",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.value())
    }
}

impl FromStr for Location {
    type Err = anyhow::Error;

    /// Accepts either the option value or its display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Location::ALL
            .into_iter()
            .find(|loc| loc.value() == trimmed || loc.label() == trimmed)
            .ok_or_else(|| anyhow::anyhow!("unknown location: {:?}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn test_parse_values() {
        assert_eq!("New York City".parse::<Location>().unwrap(), Location::NewYorkCity);
        assert_eq!("San Francisco".parse::<Location>().unwrap(), Location::SanFrancisco);
        assert_eq!("Montreal".parse::<Location>().unwrap(), Location::Montreal);
    }

    #[test]
    fn test_parse_accented_label() {
        assert_eq!("Montréal".parse::<Location>().unwrap(), Location::Montreal);
        assert_eq!(" Montreal ".parse::<Location>().unwrap(), Location::Montreal);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "Toronto".parse::<Location>().unwrap_err();
        assert!(err.to_string().contains("Toronto"));
        assert!("".parse::<Location>().is_err());
        assert!("new york city".parse::<Location>().is_err());
    }

    #[test]
    fn test_value_round_trips_through_from_str() {
        for loc in Location::ALL {
            assert_eq!(loc.value().parse::<Location>().unwrap(), loc);
            assert_eq!(loc.to_string(), loc.value());
        }
    }

    #[test]
    fn test_default_is_montreal() {
        assert_eq!(Location::default(), Location::Montreal);
    }

    #[test]
    fn test_serde_accepts_label_alias() {
        let loc: Location = serde_json::from_str("\"Montréal\"").unwrap();
        assert_eq!(loc, Location::Montreal);
        assert_eq!(
            serde_json::to_string(&Location::SanFrancisco).unwrap(),
            "\"San Francisco\""
        );
    }
}
