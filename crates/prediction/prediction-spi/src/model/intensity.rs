//! Cyclone intensity categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of cyclone intensity labels, from depression to Category 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    #[serde(rename = "Tropical Depression")]
    TropicalDepression,
    #[serde(rename = "Tropical Storm")]
    TropicalStorm,
    #[serde(rename = "Category 1")]
    Category1,
    #[serde(rename = "Category 2")]
    Category2,
    #[serde(rename = "Category 3")]
    Category3,
    #[serde(rename = "Category 4")]
    Category4,
    #[serde(rename = "Category 5")]
    Category5,
}

impl Intensity {
    /// All categories, in ascending order of severity.
    pub const ALL: [Intensity; 7] = [
        Intensity::TropicalDepression,
        Intensity::TropicalStorm,
        Intensity::Category1,
        Intensity::Category2,
        Intensity::Category3,
        Intensity::Category4,
        Intensity::Category5,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::TropicalDepression => "Tropical Depression",
            Intensity::TropicalStorm => "Tropical Storm",
            Intensity::Category1 => "Category 1",
            Intensity::Category2 => "Category 2",
            Intensity::Category3 => "Category 3",
            Intensity::Category4 => "Category 4",
            Intensity::Category5 => "Category 5",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_seven_categories() {
        assert_eq!(Intensity::ALL.len(), 7);
    }

    #[test]
    fn test_serialized_form_matches_label() {
        for intensity in Intensity::ALL {
            let json = serde_json::to_string(&intensity).unwrap();
            assert_eq!(json, format!("\"{}\"", intensity.label()));
        }
    }

    #[test]
    fn test_round_trip() {
        for intensity in Intensity::ALL {
            let json = serde_json::to_string(&intensity).unwrap();
            let back: Intensity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, intensity);
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        for (i, a) in Intensity::ALL.iter().enumerate() {
            for b in &Intensity::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
