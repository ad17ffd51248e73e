use serde::Serialize;

/// Shape of a known compound market: which canonical tokens make up the
/// grid's rows and columns, and the header shown above each axis.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketConfiguration {
    pub row_labels: &'static [&'static str],
    pub column_labels: &'static [&'static str],
    pub row_header: &'static str,
    pub column_header: &'static str,
}

impl MarketConfiguration {
    pub fn cell_count(&self) -> usize {
        self.row_labels.len() * self.column_labels.len()
    }
}

const RESULT: &[&str] = &["1", "X", "2"];
const YES_NO: &[&str] = &["Yes", "No"];
const OVER_UNDER: &[&str] = &["Over", "Under"];
const ODD_EVEN: &[&str] = &["Odd", "Even"];
const DOUBLE_CHANCE: &[&str] = &["1X", "12", "X2"];

// Keyed by the provider's full market name. Order matters for the
// containment fallback: the first entry whose halves match wins.
static CONFIGURATIONS: &[(&str, MarketConfiguration)] = &[
    (
        "Both Teams To Score & Full Time Result",
        MarketConfiguration {
            row_labels: YES_NO,
            column_labels: RESULT,
            row_header: "Both Teams To Score",
            column_header: "Full Time Result",
        },
    ),
    (
        "Full Time Result & Both Teams To Score",
        MarketConfiguration {
            row_labels: RESULT,
            column_labels: YES_NO,
            row_header: "Full Time Result",
            column_header: "Both Teams To Score",
        },
    ),
    (
        "Total Goals Odd/Even & Total",
        MarketConfiguration {
            row_labels: ODD_EVEN,
            column_labels: OVER_UNDER,
            row_header: "Odd/Even",
            column_header: "Total",
        },
    ),
    (
        "Full Time Result & Total Goals",
        MarketConfiguration {
            row_labels: RESULT,
            column_labels: OVER_UNDER,
            row_header: "Full Time Result",
            column_header: "Total Goals",
        },
    ),
    (
        "Both Teams To Score & Total Goals",
        MarketConfiguration {
            row_labels: YES_NO,
            column_labels: OVER_UNDER,
            row_header: "Both Teams To Score",
            column_header: "Total Goals",
        },
    ),
    (
        "Double Chance & Total Goals",
        MarketConfiguration {
            row_labels: DOUBLE_CHANCE,
            column_labels: OVER_UNDER,
            row_header: "Double Chance",
            column_header: "Total Goals",
        },
    ),
    (
        "Double Chance & Both Teams To Score",
        MarketConfiguration {
            row_labels: DOUBLE_CHANCE,
            column_labels: YES_NO,
            row_header: "Double Chance",
            column_header: "Both Teams To Score",
        },
    ),
    (
        "Half Time Result & Full Time Result",
        MarketConfiguration {
            row_labels: RESULT,
            column_labels: RESULT,
            row_header: "Half Time",
            column_header: "Full Time",
        },
    ),
];

/// Every known compound market, in lookup order.
pub fn configurations() -> impl Iterator<Item = (&'static str, &'static MarketConfiguration)> {
    CONFIGURATIONS.iter().map(|(name, config)| (*name, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_key_is_a_conjunction() {
        for (name, _) in configurations() {
            assert_eq!(name.split(" & ").count(), 2, "{name}");
        }
    }

    #[test]
    fn keys_are_unique() {
        let names: HashSet<_> = configurations().map(|(name, _)| name).collect();
        assert_eq!(names.len(), CONFIGURATIONS.len());
    }

    #[test]
    fn labels_are_canonical_tokens() {
        for (name, config) in configurations() {
            assert!(!config.row_labels.is_empty(), "{name}");
            assert!(!config.column_labels.is_empty(), "{name}");
            for label in config.row_labels.iter().chain(config.column_labels) {
                assert_eq!(label.trim(), *label);
                assert!(!label.contains('('));
            }
        }
    }

    #[test]
    fn cell_count_is_cross_product() {
        let (_, config) = configurations().next().unwrap();
        assert_eq!(config.cell_count(), 6);
    }
}
