use serde::{Deserialize, Serialize};

/// A single wager type offered for a match, as supplied by the odds provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Market {
    pub name: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// One priced, selectable option within a market.
/// Only `outcome_id` is ever echoed back when a user picks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub outcome_id: String,
    pub condition_id: String,
    pub selection_name: String,
    pub odds: f64,
}

/// Presentation-only role of an outcome or grid column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamType {
    Home,
    Draw,
    Away,
}

/// Counters for monitoring
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    pub markets_resolved: u64,
    pub grids_built: u64,
    pub row_layouts: u64,
    /// Compound names with no configuration that fell back to rows
    pub unmodeled_compound: u64,
    pub outcomes_dropped: u64,
    pub uptime_seconds: u64,
}
