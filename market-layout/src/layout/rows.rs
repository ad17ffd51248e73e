use serde::Serialize;

use crate::types::{Outcome, TeamType};

use super::team::positional_team_type;

// Average label length (chars) above which fewer outcomes share a row.
const SINGLE_COLUMN_ABOVE: f64 = 40.0;
const TWO_COLUMNS_ABOVE: f64 = 25.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowEntry<'a> {
    #[serde(flatten)]
    pub outcome: &'a Outcome,
    pub team_type: Option<TeamType>,
}

/// How many outcomes share one row so long labels don't overflow their slot.
pub fn outcomes_per_row(outcomes: &[Outcome]) -> usize {
    if outcomes.is_empty() {
        return 3;
    }
    let total: usize = outcomes.iter().map(|o| o.selection_name.chars().count()).sum();
    let average = total as f64 / outcomes.len() as f64;

    if average > SINGLE_COLUMN_ABOVE {
        1
    } else if average > TWO_COLUMNS_ABOVE {
        2
    } else {
        3
    }
}

/// Wrap outcomes into rows, keeping the provider's order.
///
/// Team type is positional over the whole list, not per row: a three-outcome
/// market reads home/draw/away however it wraps.
pub fn layout_rows(outcomes: &[Outcome]) -> Vec<Vec<RowEntry<'_>>> {
    let per_row = outcomes_per_row(outcomes);
    let count = outcomes.len();

    let entries: Vec<RowEntry<'_>> = outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| RowEntry {
            outcome,
            team_type: positional_team_type(i, count),
        })
        .collect();

    entries.chunks(per_row).map(|row| row.to_vec()).collect()
}
