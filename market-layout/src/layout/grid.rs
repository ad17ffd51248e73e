use serde::Serialize;
use tracing::debug;

use crate::types::{Outcome, TeamType};

use super::catalog::MarketConfiguration;
use super::selection::{match_to_config, split, LabelMismatch};
use super::team::column_team_type;

/// One cell of a compound market grid. `NoOffer` is rendered as a
/// disabled placeholder.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GridCell<'a> {
    Offer(&'a Outcome),
    NoOffer,
}

impl<'a> GridCell<'a> {
    pub fn outcome(&self) -> Option<&'a Outcome> {
        match *self {
            GridCell::Offer(outcome) => Some(outcome),
            GridCell::NoOffer => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub label: &'static str,
    pub team_type: Option<TeamType>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridRow<'a> {
    pub label: &'static str,
    pub cells: Vec<GridCell<'a>>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Label is not exactly two parts joined by `" & "`
    MissingSeparator,
    UnknownRow,
    UnknownColumn,
    /// A later outcome claimed the same cell
    DuplicateCell,
}

impl From<LabelMismatch> for DropReason {
    fn from(mismatch: LabelMismatch) -> Self {
        match mismatch {
            LabelMismatch::Row => DropReason::UnknownRow,
            LabelMismatch::Column => DropReason::UnknownColumn,
        }
    }
}

/// An outcome left out of the grid, kept so callers can count or report it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DroppedOutcome<'a> {
    pub outcome_id: &'a str,
    pub selection_name: &'a str,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grid<'a> {
    pub row_header: &'static str,
    pub column_header: &'static str,
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow<'a>>,
    pub dropped: Vec<DroppedOutcome<'a>>,
}

impl<'a> Grid<'a> {
    pub fn cell(&self, row: &str, col: &str) -> Option<&GridCell<'a>> {
        let col_idx = self.columns.iter().position(|c| c.label == col)?;
        self.rows.iter().find(|r| r.label == row)?.cells.get(col_idx)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    pub fn offers(&self) -> impl Iterator<Item = &'a Outcome> + '_ {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter_map(|cell| cell.outcome())
    }
}

/// Lay a compound market's outcomes out on the configuration's grid.
///
/// Every row/column pair gets a cell. Outcomes whose labels don't split or
/// don't match a canonical label are left out and listed in `dropped`.
/// When two outcomes claim the same cell the later one is shown.
pub fn build_grid<'a>(outcomes: &'a [Outcome], config: &MarketConfiguration) -> Grid<'a> {
    let width = config.column_labels.len();
    let mut cells = vec![GridCell::NoOffer; config.cell_count()];
    let mut dropped = Vec::new();

    for outcome in outcomes {
        let placement = split(&outcome.selection_name)
            .ok_or(DropReason::MissingSeparator)
            .and_then(|(raw_row, raw_col)| {
                match_to_config(raw_row, raw_col, config).map_err(DropReason::from)
            });

        let parsed = match placement {
            Ok(parsed) => parsed,
            Err(reason) => {
                debug!(
                    outcome_id = %outcome.outcome_id,
                    selection = %outcome.selection_name,
                    ?reason,
                    "dropping outcome from grid"
                );
                dropped.push(drop_record(outcome, reason));
                continue;
            }
        };

        let slot = &mut cells[parsed.row_index * width + parsed.col_index];
        if let GridCell::Offer(previous) = *slot {
            debug!(
                outcome_id = %previous.outcome_id,
                replaced_by = %outcome.outcome_id,
                row = parsed.row,
                col = parsed.col,
                "duplicate grid cell"
            );
            dropped.push(drop_record(previous, DropReason::DuplicateCell));
        }
        *slot = GridCell::Offer(outcome);
    }

    let columns = config
        .column_labels
        .iter()
        .copied()
        .enumerate()
        .map(|(i, label)| GridColumn {
            label,
            team_type: column_team_type(label, i, width),
        })
        .collect();

    let rows = config
        .row_labels
        .iter()
        .copied()
        .enumerate()
        .map(|(i, label)| GridRow {
            label,
            cells: cells[i * width..(i + 1) * width].to_vec(),
        })
        .collect();

    Grid {
        row_header: config.row_header,
        column_header: config.column_header,
        columns,
        rows,
        dropped,
    }
}

fn drop_record(outcome: &Outcome, reason: DropReason) -> DroppedOutcome<'_> {
    DroppedOutcome {
        outcome_id: &outcome.outcome_id,
        selection_name: &outcome.selection_name,
        reason,
    }
}
