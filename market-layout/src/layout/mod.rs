mod catalog;
mod classifier;
pub mod selection;
mod team;
mod grid;
mod rows;

pub use catalog::{configurations, MarketConfiguration};
pub use classifier::{is_compound, resolve_configuration, COMPOUND_SEPARATOR};
pub use grid::{build_grid, DropReason, DroppedOutcome, Grid, GridCell, GridColumn, GridRow};
pub use rows::{layout_rows, outcomes_per_row, RowEntry};
pub use selection::{LabelMismatch, ParsedSelection};
pub use team::{column_team_type, positional_team_type};

use serde::Serialize;
use tracing::debug;

use crate::types::Market;

/// What the rendering layer draws for one market.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarketLayout<'a> {
    Grid(Grid<'a>),
    #[serde(rename_all = "camelCase")]
    Rows {
        rows: Vec<Vec<RowEntry<'a>>>,
        /// Name has the compound separator but no known configuration,
        /// so labels like "Yes & 1" are shown unsplit.
        unmodeled_compound: bool,
    },
}

impl<'a> MarketLayout<'a> {
    pub fn dropped(&self) -> &[DroppedOutcome<'a>] {
        match self {
            MarketLayout::Grid(grid) => &grid.dropped,
            MarketLayout::Rows { .. } => &[],
        }
    }
}

/// Classify a market and lay its outcomes out as a grid or as rows.
pub fn resolve_market(market: &Market) -> MarketLayout<'_> {
    let compound = is_compound(&market.name);

    if compound {
        if let Some(config) = resolve_configuration(&market.name) {
            return MarketLayout::Grid(build_grid(&market.outcomes, config));
        }
        debug!(market = %market.name, "compound market has no configuration, laying out as rows");
    }

    MarketLayout::Rows {
        rows: layout_rows(&market.outcomes),
        unmodeled_compound: compound,
    }
}
