//! Lays out betting markets for selection: compound markets ("Both Teams To
//! Score & Full Time Result") become row x column grids, everything else
//! becomes rows of outcomes wrapped by label length.

pub mod config;
pub mod error;
pub mod layout;
pub mod network;
pub mod types;

pub use layout::{
    build_grid, is_compound, layout_rows, resolve_configuration, resolve_market, Grid, GridCell,
    MarketConfiguration, MarketLayout,
};
pub use types::{Market, Outcome, TeamType};
