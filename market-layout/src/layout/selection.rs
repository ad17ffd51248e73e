use regex::Regex;
use std::sync::OnceLock;

use super::catalog::MarketConfiguration;
use super::classifier::COMPOUND_SEPARATOR;

/// Grid coordinates of one compound outcome: the configuration's canonical
/// labels and their positions on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSelection {
    pub row: &'static str,
    pub col: &'static str,
    pub row_index: usize,
    pub col_index: usize,
}

/// Which half of a selection failed to match a canonical label.
/// The row is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMismatch {
    Row,
    Column,
}

fn trailing_annotation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // "Over (2.5)" -> "Over"; only the last parenthetical group is display metadata
    RE.get_or_init(|| Regex::new(r"\s*\([^()]*\)\s*$").expect("annotation pattern is valid"))
}

/// Split a compound selection label ("Yes & 1") into its row and column halves.
/// Anything other than exactly two parts is rejected.
pub fn split(selection_name: &str) -> Option<(&str, &str)> {
    let mut parts = selection_name.split(COMPOUND_SEPARATOR);
    let row = parts.next()?;
    let col = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Strip a trailing parenthetical annotation, then surrounding whitespace.
pub fn clean(part: &str) -> String {
    trailing_annotation().replace(part, "").trim().to_string()
}

/// Comparison key for a label. Never used for display.
pub fn normalize(label: &str) -> String {
    clean(label).to_lowercase()
}

/// Align both halves of a selection with the configuration's canonical labels.
/// Matching is exact after normalization: a near miss is no match.
pub fn match_to_config(
    raw_row: &str,
    raw_col: &str,
    config: &MarketConfiguration,
) -> Result<ParsedSelection, LabelMismatch> {
    let row_index = label_position(config.row_labels, raw_row).ok_or(LabelMismatch::Row)?;
    let col_index = label_position(config.column_labels, raw_col).ok_or(LabelMismatch::Column)?;
    Ok(ParsedSelection {
        row: config.row_labels[row_index],
        col: config.column_labels[col_index],
        row_index,
        col_index,
    })
}

fn label_position(labels: &[&str], raw: &str) -> Option<usize> {
    let key = normalize(raw);
    labels.iter().position(|label| normalize(label) == key)
}
