use crate::types::TeamType;

use super::selection::normalize;

/// Classify a grid column by its label, falling back to its position.
pub fn column_team_type(label: &str, index: usize, count: usize) -> Option<TeamType> {
    team_type_from_label(label).or_else(|| positional_team_type(index, count))
}

pub fn team_type_from_label(label: &str) -> Option<TeamType> {
    match normalize(label).as_str() {
        "1" | "home" => Some(TeamType::Home),
        "x" | "draw" => Some(TeamType::Draw),
        "2" | "away" => Some(TeamType::Away),
        _ => None,
    }
}

/// Three slots read home/draw/away, two read home/away. Anything else has no role.
pub fn positional_team_type(index: usize, count: usize) -> Option<TeamType> {
    match (count, index) {
        (3, 0) | (2, 0) => Some(TeamType::Home),
        (3, 1) => Some(TeamType::Draw),
        (3, 2) | (2, 1) => Some(TeamType::Away),
        _ => None,
    }
}
