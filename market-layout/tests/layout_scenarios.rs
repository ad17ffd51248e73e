use market_layout::layout::selection::{normalize, split};
use market_layout::layout::{DropReason, GridCell};
use market_layout::{
    build_grid, is_compound, layout_rows, resolve_configuration, resolve_market, Market,
    MarketLayout, Outcome, TeamType,
};

fn outcome(id: &str, selection: &str, odds: f64) -> Outcome {
    Outcome {
        outcome_id: id.to_string(),
        condition_id: format!("0xcond-{id}"),
        selection_name: selection.to_string(),
        odds,
    }
}

fn odds_at(cell: Option<&GridCell<'_>>) -> Option<f64> {
    cell.and_then(|c| c.outcome()).map(|o| o.odds)
}

#[test]
fn btts_and_full_time_result_grid() {
    let name = "Both Teams To Score & Full Time Result";
    let outcomes = vec![
        outcome("1", "Yes & 1", 1.5),
        outcome("2", "Yes & X", 3.2),
        outcome("3", "No & 2", 2.1),
    ];

    assert!(is_compound(name));
    let config = resolve_configuration(name).expect("configured market");
    let grid = build_grid(&outcomes, config);

    let rows: Vec<_> = grid.rows.iter().map(|r| r.label).collect();
    let cols: Vec<_> = grid.columns.iter().map(|c| c.label).collect();
    assert_eq!(rows, vec!["Yes", "No"]);
    assert_eq!(cols, vec!["1", "X", "2"]);

    assert_eq!(odds_at(grid.cell("Yes", "1")), Some(1.5));
    assert_eq!(odds_at(grid.cell("Yes", "X")), Some(3.2));
    assert_eq!(odds_at(grid.cell("No", "2")), Some(2.1));

    for (row, col) in [("Yes", "2"), ("No", "1"), ("No", "X")] {
        assert_eq!(grid.cell(row, col), Some(&GridCell::NoOffer), "{row}/{col}");
    }
}

#[test]
fn odd_even_and_total_strips_threshold() {
    let name = "Total Goals Odd/Even & Total";
    let config = resolve_configuration(name).expect("configured market");

    let (row, col) = split("Even & Over (2.5)").unwrap();
    assert_eq!(normalize(row), "even");
    assert_eq!(normalize(col), "over");

    let outcomes = vec![outcome("e-o", "Even & Over (2.5)", 1.9)];
    let grid = build_grid(&outcomes, config);
    let placed = grid.cell("Even", "Over").and_then(|c| c.outcome()).unwrap();
    assert_eq!(placed.outcome_id, "e-o");
    assert!(grid.dropped.is_empty());
}

#[test]
fn match_result_fits_one_row() {
    let market = Market {
        name: "1X2".to_string(),
        outcomes: vec![
            outcome("h", "Arsenal FC", 1.8),
            outcome("d", "Draw match", 3.6),
            outcome("a", "Chelsea FC", 4.5),
        ],
    };

    assert!(!is_compound(&market.name));
    let rows = layout_rows(&market.outcomes);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 3);

    let types: Vec<_> = rows[0].iter().map(|e| e.team_type).collect();
    assert_eq!(
        types,
        vec![Some(TeamType::Home), Some(TeamType::Draw), Some(TeamType::Away)]
    );
}

#[test]
fn goal_scorer_wraps_in_pairs() {
    let outcomes: Vec<_> = (0..12)
        .map(|i| outcome(&i.to_string(), &format!("Player #{i:02} Scores Anytime Goal"), 5.0))
        .collect();
    assert!(outcomes.iter().all(|o| o.selection_name.len() == 30));

    let market = Market {
        name: "Anytime Goal Scorer".to_string(),
        outcomes,
    };
    match resolve_market(&market) {
        MarketLayout::Rows { rows, unmodeled_compound } => {
            assert!(!unmodeled_compound);
            assert_eq!(rows.len(), 6);
            assert!(rows.iter().all(|r| r.len() == 2));
            assert!(rows.iter().flatten().all(|e| e.team_type.is_none()));
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn malformed_label_is_excluded_without_affecting_others() {
    let config = resolve_configuration("Both Teams To Score & Full Time Result").unwrap();
    let outcomes = vec![
        outcome("ok-1", "Yes & 1", 1.5),
        outcome("bad", "Maybe", 9.0),
        outcome("ok-2", "No & X", 3.0),
    ];

    let grid = build_grid(&outcomes, config);

    assert_eq!(grid.offers().count(), 2);
    assert!(grid.offers().all(|o| o.outcome_id != "bad"));
    assert_eq!(grid.dropped.len(), 1);
    assert_eq!(grid.dropped[0].outcome_id, "bad");
    assert_eq!(grid.dropped[0].reason, DropReason::MissingSeparator);
    assert_eq!(odds_at(grid.cell("No", "X")), Some(3.0));
}

#[test]
fn separator_decides_compound() {
    let names = [
        ("Both Teams To Score & Full Time Result", true),
        ("Whatever & Else", true),
        ("Over/Under", false),
        ("1X2", false),
        ("Home&Away", false),
    ];
    for (name, expected) in names {
        assert_eq!(is_compound(name), expected, "{name}");
    }
}

#[test]
fn grid_keeps_outcome_identity() {
    let config = resolve_configuration("Full Time Result & Total Goals").unwrap();
    let outcomes = vec![
        outcome("x-over", "X & Over (2.5)", 7.0),
        outcome("1-under", "1 & Under (2.5)", 3.3),
    ];

    let grid = build_grid(&outcomes, config);

    for placed in grid.offers() {
        let original = outcomes
            .iter()
            .find(|o| o.outcome_id == placed.outcome_id)
            .unwrap();
        assert!(std::ptr::eq(placed, original));
        assert_eq!(placed.condition_id, original.condition_id);
    }
    assert_eq!(grid.offers().count(), 2);
}

#[test]
fn grid_is_complete_for_any_input_size() {
    let config = resolve_configuration("Double Chance & Total Goals").unwrap();
    let expected = config.row_labels.len() * config.column_labels.len();

    let inputs: Vec<Vec<Outcome>> = vec![
        vec![],
        vec![outcome("a", "1X & Over", 1.2)],
        (0..20).map(|i| outcome(&i.to_string(), "garbage", 2.0)).collect(),
    ];
    for outcomes in &inputs {
        assert_eq!(build_grid(outcomes, config).cell_count(), expected);
    }
}

#[test]
fn normalize_ignores_annotation_whitespace_and_case() {
    assert_eq!(normalize("Over (2.5)"), normalize("Over"));
    assert_eq!(normalize(" Yes "), normalize("yes"));
}

#[test]
fn rows_never_drop_or_reorder() {
    for n in [0usize, 1, 2, 3, 4, 5, 11, 31] {
        for len in [3usize, 27, 45] {
            let outcomes: Vec<_> = (0..n)
                .map(|i| outcome(&format!("id{i}"), &"s".repeat(len), 2.0))
                .collect();
            let flattened: Vec<_> = layout_rows(&outcomes)
                .into_iter()
                .flatten()
                .map(|e| e.outcome.outcome_id.clone())
                .collect();
            let original: Vec<_> = outcomes.iter().map(|o| o.outcome_id.clone()).collect();
            assert_eq!(flattened, original, "n={n} len={len}");
        }
    }
}
