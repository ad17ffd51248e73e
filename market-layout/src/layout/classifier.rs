use super::catalog::{configurations, MarketConfiguration};

/// Separator the odds provider uses to join two wagers into one market,
/// and two selections into one compound outcome label.
pub const COMPOUND_SEPARATOR: &str = " & ";

/// A market is compound iff its name joins two wagers with `" & "`.
/// Purely lexical: an unknown compound name is still compound.
pub fn is_compound(market_name: &str) -> bool {
    market_name.contains(COMPOUND_SEPARATOR)
}

/// Find the grid configuration for a compound market.
///
/// Tries an exact name match first. Failing that, a market matches a known
/// key when its name contains both halves of the key (case-insensitive), the
/// left half before the right one. Returns `None` for unmodeled markets.
pub fn resolve_configuration(market_name: &str) -> Option<&'static MarketConfiguration> {
    if let Some((_, config)) = configurations().find(|(name, _)| *name == market_name) {
        return Some(config);
    }

    let haystack = market_name.to_lowercase();
    configurations()
        .find(|(name, _)| contains_halves_in_order(&haystack, name))
        .map(|(_, config)| config)
}

fn contains_halves_in_order(haystack: &str, key: &str) -> bool {
    let Some((left, right)) = key.split_once(COMPOUND_SEPARATOR) else {
        return false;
    };
    let left = left.trim().to_lowercase();
    let right = right.trim().to_lowercase();
    if left.is_empty() || right.is_empty() {
        return false;
    }

    match haystack.find(&left) {
        Some(start) => haystack[start + left.len()..].contains(&right),
        None => false,
    }
}
