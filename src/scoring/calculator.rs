use std::collections::HashSet;

use super::models::ScoringRules;

/// Normalizes a podium entry for comparison. A blank entry means no pick was
/// made for that slot and matches nothing.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Computes the point value of a prediction against the actual podium.
///
/// A perfectly ordered podium earns `exact_match_points`. Otherwise the
/// comparison is position-independent: three picks anywhere on the podium
/// earn `one_off_points`, exactly two earn `two_off_points`, anything less
/// earns nothing. There is no partial credit for a single correct pick.
///
/// This is a total function; callers are responsible for only scoring
/// predictions whose event has a recorded result.
pub fn calculate_points(predicted: [&str; 3], actual: [&str; 3], rules: &ScoringRules) -> i32 {
    let predicted_norm: Vec<String> = predicted.iter().map(|name| normalize(name)).collect();
    let actual_norm: Vec<String> = actual.iter().map(|name| normalize(name)).collect();

    let exact = predicted_norm
        .iter()
        .zip(&actual_norm)
        .all(|(pick, finisher)| !pick.is_empty() && pick == finisher);
    if exact {
        return rules.exact_match_points;
    }

    let podium: HashSet<&str> = actual_norm
        .iter()
        .filter(|name| !name.is_empty())
        .map(String::as_str)
        .collect();
    let correct_picks: HashSet<&str> = predicted_norm
        .iter()
        .filter(|name| !name.is_empty())
        .map(String::as_str)
        .filter(|name| podium.contains(name))
        .collect();

    match correct_picks.len() {
        3 => rules.one_off_points,
        2 => rules.two_off_points,
        _ => 0,
    }
}
