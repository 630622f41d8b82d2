use serde::{Deserialize, Serialize};

use super::calculator::normalize;

/// Per-prediction match counts used for the statistics breakdown.
///
/// Unlike the point calculator, classification is position-difference based:
/// a pick is an exact match when it finished in the predicted slot, one-off
/// when it finished one slot away, two-off when two slots away. The two views
/// can legitimately disagree (a fully scrambled podium scores one-off points
/// yet registers zero exact matches here); both behaviors are kept as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub exact_matches: u32,
    pub one_off_matches: u32,
    pub two_off_matches: u32,
}

impl MatchBreakdown {
    pub fn accumulate(&mut self, other: MatchBreakdown) {
        self.exact_matches += other.exact_matches;
        self.one_off_matches += other.one_off_matches;
        self.two_off_matches += other.two_off_matches;
    }
}

/// Classifies each predicted pick by how far its actual finishing position
/// was from the predicted one. Picks that did not finish on the podium
/// contribute nothing; each pick contributes at most one count.
pub fn classify_matches(predicted: [&str; 3], actual: [&str; 3]) -> MatchBreakdown {
    let actual_norm: Vec<String> = actual.iter().map(|name| normalize(name)).collect();

    let mut breakdown = MatchBreakdown::default();
    for (predicted_position, pick) in predicted.iter().enumerate() {
        let pick_norm = normalize(pick);
        if pick_norm.is_empty() {
            continue;
        }

        let Some(actual_position) = actual_norm.iter().position(|name| *name == pick_norm) else {
            continue;
        };

        match predicted_position.abs_diff(actual_position) {
            0 => breakdown.exact_matches += 1,
            1 => breakdown.one_off_matches += 1,
            _ => breakdown.two_off_matches += 1,
        }
    }

    breakdown
}
