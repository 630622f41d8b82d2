use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::AppError;

/// Default point values applied when a season has no configured rules
pub const DEFAULT_EXACT_MATCH_POINTS: i32 = 25;
pub const DEFAULT_ONE_OFF_POINTS: i32 = 18;
pub const DEFAULT_TWO_OFF_POINTS: i32 = 15;

/// Per-season scoring configuration.
///
/// `exact_match_points` is awarded for a perfectly ordered podium,
/// `one_off_points` when all three picks finished on the podium in the wrong
/// order, `two_off_points` when exactly two picks finished on the podium.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ScoringRules {
    pub season_id: String,
    pub exact_match_points: i32,
    pub one_off_points: i32,
    pub two_off_points: i32,
}

impl ScoringRules {
    /// The documented default rules (25/18/15) for an unconfigured season
    pub fn defaults_for(season_id: &str) -> Self {
        Self {
            season_id: season_id.to_string(),
            exact_match_points: DEFAULT_EXACT_MATCH_POINTS,
            one_off_points: DEFAULT_ONE_OFF_POINTS,
            two_off_points: DEFAULT_TWO_OFF_POINTS,
        }
    }

    /// Checks the rule invariants: non-negative values, and an exact match
    /// never worth less than the lower tiers.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.exact_match_points < 0 || self.one_off_points < 0 || self.two_off_points < 0 {
            return Err(AppError::Validation(
                "Scoring points must be non-negative".to_string(),
            ));
        }
        if self.exact_match_points < self.one_off_points
            || self.exact_match_points < self.two_off_points
        {
            return Err(AppError::Validation(
                "Exact match points must be at least the one-off and two-off points".to_string(),
            ));
        }
        Ok(())
    }
}
